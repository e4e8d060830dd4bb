use serde::{Deserialize, Serialize};

use crate::models::cell::{Cell, BOARD_SIZE};
use crate::models::piece::{Piece, PlayerId};

/// Units that make up a full elixir gauge
pub const ELIXIR_MAX: i32 = 10;

/// 8x8 grid of optional pieces, row-major
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize]);

impl Board {
    pub fn empty() -> Self {
        Board::default()
    }

    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.0[cell.row() as usize][cell.col() as usize].as_ref()
    }

    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.piece_at(cell).is_none()
    }

    /// Builder used when assembling boards locally
    pub fn with_piece(mut self, cell: Cell, piece: Piece) -> Self {
        self.0[cell.row() as usize][cell.col() as usize] = Some(piece);
        self
    }

    /// Occupied cells with their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, &Piece)> + '_ {
        Cell::all().filter_map(move |cell| self.piece_at(cell).map(|piece| (cell, piece)))
    }
}

/// The most recently applied authoritative move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Cell,
    pub to: Cell,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerId>,
}

impl MoveRecord {
    pub fn new(from: Cell, to: Cell) -> Self {
        MoveRecord {
            from,
            to,
            player: None,
        }
    }

    /// Structural identity of the move: the (from, to) pair
    pub fn squares(&self) -> (Cell, Cell) {
        (self.from, self.to)
    }
}

/// Per-player elixir levels, keyed `"1"` / `"2"` on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElixirLevels {
    #[serde(rename = "1", default)]
    pub player_one: i32,
    #[serde(rename = "2", default)]
    pub player_two: i32,
}

impl ElixirLevels {
    pub fn level(&self, player: PlayerId) -> i32 {
        match player {
            PlayerId::One => self.player_one,
            PlayerId::Two => self.player_two,
        }
    }
}

/// One immutable authoritative view of the game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    #[serde(default)]
    pub last_move: Option<MoveRecord>,
    #[serde(default)]
    pub elixir: ElixirLevels,
}

impl Snapshot {
    pub fn new(board: Board) -> Self {
        Snapshot {
            board,
            last_move: None,
            elixir: ElixirLevels::default(),
        }
    }

    pub fn with_last_move(mut self, from: Cell, to: Cell) -> Self {
        self.last_move = Some(MoveRecord::new(from, to));
        self
    }

    pub fn with_elixir(mut self, player_one: i32, player_two: i32) -> Self {
        self.elixir = ElixirLevels {
            player_one,
            player_two,
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::piece::{PieceKind, PieceType};

    const AUTHORITY_STATE: &str = r#"{
        "board": [
            [{"type":"rook","hp":20,"owner":1,"elixir_cost":5},null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,{"type":"king","hp":30,"owner":2,"elixir_cost":10}]
        ],
        "elixir": {"1": 4, "2": 10},
        "last_move": {"from":[1,0],"to":[0,0],"player":"1"}
    }"#;

    #[test]
    fn parses_authority_state() {
        let snapshot: Snapshot = serde_json::from_str(AUTHORITY_STATE).unwrap();

        let rook = snapshot.board.piece_at(Cell::new(0, 0).unwrap()).unwrap();
        assert_eq!(rook.kind, PieceType::Known(PieceKind::Rook));
        let king = snapshot.board.piece_at(Cell::new(7, 7).unwrap()).unwrap();
        assert_eq!(king.owner, PlayerId::Two);
        assert_eq!(snapshot.board.pieces().count(), 2);

        assert_eq!(snapshot.elixir.level(PlayerId::One), 4);
        assert_eq!(snapshot.elixir.level(PlayerId::Two), 10);

        let last = snapshot.last_move.unwrap();
        assert_eq!(last.squares(), (Cell::new(1, 0).unwrap(), Cell::new(0, 0).unwrap()));
        assert_eq!(last.player, Some(PlayerId::One));
    }

    #[test]
    fn missing_last_move_and_elixir_default() {
        let json = r#"{"board": [[null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],[null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],[null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],[null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null]], "last_move": null}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.last_move, None);
        assert_eq!(snapshot.elixir, ElixirLevels::default());
        assert_eq!(snapshot.board, Board::empty());
    }

    #[test]
    fn rejects_short_board() {
        assert!(serde_json::from_str::<Snapshot>(r#"{"board": [[null]]}"#).is_err());
    }
}
