#![allow(dead_code)]

use elixir_chess_client::models::{Board, Cell, Piece, PieceKind, PlayerId, Snapshot};

pub fn cell(row: i64, col: i64) -> Cell {
    Cell::new(row, col).expect("test cell on board")
}

pub fn piece(kind: PieceKind, owner: PlayerId) -> Piece {
    Piece::new(kind, owner, 10)
}

/// Board with the given pieces and nothing else
pub fn board(pieces: &[((i64, i64), PieceKind, PlayerId)]) -> Board {
    pieces
        .iter()
        .fold(Board::empty(), |board, &((row, col), kind, owner)| {
            board.with_piece(cell(row, col), piece(kind, owner))
        })
}

pub fn snapshot(pieces: &[((i64, i64), PieceKind, PlayerId)]) -> Snapshot {
    Snapshot::new(board(pieces))
}

/// Opening layout the authority starts a game with
pub fn opening_board() -> Board {
    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    let mut board = Board::empty();
    for (col, kind) in back.into_iter().enumerate() {
        let col = col as i64;
        board = board
            .with_piece(cell(0, col), piece(kind, PlayerId::One))
            .with_piece(cell(1, col), piece(PieceKind::Pawn, PlayerId::One))
            .with_piece(cell(6, col), piece(PieceKind::Pawn, PlayerId::Two))
            .with_piece(cell(7, col), piece(kind, PlayerId::Two));
    }
    board
}

pub fn sorted(mut cells: Vec<Cell>) -> Vec<Cell> {
    cells.sort();
    cells
}
