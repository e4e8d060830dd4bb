//! Render projection: a full redraw description for one snapshot
//!
//! The projection is data only. Painting it (DOM, terminal, canvas) is the
//! frontend's concern; the stdio frontend uses the `Display` impl.

use std::fmt;

use crate::game::utils::{gauge_fill, piece_title, sprite_key};
use crate::game::Selection;
use crate::models::{Cell, Piece, PieceKind, PlayerId, Snapshot, BOARD_SIZE, ELIXIR_MAX};

/// Units in the elixir gauge
pub const GAUGE_UNITS: usize = ELIXIR_MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// Visual piece, keyed by (owner, type)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub key: String,
    pub title: String,
    glyph: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareView {
    pub cell: Cell,
    pub shade: Shade,
    pub sprite: Option<Sprite>,
    pub last_move: bool,
    pub valid_move: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Row-major, 64 entries
    pub squares: Vec<SquareView>,
    /// Local player's gauge, `true` for a full unit; `None` before joining
    pub elixir: Option<[bool; GAUGE_UNITS]>,
}

impl BoardView {
    pub fn square(&self, cell: Cell) -> &SquareView {
        &self.squares[cell.row() as usize * BOARD_SIZE as usize + cell.col() as usize]
    }

    pub fn full_units(&self) -> Option<usize> {
        self.elixir.map(|gauge| gauge.iter().filter(|full| **full).count())
    }

    pub fn highlighted(&self) -> impl Iterator<Item = Cell> + '_ {
        self.squares.iter().filter(|s| s.valid_move).map(|s| s.cell)
    }
}

/// Build a full redraw of `snapshot`
///
/// Prior highlighting never carries over: last-move marks come only from
/// `snapshot.last_move`, valid-move marks only from `selection`.
pub fn project(snapshot: &Snapshot, selection: Option<&Selection>, local: Option<PlayerId>) -> BoardView {
    let last_move = snapshot.last_move.as_ref().map(|m| m.squares());

    let squares = Cell::all()
        .map(|cell| SquareView {
            cell,
            shade: if (cell.row() + cell.col()) % 2 == 0 {
                Shade::Light
            } else {
                Shade::Dark
            },
            sprite: snapshot.board.piece_at(cell).map(sprite),
            last_move: last_move.is_some_and(|(from, to)| cell == from || cell == to),
            valid_move: selection.is_some_and(|s| s.allows(cell)),
        })
        .collect();

    let elixir = local.map(|player| {
        let full = gauge_fill(snapshot.elixir.level(player), ELIXIR_MAX);
        let mut gauge = [false; GAUGE_UNITS];
        gauge[..full].fill(true);
        gauge
    });

    BoardView { squares, elixir }
}

fn sprite(piece: &Piece) -> Sprite {
    let glyph = match piece.kind.kind() {
        Some(PieceKind::Pawn) => 'p',
        Some(PieceKind::Rook) => 'r',
        Some(PieceKind::Bishop) => 'b',
        Some(PieceKind::Knight) => 'n',
        Some(PieceKind::Queen) => 'q',
        Some(PieceKind::King) => 'k',
        None => '?',
    };

    Sprite {
        key: sprite_key(piece),
        title: piece_title(piece),
        glyph: match piece.owner {
            PlayerId::One => glyph.to_ascii_uppercase(),
            PlayerId::Two => glyph,
        },
    }
}

/// Text board: ranks 8..1 down the side, files a..h along the bottom.
/// `*` marks the last move, `+` a legal destination.
impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.chunks(BOARD_SIZE as usize) {
            let rank = BOARD_SIZE - row[0].cell.row();
            write!(f, "{} ", rank)?;
            for square in row {
                let glyph = square.sprite.as_ref().map_or('.', |s| s.glyph);
                let mark = if square.valid_move {
                    '+'
                } else if square.last_move {
                    '*'
                } else {
                    ' '
                };
                write!(f, " {}{}", glyph, mark)?;
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for file in (b'a'..b'a' + BOARD_SIZE).map(char::from) {
            write!(f, " {} ", file)?;
        }
        writeln!(f)?;

        if let Some(gauge) = self.elixir {
            let bar: String = gauge.iter().map(|full| if *full { '#' } else { '-' }).collect();
            writeln!(f, "Elixir [{}] {}/{}", bar, self.full_units().unwrap_or(0), GAUGE_UNITS)?;
        }
        Ok(())
    }
}
