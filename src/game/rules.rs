//! Movement rules
//!
//! Legal destinations are computed from the piece and the board alone. Whose
//! turn it is and how much elixir anyone holds do not matter here; the
//! authority decides those. This is a local prediction used to highlight and
//! filter clicks, not an enforcement mechanism.

use crate::models::{Board, Cell, Piece, PieceKind, PlayerId};

/// A (row, column) step
pub type Offset = (i8, i8);

const ORTHOGONAL: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ADJACENT: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_JUMPS: [Offset; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// How a piece kind moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// One straight step onto empty cells, diagonal steps only to capture
    Pawn { forward: i8 },
    /// Exactly one step along each offset
    Step(&'static [Offset]),
    /// Slide along each direction until the first occupied cell
    Ray(&'static [Offset]),
}

impl PieceKind {
    pub fn movement(self, owner: PlayerId) -> Movement {
        match self {
            PieceKind::Pawn => Movement::Pawn {
                forward: owner.forward(),
            },
            PieceKind::Knight => Movement::Step(&KNIGHT_JUMPS),
            PieceKind::King => Movement::Step(&ADJACENT),
            PieceKind::Rook => Movement::Ray(&ORTHOGONAL),
            PieceKind::Bishop => Movement::Ray(&DIAGONAL),
            PieceKind::Queen => Movement::Ray(&ADJACENT),
        }
    }
}

/// Every cell `piece`, standing on `origin`, may move to
///
/// Destinations never leave the board. Callers only ask about verified-owned
/// origins; `origin` is not checked against the board. A piece type outside
/// the known kinds has no destinations.
pub fn legal_destinations(piece: &Piece, board: &Board, origin: Cell) -> Vec<Cell> {
    let Some(kind) = piece.kind.kind() else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match kind.movement(piece.owner) {
        Movement::Pawn { forward } => pawn_moves(piece.owner, forward, board, origin, &mut moves),
        Movement::Step(offsets) => step_moves(piece.owner, offsets, board, origin, &mut moves),
        Movement::Ray(directions) => ray_moves(piece.owner, directions, board, origin, &mut moves),
    }
    moves
}

fn is_enemy(board: &Board, cell: Cell, owner: PlayerId) -> bool {
    board
        .piece_at(cell)
        .is_some_and(|other| other.owner != owner)
}

fn pawn_moves(owner: PlayerId, forward: i8, board: &Board, origin: Cell, moves: &mut Vec<Cell>) {
    if let Some(ahead) = origin.offset(forward, 0) {
        if board.is_empty_at(ahead) {
            moves.push(ahead);
        }
    }

    for side in [-1, 1] {
        if let Some(diagonal) = origin.offset(forward, side) {
            if is_enemy(board, diagonal, owner) {
                moves.push(diagonal);
            }
        }
    }
}

fn step_moves(owner: PlayerId, offsets: &[Offset], board: &Board, origin: Cell, moves: &mut Vec<Cell>) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = origin.offset(d_row, d_col) {
            if board.is_empty_at(target) || is_enemy(board, target, owner) {
                moves.push(target);
            }
        }
    }
}

fn ray_moves(owner: PlayerId, directions: &[Offset], board: &Board, origin: Cell, moves: &mut Vec<Cell>) {
    for &(d_row, d_col) in directions {
        let mut cursor = origin.offset(d_row, d_col);
        while let Some(cell) = cursor {
            match board.piece_at(cell) {
                None => moves.push(cell),
                Some(blocker) => {
                    if blocker.owner != owner {
                        moves.push(cell);
                    }
                    break;
                }
            }
            cursor = cell.offset(d_row, d_col);
        }
    }
}
