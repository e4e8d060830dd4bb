use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// A board coordinate, zero-based (row, column), always inside the board
///
/// Row 0 and column 0 are the same fixed corner the authority uses. On the
/// wire a cell is a two-element array `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[u8; 2]")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Build a cell, or `None` when the coordinate is off the board
    pub fn new(row: i64, col: i64) -> Option<Cell> {
        let size = i64::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Cell {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Step by a (row, column) offset; off-board results are `None`
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Cell> {
        Cell::new(
            i64::from(self.row) + i64::from(d_row),
            i64::from(self.col) + i64::from(d_col),
        )
    }

    /// All 64 cells in row-major order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell { row, col }))
    }

    /// Human label: files a..h for columns, ranks 8..1 for rows (row 0 on top)
    pub fn label(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE - self.row;
        format!("{}{}", file, rank)
    }
}

impl TryFrom<[i64; 2]> for Cell {
    type Error = ClientError;

    fn try_from([row, col]: [i64; 2]) -> Result<Self, Self::Error> {
        Cell::new(row, col).ok_or(ClientError::OffBoard { row, col })
    }
}

impl From<Cell> for [u8; 2] {
    fn from(cell: Cell) -> Self {
        [cell.row, cell.col]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses either `"row col"` / `"row,col"` or a label such as `"e4"`
impl FromStr for Cell {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        if let [row, col] = parts.as_slice() {
            let row = row.parse::<i64>().map_err(|_| ClientError::Command {
                input: s.to_string(),
            })?;
            let col = col.parse::<i64>().map_err(|_| ClientError::Command {
                input: s.to_string(),
            })?;
            return Cell::try_from([row, col]);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                let col = i64::from(file as u8 - b'a');
                let row = i64::from(BOARD_SIZE) - i64::from(rank as u8 - b'0');
                Cell::try_from([row, col])
            }
            _ => Err(ClientError::Command {
                input: s.to_string(),
            }),
        }
    }
}
