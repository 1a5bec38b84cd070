//! Board model for the 3x3 grid

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// Winning index triples: rows, then columns, then diagonals
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Cell contents
///
/// Wire symbols match the web UI: `"X"`, `"O"`, and `" "` for empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = " ")]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Cell::Empty => " ",
            Cell::X => "X",
            Cell::O => "O",
        };
        write!(f, "{}", symbol)
    }
}

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Board shape errors, raised when constructing a board from
/// untrusted input. The game logic itself never fails.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have exactly {BOARD_CELLS} cells, got {0}")]
    WrongLength(usize),
    #[error("unrecognized cell symbol: {0:?}")]
    BadSymbol(char),
}

/// The 3x3 board, row-major (index = row * 3 + col)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board([Cell; BOARD_CELLS]);

impl Board {
    pub const fn empty() -> Self {
        Self([Cell::Empty; BOARD_CELLS])
    }

    pub fn get(&self, index: usize) -> Cell {
        self.0[index]
    }

    pub fn set(&mut self, index: usize, cell: Cell) {
        self.0[index] = cell;
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<[Cell; BOARD_CELLS]> for Board {
    fn from(cells: [Cell; BOARD_CELLS]) -> Self {
        Self(cells)
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = BoardError;

    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; BOARD_CELLS] = cells
            .try_into()
            .map_err(|_| BoardError::WrongLength(cells.len()))?;
        Ok(Self(cells))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse a board from 9 symbols, row-major. `X`/`O` place marks;
    /// space, `.`, and `_` leave the cell empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        let mut count = 0;

        for (i, c) in s.chars().enumerate() {
            if i >= BOARD_CELLS {
                return Err(BoardError::WrongLength(s.chars().count()));
            }
            cells[i] = match c {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                ' ' | '.' | '_' => Cell::Empty,
                other => return Err(BoardError::BadSymbol(other)),
            };
            count += 1;
        }

        if count != BOARD_CELLS {
            return Err(BoardError::WrongLength(count));
        }
        Ok(Self(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            writeln!(
                f,
                "{}|{}|{}",
                self.0[row * 3],
                self.0[row * 3 + 1],
                self.0[row * 3 + 2]
            )?;
        }
        Ok(())
    }
}
