//! Fixed-size occupancy grid with deep-copy snapshots
//!
//! The solver mutates a single live board in place and clones it every time a
//! step is recorded. `Board` owns its storage outright, so a clone never shares
//! rows with the original and later backtracking cannot rewrite history.

use std::fmt;

use ndarray::Array2;

use crate::board::position::{Position, file_letter};
use crate::io::error::{Result, invalid_parameter};

/// Occupancy of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// No queen on the square
    #[default]
    Empty,
    /// A queen occupies the square
    Queen,
}

/// Edge length of a square board, guaranteed to be at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validate a board edge length
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(invalid_parameter("size", &n, &"board size must be at least 1"));
        }
        Ok(Self(n))
    }

    /// Edge length as a plain integer
    pub const fn get(self) -> usize {
        self.0
    }

    /// Check whether a position lies on a board of this size
    pub const fn contains(self, position: Position) -> bool {
        position.is_within(self.0)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// N×N occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Create a board with every square empty
    pub fn empty(size: BoardSize) -> Self {
        Self {
            cells: Array2::from_elem((size.get(), size.get()), Cell::Empty),
        }
    }

    /// Edge length of the board
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Occupancy at a position, `None` when off the board
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get([position.row, position.col]).copied()
    }

    /// Check whether a queen stands on the position
    pub fn is_queen(&self, position: Position) -> bool {
        self.get(position) == Some(Cell::Queen)
    }

    /// Put a queen on the position
    ///
    /// Returns `false` without changing the board if the position is off the board.
    pub fn place(&mut self, position: Position) -> bool {
        self.set(position, Cell::Queen)
    }

    /// Clear the position
    ///
    /// Returns `false` without changing the board if the position is off the board.
    pub fn remove(&mut self, position: Position) -> bool {
        self.set(position, Cell::Empty)
    }

    fn set(&mut self, position: Position, cell: Cell) -> bool {
        self.cells
            .get_mut([position.row, position.col])
            .map(|slot| *slot = cell)
            .is_some()
    }

    /// Occupied squares in row-major order
    pub fn queens(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| **cell == Cell::Queen)
            .map(|((row, col), _)| Position::new(row, col))
    }

    /// Number of queens on the board
    pub fn queen_count(&self) -> usize {
        self.queens().count()
    }

    /// Rows as `0`/`1` values, top row first
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&cell| u8::from(cell == Cell::Queen)).collect())
            .collect()
    }
}

// Ranks are printed from the bottom edge, files underneath
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let width = size.to_string().len();

        for (row, cells) in self.cells.rows().into_iter().enumerate() {
            write!(f, "{:>width$} ", size - row)?;
            for cell in cells {
                match cell {
                    Cell::Empty => write!(f, " .")?,
                    Cell::Queen => write!(f, " Q")?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "{:>width$} ", "")?;
        for col in 0..size {
            write!(f, " {}", file_letter(col))?;
        }
        writeln!(f)
    }
}
