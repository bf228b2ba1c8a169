//! Square coordinates and the two label schemes used in messages
//!
//! Positions are always stored as raw zero-indexed `(row, col)` pairs with row 0
//! at the top edge. Solver messages label squares with the column letter and the
//! one-based row counted from the top (`A1` is the top-left square). Displayed
//! boards count ranks from the bottom edge instead, so on an N×N board raw row 0
//! is rank N and raw row N-1 is rank 1.

use serde::Serialize;

use crate::io::error::{Result, invalid_square};

/// A zero-indexed square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    /// Row index, 0 at the top edge
    pub row: usize,
    /// Column index, 0 at the left edge
    pub col: usize,
}

impl Position {
    /// Create a position from raw indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether both indices fall inside an `size`×`size` board
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Raw label used in solver messages: column letter plus row counted from the top
    pub fn label(self) -> String {
        format!("{}{}", file_letter(self.col), self.row + 1)
    }

    /// Board-notation label: column letter plus rank counted from the bottom edge
    pub fn board_label(self, size: usize) -> String {
        format!("{}{}", file_letter(self.col), size.saturating_sub(self.row))
    }

    /// Parse a square such as `B3` written in board notation
    ///
    /// The letter selects the column (case-insensitive), the number is the rank
    /// counted from the bottom edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the square is malformed or lies outside the board
    pub fn parse_board_label(input: &str, size: usize) -> Result<Self> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();

        let letter = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| invalid_square(input, &"expected a column letter"))?;
        let col = (letter.to_ascii_uppercase() as usize) - ('A' as usize);

        let rank: usize = chars
            .as_str()
            .parse()
            .map_err(|_parse_error| invalid_square(input, &"expected a rank number"))?;

        if col >= size {
            return Err(invalid_square(
                input,
                &format!("column {letter} is outside a {size}x{size} board"),
            ));
        }
        if rank == 0 || rank > size {
            return Err(invalid_square(
                input,
                &format!("rank {rank} is outside 1..={size}"),
            ));
        }

        Ok(Self::new(size - rank, col))
    }
}

/// Column letter for a zero-indexed column (`A` for 0)
///
/// Columns beyond `Z` have no letter and are shown as `?`.
pub fn file_letter(col: usize) -> char {
    u8::try_from(col)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}
