//! Rewrites raw square labels in solver messages into board notation

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::board::Position;

// Raw labels always appear parenthesised, e.g. "(B3)"
static RAW_SQUARE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(([A-Z])(\d+)\)").ok());

/// Replace every `(<letter><row>)` label with its board-notation equivalent
///
/// Labels that do not name a square on an `size`×`size` board are left as they are.
pub fn relabel(message: &str, size: usize) -> String {
    let Some(pattern) = RAW_SQUARE.as_ref() else {
        return message.to_string();
    };

    pattern
        .replace_all(message, |caps: &Captures<'_>| {
            raw_position(caps).filter(|position| position.is_within(size)).map_or_else(
                || caps.get(0).map_or_else(String::new, |m| m.as_str().to_string()),
                |position| format!("({})", position.board_label(size)),
            )
        })
        .into_owned()
}

fn raw_position(caps: &Captures<'_>) -> Option<Position> {
    let letter = caps.get(1)?.as_str().chars().next()?;
    let row_label: usize = caps.get(2)?.as_str().parse().ok()?;
    let col = (letter as usize).checked_sub('A' as usize)?;
    let row = row_label.checked_sub(1)?;
    Some(Position::new(row, col))
}
