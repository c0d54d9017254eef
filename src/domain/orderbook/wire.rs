//! Wire types for depth responses.
//!
//! Book levels arrive as positional arrays, not objects:
//! `[price, quantity, size, volume]`. Cells may be strings or numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of a positional book level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// `[price, quantity, size, volume]` exactly as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLevel(pub Cell, pub Cell, pub Cell, pub Cell);
