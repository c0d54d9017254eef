//! Conversion: RawLevel ↔ BookLevel / Ask / Bid.

use super::wire::{Cell, RawLevel};
use super::{Ask, Bid, BookLevel, BookLevelError};

fn quantity(cell: Cell) -> Result<u64, BookLevelError> {
    match cell {
        Cell::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| BookLevelError::InvalidQuantity(s)),
        Cell::Number(n) => n
            .as_u64()
            .ok_or_else(|| BookLevelError::InvalidQuantity(n.to_string())),
    }
}

fn text(cell: Cell, field: &'static str) -> Result<String, BookLevelError> {
    let value = cell.to_string();
    if value.trim().is_empty() {
        return Err(BookLevelError::Empty(field));
    }
    Ok(value)
}

impl TryFrom<RawLevel> for BookLevel {
    type Error = BookLevelError;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        let RawLevel(price, qty, size, volume) = raw;
        Ok(BookLevel {
            price: text(price, "price")?,
            quantity: quantity(qty)?,
            size: text(size, "size")?,
            volume: text(volume, "volume")?,
        })
    }
}

impl From<BookLevel> for RawLevel {
    fn from(level: BookLevel) -> Self {
        RawLevel(
            Cell::Text(level.price),
            Cell::Text(level.quantity.to_string()),
            Cell::Text(level.size),
            Cell::Text(level.volume),
        )
    }
}

impl TryFrom<RawLevel> for Ask {
    type Error = BookLevelError;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        BookLevel::try_from(raw).map(Ask)
    }
}

impl TryFrom<RawLevel> for Bid {
    type Error = BookLevelError;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        BookLevel::try_from(raw).map(Bid)
    }
}

impl From<Ask> for RawLevel {
    fn from(ask: Ask) -> Self {
        ask.0.into()
    }
}

impl From<Bid> for RawLevel {
    fn from(bid: Bid) -> Self {
        bid.0.into()
    }
}
