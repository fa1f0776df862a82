//! Error types for card conversion and parsing.

use thiserror::Error;

/// Errors that can occur when converting a number into a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Value is outside `1..=13`.
    #[error("rank value {0} is out of range 1..=13")]
    OutOfRange(u8),
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Unknown suit name.
    #[error("unknown suit name")]
    Suit,
    /// Unknown rank name.
    #[error("unknown rank name")]
    Rank,
    /// Text is neither `"<Rank> of <Suit>s"` nor `"Joker"`.
    #[error("expected \"<rank> of <suit>\" or \"Joker\"")]
    Format,
}
