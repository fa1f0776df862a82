//! A playing-card deck builder with optional `no_std` support.
//!
//! [`new`] starts from the 52 standard cards and runs a list of options over
//! them in order. Options sort, shuffle, filter, repeat the deck or add
//! jokers, and any `FnMut(Vec<Card>) -> Vec<Card>` closure works as an option.
//!
//! # Example
//!
//! ```
//! use deckrs::DeckOption;
//! use deckrs::options::{jokers, multiply, shuffle_seeded};
//!
//! let cards = deckrs::new([multiply(2).boxed(), jokers(4).boxed(), shuffle_seeded(42).boxed()]);
//! assert_eq!(cards.len(), 108);
//! assert_eq!(cards.iter().filter(|card| card.is_joker()).count(), 4);
//! ```
//!
//! The same deck through [`DeckBuilder`]:
//!
//! ```
//! use deckrs::DeckBuilder;
//!
//! let cards = DeckBuilder::new()
//!     .with_multiply(2)
//!     .with_jokers(4)
//!     .with_shuffle_seed(42)
//!     .build();
//! assert_eq!(cards.len(), 108);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::{DeckBuilder, new, standard};
pub use error::{ParseCardError, RankError};
pub use options::{DeckOption, less};
