//! Deck construction.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::options::{self, DeckOption};

/// Returns the 52 standard cards, suits in [`SUITS`] order and ranks ascending.
///
/// # Example
///
/// ```
/// let cards = deckrs::standard();
/// assert_eq!(cards.len(), deckrs::DECK_SIZE);
/// assert_eq!(cards[0].to_string(), "Ace of Spades");
/// assert_eq!(cards[13].to_string(), "Ace of Diamonds");
/// ```
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in SUITS {
        for rank in RANKS {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Builds a deck from the standard cards and the given options.
///
/// Options are applied in order, each one receiving the output of the previous
/// one. Their results are not validated.
///
/// # Example
///
/// ```
/// use deckrs::DeckOption;
/// use deckrs::options::{jokers, multiply};
///
/// let cards = deckrs::new([multiply(2).boxed(), jokers(2).boxed()]);
/// assert_eq!(cards.len(), 106);
/// ```
#[must_use]
pub fn new<'a, I>(options: I) -> Vec<Card>
where
    I: IntoIterator<Item = Box<dyn DeckOption + 'a>>,
{
    let mut cards = standard();
    let mut applied = 0_usize;

    for mut option in options {
        cards = option.apply(cards);
        applied += 1;
        trace!("option {applied} produced {} cards", cards.len());
    }

    debug!("built deck of {} cards with {applied} options", cards.len());
    cards
}

/// Builder for a customized deck.
///
/// Options are recorded in call order and run by [`DeckBuilder::build`]:
///
/// ```
/// use deckrs::{DeckBuilder, Rank};
///
/// let cards = DeckBuilder::new()
///     .with_multiply(2)
///     .with_filter(|card| card.rank == Rank::Two)
///     .with_jokers(2)
///     .with_shuffle_seed(7)
///     .build();
/// assert_eq!(cards.len(), 98);
/// ```
#[derive(Default)]
pub struct DeckBuilder<'a> {
    options: Vec<Box<dyn DeckOption + 'a>>,
}

impl fmt::Debug for DeckBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("options", &self.options.len())
            .finish()
    }
}

impl<'a> DeckBuilder<'a> {
    /// Creates a builder with no options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Adds a custom option.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckBuilder};
    ///
    /// let cards = DeckBuilder::new()
    ///     .with_option(|cards: Vec<Card>| -> Vec<Card> { cards.into_iter().take(5).collect() })
    ///     .build();
    /// assert_eq!(cards.len(), 5);
    /// ```
    #[must_use]
    pub fn with_option<O>(mut self, option: O) -> Self
    where
        O: DeckOption + 'a,
    {
        self.options.push(option.boxed());
        self
    }

    /// Sorts the deck by suit, then rank. See [`options::default_sort`].
    #[must_use]
    pub fn with_default_sort(self) -> Self {
        self.with_option(options::default_sort())
    }

    /// Sorts the deck with a positional less-than predicate. See [`options::sort`].
    #[must_use]
    pub fn with_sort<L>(self, less: L) -> Self
    where
        L: FnMut(&[Card], usize, usize) -> bool + 'a,
    {
        self.with_option(options::sort(less))
    }

    /// Shuffles the deck with fresh OS entropy. See [`options::shuffle`].
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn with_shuffle(self) -> Self {
        self.with_option(options::shuffle())
    }

    /// Shuffles the deck reproducibly from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let a = DeckBuilder::new().with_shuffle_seed(9).build();
    /// let b = DeckBuilder::new().with_shuffle_seed(9).build();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn with_shuffle_seed(self, seed: u64) -> Self {
        self.with_option(options::shuffle_seeded(seed))
    }

    /// Shuffles the deck with the given random number generator.
    #[must_use]
    pub fn with_shuffle_rng<R>(self, rng: R) -> Self
    where
        R: Rng + 'a,
    {
        self.with_option(options::shuffle_with(rng))
    }

    /// Appends `n` jokers.
    #[must_use]
    pub fn with_jokers(self, n: usize) -> Self {
        self.with_option(options::jokers(n))
    }

    /// Removes the cards matching `exclude`. See [`options::filter`].
    #[must_use]
    pub fn with_filter<P>(self, exclude: P) -> Self
    where
        P: FnMut(&Card) -> bool + 'a,
    {
        self.with_option(options::filter(exclude))
    }

    /// Repeats the deck `n` times.
    #[must_use]
    pub fn with_multiply(self, n: usize) -> Self {
        self.with_option(options::multiply(n))
    }

    /// Builds the deck.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        new(self.options)
    }
}
