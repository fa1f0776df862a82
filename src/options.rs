//! Deck construction options.
//!
//! An option is a transform from one card sequence to the next. Any
//! `FnMut(Vec<Card>) -> Vec<Card>` closure is an option, and this module
//! provides the common ones.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANKS};

/// A transform applied to the deck while it is being built.
///
/// Implementations should only compute their output from the input cards.
///
/// # Example
///
/// ```
/// use deckrs::{Card, DeckOption};
///
/// let mut reverse = |mut cards: Vec<Card>| -> Vec<Card> {
///     cards.reverse();
///     cards
/// };
/// let cards = reverse.apply(deckrs::standard());
/// assert_eq!(cards[0].to_string(), "King of Hearts");
/// ```
pub trait DeckOption {
    /// Consumes the current sequence and returns the next one.
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card>;

    /// Boxes the option so it can be mixed with options of other types.
    fn boxed<'a>(self) -> Box<dyn DeckOption + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<F> DeckOption for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

fn sort_key(card: &Card) -> u8 {
    card.absolute_rank().unwrap_or(u8::MAX)
}

/// Compares the cards at positions `i` and `j` by absolute rank.
///
/// Jokers compare greater than every standard card and equal to each other.
#[must_use]
pub fn less(cards: &[Card], i: usize, j: usize) -> bool {
    sort_key(&cards[i]) < sort_key(&cards[j])
}

/// Sorts the deck by suit in [`SUITS`](crate::SUITS) order, then by rank.
///
/// Jokers are moved after all standard cards and keep their relative order.
///
/// # Example
///
/// ```
/// use deckrs::DeckOption;
/// use deckrs::options::{default_sort, jokers, shuffle_seeded};
///
/// let cards = deckrs::new([
///     jokers(1).boxed(),
///     shuffle_seeded(3).boxed(),
///     default_sort().boxed(),
/// ]);
/// assert_eq!(cards[0].to_string(), "Ace of Spades");
/// assert_eq!(cards[51].to_string(), "King of Hearts");
/// assert!(cards[52].is_joker());
/// ```
#[must_use]
pub fn default_sort() -> impl DeckOption {
    sort(less)
}

/// Sorts the deck with a caller supplied ordering.
///
/// `less(cards, i, j)` reports whether the card at position `i` of the input
/// sequence goes before the card at position `j`. The sort is stable.
///
/// # Panics
///
/// May panic if `less` does not describe a strict weak ordering.
///
/// # Example
///
/// ```
/// use deckrs::{Card, DeckOption};
/// use deckrs::options::sort;
///
/// let kings_first = sort(|cards: &[Card], i, j| cards[i].rank > cards[j].rank);
/// let cards = deckrs::new([kings_first.boxed()]);
/// assert_eq!(cards[0].to_string(), "King of Spades");
/// assert_eq!(cards[4].to_string(), "Queen of Spades");
/// ```
#[must_use]
pub fn sort<L>(mut less: L) -> impl DeckOption
where
    L: FnMut(&[Card], usize, usize) -> bool,
{
    move |cards: Vec<Card>| -> Vec<Card> {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        order.sort_by(|&i, &j| {
            if less(&cards, i, j) {
                Ordering::Less
            } else if less(&cards, j, i) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        order.into_iter().map(|i| cards[i]).collect()
    }
}

/// Shuffles the deck with a generator seeded from OS entropy.
///
/// A new generator is created each time the option runs, so results are not
/// reproducible. Use [`shuffle_seeded`] or [`shuffle_with`] for that.
///
/// # Panics
///
/// Panics if the OS entropy source is unavailable.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle() -> impl DeckOption {
    |mut cards: Vec<Card>| -> Vec<Card> {
        cards.shuffle(&mut ChaCha8Rng::from_os_rng());
        cards
    }
}

/// Shuffles the deck with a [`ChaCha8Rng`] seeded from `seed`.
///
/// # Example
///
/// ```
/// use deckrs::DeckOption;
/// use deckrs::options::shuffle_seeded;
///
/// let a = deckrs::new([shuffle_seeded(42).boxed()]);
/// let b = deckrs::new([shuffle_seeded(42).boxed()]);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn shuffle_seeded(seed: u64) -> impl DeckOption {
    shuffle_with(ChaCha8Rng::seed_from_u64(seed))
}

/// Shuffles the deck with the given random number generator.
#[must_use]
pub fn shuffle_with<R>(mut rng: R) -> impl DeckOption
where
    R: Rng,
{
    move |mut cards: Vec<Card>| -> Vec<Card> {
        cards.shuffle(&mut rng);
        cards
    }
}

/// Appends `n` jokers to the end of the deck.
///
/// Joker ranks cycle from Ace upwards and carry no meaning.
#[must_use]
pub fn jokers(n: usize) -> impl DeckOption {
    move |mut cards: Vec<Card>| -> Vec<Card> {
        cards.extend(RANKS.iter().cycle().take(n).map(|&rank| Card::joker(rank)));
        cards
    }
}

/// Removes every card for which `exclude` returns `true`.
///
/// Note the polarity: the predicate selects the cards to drop. Remaining cards
/// keep their order.
///
/// # Example
///
/// ```
/// use deckrs::{Card, DeckOption, Rank};
/// use deckrs::options::filter;
///
/// let cards = deckrs::new([filter(|card: &Card| card.rank == Rank::Ace).boxed()]);
/// assert_eq!(cards.len(), 48);
/// ```
#[must_use]
pub fn filter<P>(mut exclude: P) -> impl DeckOption
where
    P: FnMut(&Card) -> bool,
{
    move |mut cards: Vec<Card>| -> Vec<Card> {
        cards.retain(|card| !exclude(card));
        cards
    }
}

/// Replaces the deck with `n` consecutive copies of itself.
///
/// `multiply(0)` leaves an empty deck.
#[must_use]
pub fn multiply(n: usize) -> impl DeckOption {
    move |cards: Vec<Card>| -> Vec<Card> { cards.repeat(n) }
}
