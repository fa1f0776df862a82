//! Card types and the shared suit and rank tables.

use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, RankError};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Sentinel suit for joker cards, never part of a standard deck.
    Joker,
}

/// The standard suits in deck order.
///
/// Base deck construction and the default sort key both follow this table.
pub const SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

impl Suit {
    /// Returns the position of the suit in [`SUITS`], or `None` for [`Suit::Joker`].
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Suit;
    ///
    /// assert_eq!(Suit::Club.index(), Some(2));
    /// assert_eq!(Suit::Joker.index(), None);
    /// ```
    #[must_use]
    pub fn index(self) -> Option<usize> {
        SUITS.iter().position(|&suit| suit == self)
    }

    /// Returns the singular display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    /// Parses a suit name, singular or plural ("Heart", "HEARTS"), ignoring
    /// ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let singular = s.strip_suffix(['s', 'S']).unwrap_or(s);
        [Self::Spade, Self::Diamond, Self::Club, Self::Heart, Self::Joker]
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(singular))
            .ok_or(ParseCardError::Suit)
    }
}

/// Card rank, ordered from [`Rank::Ace`] (1) to [`Rank::King`] (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

/// All ranks in ascending order.
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// Returns the numeric value of the rank (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    /// Converts a rank value in `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Rank, RankError};
    ///
    /// assert_eq!(Rank::try_from(12), Ok(Rank::Queen));
    /// assert_eq!(Rank::try_from(0), Err(RankError::OutOfRange(0)));
    /// ```
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RANKS
            .get(usize::from(value).wrapping_sub(1))
            .copied()
            .ok_or(RankError::OutOfRange(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .into_iter()
            .find(|rank| rank.name().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::Rank)
    }
}

/// A playing card.
///
/// Displays as `"<Rank> of <Suit>s"`, or just `"Joker"` for joker cards:
///
/// ```
/// use deckrs::{Card, Rank, Suit};
///
/// assert_eq!(Card::new(Suit::Heart, Rank::Ace).to_string(), "Ace of Hearts");
/// assert_eq!(Card::joker(Rank::Five).to_string(), "Joker");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card. Carries no meaning for jokers.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker card.
    #[must_use]
    pub const fn joker(rank: Rank) -> Self {
        Self::new(Suit::Joker, rank)
    }

    /// Returns `true` if this is a joker card.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns the position of the card in a sorted standard deck, counted
    /// from 1 (`suit_index * 13 + rank_value`).
    ///
    /// Jokers have no suit index and return `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spade, Rank::Ace).absolute_rank(), Some(1));
    /// assert_eq!(Card::new(Suit::Heart, Rank::King).absolute_rank(), Some(52));
    /// assert_eq!(Card::joker(Rank::Ace).absolute_rank(), None);
    /// ```
    #[must_use]
    pub fn absolute_rank(&self) -> Option<u8> {
        self.suit
            .index()
            .map(|index| index as u8 * RANKS.len() as u8 + self.rank.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str(self.suit.name());
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the display form of a card, ignoring ASCII case. A parsed
    /// `"Joker"` gets rank Ace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Suit::Joker.name()) {
            return Ok(Self::joker(Rank::Ace));
        }

        let mut words = s.split_whitespace();
        let (Some(rank), Some(of), Some(suit), None) =
            (words.next(), words.next(), words.next(), words.next())
        else {
            return Err(ParseCardError::Format);
        };
        if !of.eq_ignore_ascii_case("of") {
            return Err(ParseCardError::Format);
        }

        let suit: Suit = suit.parse()?;
        if suit == Suit::Joker {
            return Err(ParseCardError::Suit);
        }

        Ok(Self::new(suit, rank.parse()?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();
