//! Deck builder integration tests.

use std::collections::HashSet;

use deckrs::options::{
    default_sort, filter, jokers, multiply, shuffle, shuffle_seeded, shuffle_with, sort,
};
use deckrs::{
    Card, DECK_SIZE, DeckBuilder, DeckOption, ParseCardError, RANKS, Rank, RankError, SUITS, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn is_sorted_by_absolute_rank(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|pair| pair[0].absolute_rank() <= pair[1].absolute_rank())
}

#[test]
fn standard_deck_has_every_card_once_in_order() {
    let cards = deckrs::standard();
    assert_eq!(cards.len(), DECK_SIZE);

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(cards.iter().all(|card| !card.is_joker()));

    let mut expected = Vec::new();
    for suit in SUITS {
        for rank in RANKS {
            expected.push(card(suit, rank));
        }
    }
    assert_eq!(cards, expected);
    assert_eq!(DeckBuilder::new().build(), expected);
}

#[test]
fn default_sort_restores_standard_order() {
    let cards = deckrs::new([shuffle_seeded(11).boxed(), default_sort().boxed()]);

    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards[0], card(Suit::Spade, Rank::Ace));
    assert_eq!(cards[51], card(Suit::Heart, Rank::King));
    assert!(is_sorted_by_absolute_rank(&cards));
    assert_eq!(cards, deckrs::standard());
}

#[test]
fn default_sort_moves_jokers_last() {
    let cards = DeckBuilder::new()
        .with_jokers(3)
        .with_shuffle_seed(5)
        .with_default_sort()
        .build();

    assert_eq!(cards.len(), DECK_SIZE + 3);
    assert_eq!(&cards[..DECK_SIZE], deckrs::standard().as_slice());
    assert!(cards[DECK_SIZE..].iter().all(Card::is_joker));
}

#[test]
fn default_sort_is_stable_across_copies() {
    let cards = deckrs::new([multiply(2).boxed(), default_sort().boxed()]);

    assert_eq!(cards.len(), DECK_SIZE * 2);
    assert!(is_sorted_by_absolute_rank(&cards));
    assert_eq!(cards[0], cards[1]);
    assert_eq!(cards[0], card(Suit::Spade, Rank::Ace));
    assert_eq!(cards[103], card(Suit::Heart, Rank::King));
}

#[test]
fn sorts_keep_equal_keys_in_input_order() {
    let cards = deckrs::new([jokers(3).boxed(), default_sort().boxed()]);
    let joker_ranks: Vec<Rank> = cards[DECK_SIZE..].iter().map(|card| card.rank).collect();
    assert_eq!(joker_ranks, [Rank::Ace, Rank::Two, Rank::Three]);

    let by_suit_descending =
        sort(|cards: &[Card], i, j| cards[i].suit.index() > cards[j].suit.index());
    let cards = deckrs::new([by_suit_descending.boxed()]);
    for (chunk, suit) in cards.chunks(RANKS.len()).zip(SUITS.into_iter().rev()) {
        let expected: Vec<Card> = RANKS.into_iter().map(|rank| card(suit, rank)).collect();
        assert_eq!(chunk, expected.as_slice());
    }
}

#[test]
fn sort_uses_positional_predicate() {
    let by_rank_descending = sort(|cards: &[Card], i, j| cards[i].rank > cards[j].rank);
    let cards = deckrs::new([by_rank_descending.boxed()]);

    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(
        &cards[..4],
        &[
            card(Suit::Spade, Rank::King),
            card(Suit::Diamond, Rank::King),
            card(Suit::Club, Rank::King),
            card(Suit::Heart, Rank::King),
        ]
    );
    assert_eq!(cards[51], card(Suit::Heart, Rank::Ace));
}

#[test]
fn less_compares_positions_by_absolute_rank() {
    let cards = [
        card(Suit::Heart, Rank::Two),
        card(Suit::Spade, Rank::King),
        Card::joker(Rank::Ace),
    ];

    assert!(deckrs::less(&cards, 1, 0));
    assert!(!deckrs::less(&cards, 0, 1));
    assert!(deckrs::less(&cards, 0, 2));
    assert!(!deckrs::less(&cards, 2, 2));
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let cards = deckrs::new([shuffle().boxed()]);
    assert_eq!(cards.len(), DECK_SIZE);

    let mut sorted = cards.clone();
    sorted.sort_by_key(Card::absolute_rank);
    assert_eq!(sorted, deckrs::standard());
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let a = deckrs::new([shuffle_seeded(42).boxed()]);
    let b = deckrs::new([shuffle_seeded(42).boxed()]);
    let c = deckrs::new([shuffle_seeded(43).boxed()]);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, deckrs::standard());
}

#[test]
fn injected_rng_matches_seeded_shuffle() {
    let injected = deckrs::new([shuffle_with(ChaCha8Rng::seed_from_u64(8)).boxed()]);
    let seeded = deckrs::new([shuffle_seeded(8).boxed()]);
    assert_eq!(injected, seeded);

    let built = DeckBuilder::new()
        .with_shuffle_rng(ChaCha8Rng::seed_from_u64(8))
        .build();
    assert_eq!(built, seeded);
}

#[test]
fn jokers_are_appended() {
    let cards = deckrs::new([jokers(3).boxed()]);

    assert_eq!(cards.len(), 55);
    assert_eq!(cards.iter().filter(|card| card.suit == Suit::Joker).count(), 3);
    assert_eq!(&cards[..DECK_SIZE], deckrs::standard().as_slice());
    assert!(cards[DECK_SIZE..].iter().all(Card::is_joker));

    assert_eq!(deckrs::new([jokers(0).boxed()]), deckrs::standard());
}

#[test]
fn filter_removes_matching_cards() {
    let cards = DeckBuilder::new()
        .with_filter(|card| card.rank == Rank::Two || card.rank == Rank::Three)
        .build();

    assert_eq!(cards.len(), 44);
    assert!(
        cards
            .iter()
            .all(|card| card.rank != Rank::Two && card.rank != Rank::Three)
    );

    let expected: Vec<Card> = deckrs::standard()
        .into_iter()
        .filter(|card| card.rank > Rank::Three || card.rank == Rank::Ace)
        .collect();
    assert_eq!(cards, expected);
}

#[test]
fn multiply_concatenates_copies() {
    let cards = deckrs::new([multiply(3).boxed()]);
    let base = deckrs::standard();

    assert_eq!(cards.len(), 156);
    for copy in cards.chunks(DECK_SIZE) {
        assert_eq!(copy, base.as_slice());
    }

    assert!(deckrs::new([multiply(0).boxed()]).is_empty());
}

#[test]
fn options_run_in_the_given_order() {
    let jokers_then_multiply = DeckBuilder::new().with_jokers(2).with_multiply(2).build();
    let multiply_then_jokers = DeckBuilder::new().with_multiply(2).with_jokers(2).build();

    assert_eq!(jokers_then_multiply.len(), 108);
    assert_eq!(multiply_then_jokers.len(), 108);
    assert!(jokers_then_multiply[52].is_joker());
    assert!(!multiply_then_jokers[52].is_joker());

    let filtered_jokers = deckrs::new([
        jokers(2).boxed(),
        filter(Card::is_joker).boxed(),
        multiply(2).boxed(),
    ]);
    assert_eq!(filtered_jokers.len(), DECK_SIZE * 2);
}

#[test]
fn custom_options_and_closures() {
    let mut top_five = |cards: Vec<Card>| -> Vec<Card> { cards.into_iter().take(5).collect() };
    assert_eq!(top_five.apply(deckrs::standard()).len(), 5);

    let cards = DeckBuilder::new()
        .with_option(|mut cards: Vec<Card>| -> Vec<Card> {
            cards.reverse();
            cards
        })
        .build();
    assert_eq!(cards[0], card(Suit::Heart, Rank::King));
    assert_eq!(format!("{:?}", DeckBuilder::new().with_jokers(1)), "DeckBuilder { options: 1 }");
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Heart, Rank::Ace).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Spade, Rank::Two).to_string(), "Two of Spades");
    assert_eq!(card(Suit::Diamond, Rank::King).to_string(), "King of Diamonds");
    assert_eq!(card(Suit::Club, Rank::Queen).to_string(), "Queen of Clubs");
    assert_eq!(Card::joker(Rank::Seven).to_string(), "Joker");
}

#[test]
fn card_parse_round_trips_display() {
    for card in deckrs::standard() {
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }

    assert_eq!("Joker".parse::<Card>(), Ok(Card::joker(Rank::Ace)));
    assert_eq!("ten of spade".parse::<Card>(), Ok(card(Suit::Spade, Rank::Ten)));
}

#[test]
fn card_parse_ignores_case() {
    assert_eq!("HEARTS".parse::<Suit>(), Ok(Suit::Heart));
    assert_eq!("clubS".parse::<Suit>(), Ok(Suit::Club));
    assert_eq!("ACE OF SPADES".parse::<Card>(), Ok(card(Suit::Spade, Rank::Ace)));
    assert_eq!("  king  Of diamonds ".parse::<Card>(), Ok(card(Suit::Diamond, Rank::King)));
    assert_eq!("JOKER".parse::<Card>(), Ok(Card::joker(Rank::Ace)));
}

#[test]
fn card_parse_errors() {
    assert_eq!("Ace Hearts".parse::<Card>(), Err(ParseCardError::Format));
    assert_eq!("Ace in Hearts".parse::<Card>(), Err(ParseCardError::Format));
    assert_eq!("Ace of Hearts now".parse::<Card>(), Err(ParseCardError::Format));
    assert_eq!("One of Hearts".parse::<Card>(), Err(ParseCardError::Rank));
    assert_eq!("Ace of Stars".parse::<Card>(), Err(ParseCardError::Suit));
    assert_eq!("Ace of Jokers".parse::<Card>(), Err(ParseCardError::Suit));
    assert_eq!("Rook".parse::<Suit>(), Err(ParseCardError::Suit));
}

#[test]
fn rank_values_and_conversion() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::King.value(), 13);
    assert!(Rank::Ace < Rank::Two && Rank::Queen < Rank::King);

    for (index, rank) in RANKS.into_iter().enumerate() {
        assert_eq!(Rank::try_from(index as u8 + 1), Ok(rank));
    }
    assert_eq!(Rank::try_from(0), Err(RankError::OutOfRange(0)));
    assert_eq!(Rank::try_from(14), Err(RankError::OutOfRange(14)));
}

#[test]
fn suit_index_follows_deck_order() {
    assert_eq!(Suit::Spade.index(), Some(0));
    assert_eq!(Suit::Diamond.index(), Some(1));
    assert_eq!(Suit::Club.index(), Some(2));
    assert_eq!(Suit::Heart.index(), Some(3));
    assert_eq!(Suit::Joker.index(), None);

    assert_eq!(card(Suit::Diamond, Rank::Ace).absolute_rank(), Some(14));
    assert_eq!(Card::joker(Rank::King).absolute_rank(), None);
}
