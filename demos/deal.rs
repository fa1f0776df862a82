//! Builds a deck from command line flags and prints it.
//!
//! ```text
//! cargo run --example deal -- --decks 2 --jokers 2 --seed 42
//! ```

use clap::Parser;
use deckrs::{Card, DeckBuilder, Rank};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of standard decks to combine.
    #[clap(long, value_parser = clap::value_parser!(u16).range(1..=100))]
    decks: Option<u16>,
    /// Number of jokers to add.
    #[clap(long, short, default_value_t = 0)]
    jokers: usize,
    /// Shuffle seed, fresh entropy when missing.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Sort the deck after shuffling.
    #[clap(long)]
    sort: bool,
    /// Remove all Twos.
    #[clap(long)]
    no_twos: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut builder = DeckBuilder::new();
    if let Some(decks) = cli.decks {
        builder = builder.with_multiply(usize::from(decks));
    }
    if cli.no_twos {
        builder = builder.with_filter(|card: &Card| card.rank == Rank::Two);
    }
    builder = builder.with_jokers(cli.jokers);
    builder = match cli.seed {
        Some(seed) => builder.with_shuffle_seed(seed),
        None => builder.with_shuffle(),
    };
    if cli.sort {
        builder = builder.with_default_sort();
    }

    let cards = builder.build();
    for (position, card) in cards.iter().enumerate() {
        println!("{:>3}  {card}", position + 1);
    }
    println!("{} cards", cards.len());
}
