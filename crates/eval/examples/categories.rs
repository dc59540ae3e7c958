// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example categories -- --samples 1000000
// ...
// Total hands      1000000
// Elapsed:         0.412s
// Hands/sec:       2427184
//
// High Card:       501683
// One  Pair:       422621
// ...
// ```
use clap::Parser;
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of random hands to rank.
    #[clap(long, short, default_value_t = 100_000)]
    samples: usize,
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();

    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut strongest: Option<Hand> = None;

    Deck::default().sample(cli.samples, Hand::SIZE, |cards| {
        if let Ok(hand) = Hand::new(cards) {
            counts[hand.rank() as usize] += 1;
            strongest = strongest.max(Some(hand));
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);

    if let Some(hand) = strongest {
        println!("\nStrongest:       {hand} ({})", hand.rank());
    }
}
