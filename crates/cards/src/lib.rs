// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards, either from a rank and a suit or
//! by parsing a two characters token:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "KD".parse::<Card>().unwrap();
//! assert!(kd < ah);
//! assert!("1H".parse::<Card>().is_err());
//! ```
//!
//! and a [Deck] type for sampling random hands of distinct cards.
//!
//! For example to sample 10 random 5-cards hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
