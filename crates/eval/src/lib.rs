// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker five cards hand ranking.
//!
//! A [Hand] is built from exactly five card tokens and hands are totally
//! ordered, so they can be compared directly or sorted:
//!
//! ```
//! # use showdown_eval::*;
//! let quads = "2C 2H 2D 2S 3C".parse::<Hand>().unwrap();
//! let royal = "KC QC JC AC TC".parse::<Hand>().unwrap();
//! assert!(quads < royal);
//! assert_eq!(royal.rank(), HandRank::StraightFlush);
//! assert_eq!(compare_hands(&quads, &royal), -1);
//! ```
//!
//! Batches of hands pairs are compared with [compare_pairs], that returns a
//! result for each pair, or [try_compare_pairs] that fails on the first
//! invalid pair:
//!
//! ```
//! # use showdown_eval::*;
//! let pairs = [
//!     (["2C", "2H", "2D", "2S", "3C"], ["KC", "QC", "JC", "AC", "TC"]),
//!     (["KC", "QC", "JC", "AC", "TC"], ["KC", "QC", "JC", "AC", "TC"]),
//! ];
//! assert_eq!(try_compare_pairs(&pairs), Ok(vec![-1, 0]));
//! ```
//!
//! The **`parallel`** feature enables `par_compare_pairs` to compare a batch
//! using a given number of tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod compare;
pub use compare::{compare_hands, compare_pairs, compare_tokens, try_compare_pairs};

#[cfg(feature = "parallel")]
pub use compare::par_compare_pairs;

mod error;
pub use error::Error;

pub mod hand;
pub use hand::{Hand, HandRank};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};
