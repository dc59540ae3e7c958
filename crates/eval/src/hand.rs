// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker hand.
//!
//! A [Hand] stores its cards sorted by rank, all the hand features (pairs,
//! three of a kind, straight, flush, ...) are derived from the sorted cards
//! and from their rank histogram when needed.
//!
//! Hands are totally ordered by comparing their features in order of
//! precedence, the first feature that differs between two hands decides
//! which hand is the strongest:
//!
//! 1. straight flush high card
//! 2. four of a kind rank
//! 3. full house three of a kind rank
//! 4. flush high card
//! 5. straight high card
//! 6. three of a kind rank
//! 7. number of pairs, then the pair ranks from the lowest
//! 8. the card ranks from the highest to the lowest
//!
//! A missing feature is always lower than a present one. An ace is always a
//! high card, so A-2-3-4-5 is not a straight.
use serde::{Serialize, Serializer};
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{Card, Error, Rank};

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandRank {
    /// No other category.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// A five cards hand.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from a slice of exactly 5 cards.
    pub fn new(cards: &[Card]) -> Result<Self, Error> {
        let mut cards =
            <[Card; Hand::SIZE]>::try_from(cards).map_err(|_| Error::InvalidHandSize(cards.len()))?;
        cards.sort();
        Ok(Self { cards })
    }

    /// Creates a hand from exactly 5 card tokens like `["2C", "KD", ...]`.
    ///
    /// The number of tokens is checked before parsing them.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, Error> {
        if tokens.len() != Self::SIZE {
            return Err(Error::InvalidHandSize(tokens.len()));
        }

        let cards = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&cards)
    }

    /// The hand cards sorted by ascending rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card with the highest rank.
    pub fn high_card(&self) -> Card {
        self.cards[Self::SIZE - 1]
    }

    /// The ranks that appear exactly twice, in ascending order.
    ///
    /// Five cards hold at most two pairs, the missing ones are `None`.
    pub fn pair_ranks(&self) -> [Option<Rank>; 2] {
        let mut pairs = ranks_with_count(self.rank_counts(), 2);
        [pairs.next(), pairs.next()]
    }

    /// The rank that appears exactly three times.
    pub fn triple_rank(&self) -> Option<Rank> {
        ranks_with_count(self.rank_counts(), 3).next()
    }

    /// The rank that appears exactly four times.
    pub fn quad_rank(&self) -> Option<Rank> {
        ranks_with_count(self.rank_counts(), 4).next()
    }

    /// Checks if this hand has three of a kind and a pair.
    pub fn is_full_house(&self) -> bool {
        self.full_house_rank().is_some()
    }

    /// The three of a kind rank if this hand is a full house.
    pub fn full_house_rank(&self) -> Option<Rank> {
        self.features().full_house
    }

    /// Checks if the hand ranks are consecutive.
    pub fn is_straight(&self) -> bool {
        self.cards
            .windows(2)
            .all(|w| w[1].rank().index() == w[0].rank().index() + 1)
    }

    /// The highest card if this hand is a straight.
    pub fn straight_high_card(&self) -> Option<Card> {
        self.is_straight().then(|| self.high_card())
    }

    /// Checks if all cards have the same suit.
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    /// The highest card if this hand is a flush.
    pub fn flush_high_card(&self) -> Option<Card> {
        self.is_flush().then(|| self.high_card())
    }

    /// Checks if this hand is both a straight and a flush.
    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    /// The highest card if this hand is a straight flush.
    pub fn straight_flush_high_card(&self) -> Option<Card> {
        self.is_straight_flush().then(|| self.high_card())
    }

    /// Returns this hand category.
    pub fn rank(&self) -> HandRank {
        let f = self.features();
        if f.straight_flush.is_some() {
            HandRank::StraightFlush
        } else if f.quad.is_some() {
            HandRank::FourOfAKind
        } else if f.full_house.is_some() {
            HandRank::FullHouse
        } else if f.flush.is_some() {
            HandRank::Flush
        } else if f.straight.is_some() {
            HandRank::Straight
        } else if f.triple.is_some() {
            HandRank::ThreeOfAKind
        } else {
            match f.pair_count {
                0 => HandRank::HighCard,
                1 => HandRank::OnePair,
                _ => HandRank::TwoPair,
            }
        }
    }

    fn rank_counts(&self) -> [u8; Rank::COUNT] {
        let mut counts = [0; Rank::COUNT];
        for card in &self.cards {
            counts[card.rank().index()] += 1;
        }
        counts
    }

    /// Extracts all the features from a single rank histogram.
    fn features(&self) -> Features {
        let counts = self.rank_counts();
        let high = self.high_card().rank();

        let mut pairs = ranks_with_count(counts, 2);
        let pairs = [pairs.next(), pairs.next()];
        let triple = ranks_with_count(counts, 3).next();
        let straight = self.is_straight().then_some(high);
        let flush = self.is_flush().then_some(high);

        Features {
            straight_flush: straight.and(flush),
            quad: ranks_with_count(counts, 4).next(),
            full_house: triple.filter(|_| pairs[0].is_some()),
            flush,
            straight,
            triple,
            pair_count: pairs.iter().flatten().count(),
            pairs,
        }
    }
}

/// The tie-break features of a hand.
///
/// Fields are declared in order of precedence so that the derived `Ord`
/// compares them as the cascade does, `None` is lower than any rank.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Features {
    straight_flush: Option<Rank>,
    quad: Option<Rank>,
    full_house: Option<Rank>,
    flush: Option<Rank>,
    straight: Option<Rank>,
    triple: Option<Rank>,
    pair_count: usize,
    pairs: [Option<Rank>; 2],
}

fn ranks_with_count(counts: [u8; Rank::COUNT], count: u8) -> impl Iterator<Item = Rank> {
    Rank::ranks().filter(move |r| counts[r.index()] == count)
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.features()
            .cmp(&other.features())
            .then_with(|| self.cards.iter().rev().cmp(other.cards.iter().rev()))
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl TryFrom<&[Card]> for Hand {
    type Error = Error;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses whitespace separated card tokens like `"2C 2H 2D 2S 3C"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        Hand::from_tokens(&tokens)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl Serialize for Hand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cards.iter().map(|c| c.to_string()))
    }
}
