// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand construction errors.
use thiserror::Error;

use showdown_cards::ParseCardError;

/// Error returned when a hand cannot be built from its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token is not a valid card.
    #[error(transparent)]
    InvalidCardFormat(#[from] ParseCardError),
    /// The hand doesn't have exactly 5 cards.
    #[error("invalid hand size {0}, a hand must have exactly 5 cards")]
    InvalidHandSize(usize),
}
