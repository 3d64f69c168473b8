// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::Card;

/// Errors returned for input that violates the evaluator contract.
///
/// These are deterministic given the input and signal a caller bug, for
/// example evaluating before enough cards are dealt or a corrupted deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand to classify doesn't have exactly 5 cards.
    #[error("a hand must have exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Less than 5 cards to select a best hand from.
    #[error("at least 5 cards are needed to make a hand, got {0}")]
    InsufficientCards(usize),
    /// More than 7 cards to select a best hand from.
    #[error("at most 7 cards can be evaluated, got {0}")]
    TooManyCards(usize),
}
