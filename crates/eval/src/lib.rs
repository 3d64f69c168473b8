// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand classifier and comparator for 5, 6 and 7 cards hands. A hand of
//! exactly 5 cards is classified with [classify], the best 5-cards hand out of
//! the hole and community cards is selected with [best_hand] by classifying
//! all the 5-cards subsets, and hands are compared with [compare] or the
//! standard ordering operators:
//!
//! ```
//! # use showdown_eval::*;
//! let kings = classify(&parse_cards("KS KH AD 9C 4S").unwrap()).unwrap();
//! let kings_low = classify(&parse_cards("KD KC AH 9S 3H").unwrap()).unwrap();
//! assert_eq!(kings.category(), HandCategory::OnePair);
//! assert!(kings > kings_low);
//!
//! let board = parse_cards("QD QC 2S 2H 2D").unwrap();
//! let hand = best_hand_of(&parse_cards("KS KH").unwrap(), &board).unwrap();
//! assert_eq!(hand.category(), HandCategory::FullHouse);
//! assert_eq!(hand.describe(), "Full House, Deuces full of Kings");
//! ```
//!
//! All functions are pure and can be called concurrently, the **`parallel`**
//! feature enables the cards crate parallel iteration.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
pub use category::HandCategory;

mod classify;
pub use classify::classify;

mod error;
pub use error::EvalError;

mod hand;
pub use hand::{EvaluatedHand, HAND_SIZE, compare};

mod select;
pub use select::{MAX_CARDS, best_hand, best_hand_of, winners};

// Reexport cards types.
pub use showdown_cards::{Card, Combinations, Deck, ParseCardError, Rank, Suit, parse_cards};
