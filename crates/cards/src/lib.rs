// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! a [Deck] type for shuffling, sampling, and iterating cards in the deck, and
//! a [Combinations] iterator that generates all the k-subsets of a slice.
//!
//! For example to sample a random 7-cards hand:
//!
//! ```
//! # use showdown_cards::{Card, Deck};
//! let hand: [Card; 7] = Deck::default().sample(&mut rand::rng()).unwrap();
//! assert_eq!(hand.len(), 7);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling and iteration with
//! a given number of tasks, the following example uses 4 tasks to iterate
//! all 5 cards hands, the closure `task_id` can be used to store per task data
//! to reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use showdown_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each::<5, _>(4, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod combinations;
pub use combinations::{Combinations, nck};

mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
