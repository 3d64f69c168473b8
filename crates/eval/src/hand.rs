// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluated hands and their ordering.
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::{cmp::Ordering, fmt};

use crate::{Card, HandCategory, Rank};

/// The number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A classified 5-cards hand.
///
/// The hand cards are split in the deciding cards that make the category,
/// and the kickers that break ties between hands with equal deciding cards.
/// Deciding cards are stored by significance, larger rank groups first and
/// higher ranks first within groups, so that a full house of deuces over kings
/// has the three deuces before the two kings. In a wheel straight the ace is
/// the last card and plays as a one.
///
/// Hands are created by [classify](crate::classify) and
/// [best_hand](crate::best_hand) and never change. Their ordering is the
/// poker hand strength: category first, then deciding cards ranks, then
/// kickers ranks, suits are never compared.
#[derive(Debug, Clone, Copy)]
pub struct EvaluatedHand {
    category: HandCategory,
    cards: [Card; HAND_SIZE],
    deciding_len: usize,
    key: [u8; HAND_SIZE],
}

impl EvaluatedHand {
    /// Creates a hand from cards sorted by significance.
    pub(crate) fn new(
        category: HandCategory,
        cards: [Card; HAND_SIZE],
        deciding_len: usize,
        ace_low: bool,
    ) -> Self {
        debug_assert!((1..=HAND_SIZE).contains(&deciding_len));

        let key = cards.map(|c| match c.rank() {
            Rank::Ace if ace_low => 1,
            rank => rank.value(),
        });

        Self {
            category,
            cards,
            deciding_len,
            key,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The cards that make the category.
    pub fn deciding(&self) -> &[Card] {
        &self.cards[..self.deciding_len]
    }

    /// The cards not part of the category sorted by descending rank.
    pub fn kickers(&self) -> &[Card] {
        &self.cards[self.deciding_len..]
    }

    /// All the hand cards, deciding cards followed by kickers.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// A human readable description of the hand.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let cards = parse_cards("2S 2H 2D KC KS").unwrap();
    /// let hand = classify(&cards).unwrap();
    /// assert_eq!(hand.describe(), "Full House, Deuces full of Kings");
    /// ```
    pub fn describe(&self) -> String {
        let first = self.cards[0].rank();
        match self.category {
            HandCategory::HighCard => format!("High Card, {}", first.name()),
            HandCategory::OnePair => format!("Pair of {}", first.plural()),
            HandCategory::TwoPair => format!(
                "Two Pair, {} and {}",
                first.plural(),
                self.cards[2].rank().plural()
            ),
            HandCategory::ThreeOfAKind => format!("Three of a Kind, {}", first.plural()),
            HandCategory::Straight => format!("Straight, {} high", first.name()),
            HandCategory::Flush => format!("Flush, {} high", first.name()),
            HandCategory::FullHouse => format!(
                "Full House, {} full of {}",
                first.plural(),
                self.cards[3].rank().plural()
            ),
            HandCategory::FourOfAKind => format!("Four of a Kind, {}", first.plural()),
            HandCategory::StraightFlush => format!("Straight Flush, {} high", first.name()),
            HandCategory::RoyalFlush => HandCategory::RoyalFlush.name().to_string(),
        }
    }
}

/// Compares two hands, a greater hand wins.
///
/// This is the same as `a.cmp(b)`.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.cmp(b)
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        // Hands with the same category have the same number of deciding
        // cards so comparing the keys compares deciding cards then kickers.
        self.category
            .cmp(&other.category)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for EvaluatedHand {}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.describe())?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

impl Serialize for EvaluatedHand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("EvaluatedHand", 4)?;
        s.serialize_field("category", &self.category)?;
        s.serialize_field("description", &self.describe())?;
        s.serialize_field("deciding", self.deciding())?;
        s.serialize_field("kickers", self.kickers())?;
        s.end()
    }
}
