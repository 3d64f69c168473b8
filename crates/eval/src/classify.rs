// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use std::cmp::Reverse;

use crate::{
    Card, EvalError, HandCategory, Rank,
    hand::{EvaluatedHand, HAND_SIZE},
};

/// Classifies a hand of exactly 5 distinct cards.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards("2S 2H 2D 5C 9S").unwrap();
/// let hand = classify(&cards).unwrap();
/// assert_eq!(hand.category(), HandCategory::ThreeOfAKind);
/// assert_eq!(hand.kickers(), parse_cards("9S 5C").unwrap());
/// ```
pub fn classify(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let hand: &[Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
    check_distinct(hand)?;
    Ok(classify_five(hand))
}

/// Checks that no card appears twice.
pub(crate) fn check_distinct(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.id();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*card));
        }
        seen |= bit;
    }

    Ok(())
}

/// Classifies 5 cards known to be distinct.
pub(crate) fn classify_five(hand: &[Card; HAND_SIZE]) -> EvaluatedHand {
    let mut cards = *hand;
    cards.sort_by_key(|c| Reverse(c.rank()));

    let mut counts = [0u8; 13];
    for card in &cards {
        counts[card.rank() as usize] += 1;
    }

    let max_count = counts.iter().copied().max().unwrap_or_default();
    let num_pairs = counts.iter().filter(|&&c| c == 2).count();

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());

    // With distinct ranks sorted descending the hand is a straight if the
    // highest and lowest ranks are 4 apart, the wheel is A-5-4-3-2.
    let is_wheel =
        max_count == 1 && cards[0].rank() == Rank::Ace && cards[1].rank() == Rank::Five;
    let is_straight = max_count == 1
        && (cards[0].rank().value() - cards[4].rank().value() == 4 || is_wheel);

    if is_wheel {
        // The ace plays low.
        cards.rotate_left(1);
    } else {
        // Group cards by rank count, sort is stable so equal ranks keep
        // their order.
        cards.sort_by(|a, b| {
            let (ca, cb) = (counts[a.rank() as usize], counts[b.rank() as usize]);
            cb.cmp(&ca).then_with(|| b.rank().cmp(&a.rank()))
        });
    }

    let (category, deciding_len) = if is_straight && is_flush {
        if cards[0].rank() == Rank::Ace {
            (HandCategory::RoyalFlush, 5)
        } else {
            (HandCategory::StraightFlush, 5)
        }
    } else if max_count == 4 {
        (HandCategory::FourOfAKind, 4)
    } else if max_count == 3 && num_pairs == 1 {
        (HandCategory::FullHouse, 5)
    } else if is_flush {
        (HandCategory::Flush, 5)
    } else if is_straight {
        (HandCategory::Straight, 5)
    } else if max_count == 3 {
        (HandCategory::ThreeOfAKind, 3)
    } else if num_pairs == 2 {
        (HandCategory::TwoPair, 4)
    } else if num_pairs == 1 {
        (HandCategory::OnePair, 2)
    } else {
        (HandCategory::HighCard, 1)
    };

    EvaluatedHand::new(category, cards, deciding_len, is_wheel)
}
