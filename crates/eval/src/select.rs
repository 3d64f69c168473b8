// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection and showdown.
use log::trace;

use crate::{
    Card, Combinations, EvalError,
    classify::{check_distinct, classify_five},
    hand::{EvaluatedHand, HAND_SIZE},
};

/// The maximum number of cards to select a hand from, two hole cards and
/// five community cards.
pub const MAX_CARDS: usize = 7;

/// Selects the best 5-cards hand out of 5 to 7 distinct cards.
///
/// All the 5-cards subsets are classified and the strongest one is returned,
/// when more subsets are equally strong the first one is kept.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards("KS KH QD QC 2S 2H 2D").unwrap();
/// let hand = best_hand(&cards).unwrap();
/// assert_eq!(hand.category(), HandCategory::FullHouse);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    if cards.len() < HAND_SIZE {
        return Err(EvalError::InsufficientCards(cards.len()));
    }

    if cards.len() > MAX_CARDS {
        return Err(EvalError::TooManyCards(cards.len()));
    }

    check_distinct(cards)?;

    let best = Combinations::<Card, HAND_SIZE>::new(cards)
        .map(|hand| classify_five(&hand))
        .reduce(|best, hand| if hand > best { hand } else { best })
        .ok_or(EvalError::InsufficientCards(cards.len()))?;

    trace!("Best hand {best} from {} cards", cards.len());
    Ok(best)
}

/// Selects the best hand for a player given the hole cards and the board.
pub fn best_hand_of(hole: &[Card], board: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    best_hand(&cards)
}

/// Returns the positions of the winning hands.
///
/// More than one position is returned when the best hands split the pot,
/// an empty slice has no winners.
///
/// ```
/// # use showdown_eval::*;
/// let board = parse_cards("AS KD 7H 7C 2S").unwrap();
/// let hands = ["QH JH", "7S 3D", "QD JD"]
///     .iter()
///     .map(|hole| best_hand_of(&parse_cards(hole).unwrap(), &board).unwrap())
///     .collect::<Vec<_>>();
/// assert_eq!(winners(&hands), [1]);
/// ```
pub fn winners(hands: &[EvaluatedHand]) -> Vec<usize> {
    let Some(best) = hands.iter().max() else {
        return Vec::new();
    };

    hands
        .iter()
        .enumerate()
        .filter(|&(_, hand)| hand == best)
        .map(|(pos, _)| pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, HandCategory, Rank, classify, parse_cards};
    use ahash::HashSet;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn ranks(cards: &[Card]) -> Vec<Rank> {
        cards.iter().map(|c| c.rank()).collect()
    }

    #[test]
    fn full_house_over_two_pair() {
        let hand = best_hand(&cards("KS KH QD QC 2S 2H 2D")).unwrap();
        assert_eq!(hand.category(), HandCategory::FullHouse);
        assert_eq!(ranks(hand.deciding()), {
            use Rank::*;
            [Deuce, Deuce, Deuce, King, King]
        });
    }

    #[test]
    fn flush_over_straight() {
        let hand = best_hand(&cards("9H TD JH QC KH 2H 5H")).unwrap();
        assert_eq!(hand.category(), HandCategory::Flush);
        assert_eq!(hand.deciding(), cards("KH JH 9H 5H 2H"));
    }

    #[test]
    fn four_of_a_kind_best_kicker() {
        let hand = best_hand(&cards("8S 8H 8D 8C 3S 5S KH")).unwrap();
        assert_eq!(hand.category(), HandCategory::FourOfAKind);
        assert_eq!(hand.kickers(), cards("KH"));
    }

    #[test]
    fn three_pairs_keep_top_two() {
        let hand = best_hand(&cards("AS AH 9D 9C 4S 4H 7D")).unwrap();
        assert_eq!(hand.category(), HandCategory::TwoPair);
        assert_eq!(ranks(hand.deciding()), {
            use Rank::*;
            [Ace, Ace, Nine, Nine]
        });

        // The lower pair gives a better kicker than the 7.
        let hand = best_hand(&cards("AS AH 9D 9C KS KH 7D")).unwrap();
        assert_eq!(ranks(hand.deciding()), {
            use Rank::*;
            [Ace, Ace, King, King]
        });
        assert_eq!(ranks(hand.kickers()), [Rank::Nine]);
    }

    #[test]
    fn highest_straight() {
        let hand = best_hand(&cards("AS 2H 3D 4C 5S 6H 7D")).unwrap();
        assert_eq!(hand.category(), HandCategory::Straight);
        assert_eq!(hand.deciding()[0].rank(), Rank::Seven);

        let hand = best_hand(&cards("AS 2H 3D 4C 5S KH KD")).unwrap();
        assert_eq!(hand.category(), HandCategory::Straight);
        assert_eq!(hand.deciding()[0].rank(), Rank::Five);
    }

    #[test]
    fn five_cards() {
        let five = cards("2S 2H 2D 5C 9S");
        assert_eq!(best_hand(&five), classify(&five));
    }

    #[test]
    fn invalid_input() {
        assert_eq!(
            best_hand(&cards("AS KS")),
            Err(EvalError::InsufficientCards(2))
        );
        assert_eq!(
            best_hand(&cards("AS KS QS JS")),
            Err(EvalError::InsufficientCards(4))
        );
        assert_eq!(
            best_hand(&cards("AS KS QS JS TS 9S 8S 7S")),
            Err(EvalError::TooManyCards(8))
        );
        assert_eq!(
            best_hand_of(&cards("AS KS"), &cards("QS JS TS 9S AS")),
            Err(EvalError::DuplicateCard(cards("AS")[0]))
        );
    }

    #[test]
    fn best_is_maximal() {
        let mut rng = rand::rng();
        let deck = Deck::default();

        for _ in 0..500 {
            let hand: [Card; 7] = deck.sample(&mut rng).unwrap();
            let best = best_hand(&hand).unwrap();

            for five in Combinations::<Card, 5>::new(&hand) {
                let other = classify(&five).unwrap();
                assert!(best >= other);
            }

            // Best hand cards are distinct and come from the input.
            assert!(best.cards().iter().all(|c| hand.contains(c)));
            let unique = best.cards().iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), HAND_SIZE);
        }
    }

    #[test]
    fn showdown_winners() {
        let board = cards("AS KD 7H 7C 2S");
        let eval = |hole: &str| best_hand_of(&cards(hole), &board).unwrap();

        // Equal kickers split the pot.
        let hands = [eval("3H 4D"), eval("QH JD"), eval("QD JH")];
        assert_eq!(winners(&hands), [1, 2]);

        // Kicker decides.
        let hands = [eval("QH 3D"), eval("JH TD")];
        assert_eq!(winners(&hands), [0]);

        assert!(winners(&[]).is_empty());
    }
}
