// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::Combinations;

#[cfg(feature = "parallel")]
mod parallel;

/// A Poker card.
///
/// A card is an immutable rank and suit pair, two cards are equal only if
/// both rank and suit are equal. Cards order by rank first and suit second.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// This card unique id in the range 0..52.
    pub const fn id(&self) -> u8 {
        self.suit as u8 * 13 + self.rank as u8
    }

    /// Returns the card suit.
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub const fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Errors returned when parsing cards from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Empty input.
    #[error("empty card")]
    Empty,
    /// The rank part is not a valid rank.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit part is not a valid suit.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card like `KD`, `th`, `10S` or `A♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let suit = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::try_from(suit)?;
        let rank = chars.as_str().parse::<Rank>()?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by whitespaces or commas.
///
/// ```
/// # use showdown_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("AS, kd 10h").unwrap();
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Hearts));
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The pip value of this rank, from 2 for a deuce to 14 for an ace.
    pub const fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// The rank name.
    pub const fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Trey",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// The rank plural name.
    pub const fn plural(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuces",
            Rank::Trey => "Treys",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' | 'c' | '♣' | '♧' => Ok(Suit::Clubs),
            'D' | 'd' | '♦' | '♢' => Ok(Suit::Diamonds),
            'H' | 'h' | '♥' | '♡' => Ok(Suit::Hearts),
            'S' | 's' | '♠' | '♤' => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(c)),
        }
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns None if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Returns an iterator over all the K-cards hands in the deck.
    ///
    /// For example to iterate through all 5 cards hands:
    ///
    /// ```no_run
    /// # use showdown_cards::Deck;
    /// assert_eq!(Deck::default().combinations::<5>().count(), 2_598_960);
    /// ```
    pub fn combinations<const K: usize>(&self) -> Combinations<'_, Card, K> {
        Combinations::new(&self.cards)
    }

    /// Samples a random K-cards hand, returns None if the deck has less
    /// than K cards.
    pub fn sample<const K: usize, R: Rng + ?Sized>(&self, rng: &mut R) -> Option<[Card; K]> {
        if K > self.cards.len() {
            return None;
        }

        let indices = rand::seq::index::sample(rng, self.cards.len(), K);
        Some(std::array::from_fn(|i| self.cards[indices.index(i)]))
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_ids() {
        let mut ids = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert!((card.id() as usize) < Deck::SIZE);
            ids.insert(card.id());
        }

        // Check uniqueness.
        assert_eq!(ids.len(), Deck::SIZE);
        assert!(deck.deal().is_none());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
        assert_eq!(format!("{c:?}"), "Card(TH)");
    }

    #[test]
    fn card_from_str() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        let th = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!("10h".parse::<Card>(), Ok(th));
        assert_eq!(" T♥ ".parse::<Card>(), Ok(th));
        assert_eq!("a♠".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));

        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("KX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));
        assert_eq!(
            "1S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "S".parse::<Card>(),
            Err(ParseCardError::InvalidRank(String::new()))
        );
    }

    #[test]
    fn parse_card_list() {
        let cards = parse_cards("2s,2h 2d\t5c ,9S").unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[3], Card::new(Rank::Five, Suit::Clubs));

        assert!(parse_cards("2s 2x").is_err());
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
        assert_eq!(Rank::Six.plural(), "Sixes");
        assert!(Rank::Ace > Rank::King);
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Ace, Suit::Spades);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"rank":"Ace","suit":"Spades"}"#);
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), c);
    }

    #[test]
    fn deck_combinations() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        for hand in deck.combinations::<2>() {
            assert_ne!(hand[0], hand[1]);
            hands.insert(hand);
        }
        assert_eq!(hands.len(), 1_326);

        assert_eq!(deck.combinations::<3>().count(), 22_100);
        assert_eq!(deck.combinations::<5>().len(), 2_598_960);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);
        assert_eq!(deck.combinations::<7>().len(), 99_884_400);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();
        let mut rng = rand::rng();

        for _ in 0..100 {
            let hand: [Card; 7] = deck.sample(&mut rng).unwrap();
            let unique = hand.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
        }

        let mut small = Deck::default();
        while small.count() > 3 {
            small.deal();
        }
        assert!(small.sample::<5, _>(&mut rng).is_none());
    }
}
