use std::ops::{Index, RangeFull};

use super::{Card, PokerEngineError};

/// An ordered set of cards. Insertion order is kept and
/// no card is ever present twice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_equity::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(7),
        }
    }

    /// Build a hand from cards, failing on the first repeated card.
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, PokerEngineError> {
        let mut hand = Self::new();
        for card in cards {
            if !hand.insert(card) {
                return Err(PokerEngineError::DuplicateCard(card));
            }
        }
        Ok(hand)
    }

    /// From a str create a new hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_equity::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AdKd").unwrap();
    /// assert_eq!(2, hand.len());
    /// ```
    ///
    /// Anything that can't be parsed will return an error.
    ///
    /// ```
    /// use poker_equity::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AdKx");
    /// assert!(hand.is_err());
    /// ```
    ///
    /// So will a card that shows up twice.
    ///
    /// ```
    /// use poker_equity::core::Hand;
    ///
    /// assert!(Hand::new_from_str("AdAd").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerEngineError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut hand = Self::new();

        while let Some(vc) = chars.next() {
            let sc = chars.next().ok_or(PokerEngineError::TooFewChars)?;
            let card: Card = [vc, sc].iter().collect::<String>().parse()?;
            if !hand.insert(card) {
                return Err(PokerEngineError::DuplicateCard(card));
            }
        }

        Ok(hand)
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Add a card to the hand. Returns false, and leaves
    /// the hand untouched, when the card was already present.
    pub fn insert(&mut self, c: Card) -> bool {
        if self.contains(&c) {
            return false;
        }
        self.cards.push(c);
        true
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Index<RangeFull> for Hand {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}
