use std::collections::HashSet;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use super::{Card, PokerEngineError, Suit, Value};

/// `Deck` is an ordered collection of cards that allows easy
/// indexing and random sampling. The default deck is the
/// normal 52 card deck in sorted order.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create a new empty deck.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Add a card to the deck.
    /// This does not check if the card is already in the deck.
    /// It will just add it to the end of the deck.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Randomly shuffle the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Produce a new deck holding every card of this deck except
    /// the known cards. Order of the remaining cards is kept.
    ///
    /// Fails if the known cards themselves contain a duplicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_equity::core::{Card, Deck};
    ///
    /// let known: Vec<Card> = ["Ah", "Kd"].iter().map(|s| s.parse().unwrap()).collect();
    /// let deck = Deck::default().remove_known(&known).unwrap();
    ///
    /// assert_eq!(50, deck.len());
    /// assert!(!deck.contains(&known[0]));
    /// ```
    pub fn remove_known(&self, known: &[Card]) -> Result<Self, PokerEngineError> {
        let mut seen = HashSet::with_capacity(known.len());
        for card in known {
            if !seen.insert(*card) {
                return Err(PokerEngineError::DuplicateCard(*card));
            }
        }
        let cards = self
            .cards
            .iter()
            .filter(|c| !seen.contains(*c))
            .copied()
            .collect();
        Ok(Self { cards })
    }

    /// Draw `n` distinct cards uniformly at random without
    /// changing the deck. The order of the returned cards is random
    /// as well, so callers can split the sample into board and hands.
    ///
    /// The rng is passed in so that a seeded generator gives
    /// repeatable draws.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use poker_equity::core::Deck;
    ///
    /// let deck = Deck::default();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let cards = deck.sample_without_replacement(7, &mut rng).unwrap();
    ///
    /// assert_eq!(7, cards.len());
    /// assert!(deck.sample_without_replacement(53, &mut rng).is_err());
    /// ```
    pub fn sample_without_replacement<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Card>, PokerEngineError> {
        if n > self.cards.len() {
            return Err(PokerEngineError::InsufficientDeck {
                needed: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.choose_multiple(rng, n).copied().collect())
    }
}

impl Default for Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use poker_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        let cards = Value::values()
            .into_iter()
            .flat_map(|value| Suit::suits().into_iter().map(move |suit| Card { value, suit }))
            .collect();
        Self { cards }
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
