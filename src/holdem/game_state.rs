use std::collections::HashSet;

use crate::core::{Card, Hand, PokerEngineError};

/// How far along the board is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Street for a number of community cards. Partial flops
    /// (one or two cards) are still counted as the flop.
    pub fn from_community_count(count: usize) -> Self {
        match count {
            0 => Street::Preflop,
            1..=3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}

/// Seat of the hero relative to the button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Early,
    Middle,
    Late,
    Button,
    SmallBlind,
    BigBlind,
}

/// Everything known about the hand being analyzed.
///
/// Construct with `GameState::new` or `GameState::from_strs` then
/// chain the setters for the money amounts.
///
/// ```
/// use poker_equity::holdem::GameState;
///
/// let game_state = GameState::from_strs("AhAd", "Ac2d9s", 2)
///     .unwrap()
///     .pot_size(100.0)
///     .bet_to_call(25.0)
///     .stack_size(1000.0);
///
/// assert!(game_state.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub hole_cards: Vec<Card>,
    pub community_cards: Vec<Card>,
    pub num_opponents: usize,
    pub pot_size: f64,
    pub bet_to_call: f64,
    pub stack_size: f64,
    pub position: Option<Position>,
}

impl GameState {
    pub fn new(hole_cards: Vec<Card>, community_cards: Vec<Card>, num_opponents: usize) -> Self {
        Self {
            hole_cards,
            community_cards,
            num_opponents,
            pot_size: 0.0,
            bet_to_call: 0.0,
            stack_size: 0.0,
            position: None,
        }
    }

    /// Parse the hole and community cards from their string form, `"AhAd"`.
    pub fn from_strs(
        hole_cards: &str,
        community_cards: &str,
        num_opponents: usize,
    ) -> Result<Self, PokerEngineError> {
        let hole = Hand::new_from_str(hole_cards)?;
        let community = Hand::new_from_str(community_cards)?;
        Ok(Self::new(hole.into(), community.into(), num_opponents))
    }

    pub fn pot_size(mut self, pot_size: f64) -> Self {
        self.pot_size = pot_size;
        self
    }

    pub fn bet_to_call(mut self, bet_to_call: f64) -> Self {
        self.bet_to_call = bet_to_call;
        self
    }

    pub fn stack_size(mut self, stack_size: f64) -> Self {
        self.stack_size = stack_size;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Check that the state describes a real hand:
    /// two hole cards, at most five community cards, no card seen
    /// twice, at least one opponent and sane money amounts.
    pub fn validate(&self) -> Result<(), PokerEngineError> {
        if self.hole_cards.len() != 2 || self.community_cards.len() > 5 {
            return Err(PokerEngineError::InvalidCardCount {
                hole: self.hole_cards.len(),
                community: self.community_cards.len(),
            });
        }

        let mut seen = HashSet::with_capacity(7);
        for card in self.known_cards() {
            if !seen.insert(card) {
                return Err(PokerEngineError::DuplicateCard(card));
            }
        }

        if self.num_opponents == 0 {
            return Err(PokerEngineError::InvalidOpponentCount);
        }

        for (name, value) in [
            ("pot_size", self.pot_size),
            ("bet_to_call", self.bet_to_call),
            ("stack_size", self.stack_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PokerEngineError::InvalidAmount { name, value });
            }
        }
        Ok(())
    }

    /// Hole cards followed by the community cards.
    pub fn known_cards(&self) -> Vec<Card> {
        self.hole_cards
            .iter()
            .chain(self.community_cards.iter())
            .copied()
            .collect()
    }

    pub fn street(&self) -> Street {
        Street::from_community_count(self.community_cards.len())
    }

    /// Community cards still to be dealt.
    pub fn cards_to_come(&self) -> usize {
        5usize.saturating_sub(self.community_cards.len())
    }
}
