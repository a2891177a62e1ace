//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error type shared by the whole crate.
mod error;
pub use self::error::PokerEngineError;

/// An ordered, duplicate free collection of cards.
mod hand;
pub use self::hand::Hand;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 to 7 card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandCategory, HandRank, Rankable, evaluate, rank_partial};

/// Ordering between ranked hands.
mod compare;
pub use self::compare::compare;
