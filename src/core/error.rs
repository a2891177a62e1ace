use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// poker equity engine. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PokerEngineError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Expected exactly 2 hole cards and 0 to 5 community cards, got {hole} and {community}")]
    InvalidCardCount { hole: usize, community: usize },
    #[error("At least 5 cards are needed to rank a hand, got {0}")]
    InsufficientCards(usize),
    #[error("Holdem hands should never have more than 7 cards in them, got {0}")]
    TooManyCards(usize),
    #[error("Need {needed} unseen cards but only {available} remain in the deck")]
    InsufficientDeck { needed: usize, available: usize },
    #[error("The number of trials must be at least 1")]
    InvalidTrialCount,
    #[error("There must be at least one opponent")]
    InvalidOpponentCount,
    #[error("{name} must be a finite, non-negative amount, got {value}")]
    InvalidAmount { name: &'static str, value: f64 },
}
