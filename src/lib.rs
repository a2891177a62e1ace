//! Poker Equity is a library for analyzing Texas Hold'em hands.
//!
//! Given two hole cards, the community cards and a number of opponents
//! it estimates win, tie and loss rates with a Monte Carlo simulation,
//! then combines that with the pot math to recommend an action.
//!
//! ```
//! use poker_equity::holdem::{Action, AnalyzerBuilder, GameState};
//!
//! let game_state = GameState::from_strs("AhAd", "Ac2d9s", 2)
//!     .unwrap()
//!     .pot_size(100.0)
//!     .bet_to_call(20.0);
//!
//! let mut analyzer = AnalyzerBuilder::default().trials(2_000).seed(7).build().unwrap();
//! let analysis = analyzer.analyze(&game_state).unwrap();
//!
//! assert_eq!("Three of a Kind", analysis.hand_type);
//! assert_eq!(Action::AllIn, analysis.action);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Holdem specific simulation and analysis.
pub mod holdem;
