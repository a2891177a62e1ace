/// Module for `GameState`, the input to every analysis.
mod game_state;
/// Export `GameState`
pub use self::game_state::{GameState, Position, Street};

/// Pot odds, implied odds and expected value.
mod odds;
pub use self::odds::{DEFAULT_IMPLIED_STACK_FRACTION, expected_value, implied_odds, pot_odds};

/// Module describing the community cards.
mod board;
pub use self::board::{BoardTexture, DrawPotential};

/// Module for `EquitySimulator` that deals random completions of the
/// hand and counts how often the hero comes out ahead.
mod monte_carlo;
/// Export `EquitySimulator`
pub use self::monte_carlo::{
    BATCH_SIZE, EquitySimulator, Outcome, SimulationResult, best_opponent, simulate_equity,
};

/// Module turning equity and pot math into an action.
mod recommend;
pub use self::recommend::{Action, Recommendation, StrengthBand, reasoning, recommend};

/// Module tying everything together into a `HandAnalysis`.
mod analysis;
/// Export `Analyzer` and its builders
pub use self::analysis::{
    AnalyzerBuilder, Analyzer, DEFAULT_TRIALS, HandAnalysis, RngAnalyzerBuilder, analyze,
};
