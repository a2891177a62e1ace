use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{event, trace_span};

use crate::core::{HandCategory, PokerEngineError, rank_partial};

use super::{
    Action, BoardTexture, DrawPotential, EquitySimulator, GameState, SimulationResult, Street,
    odds::{DEFAULT_IMPLIED_STACK_FRACTION, expected_value, implied_odds, pot_odds},
    recommend, reasoning,
};

/// Default number of Monte Carlo trials per analysis.
pub const DEFAULT_TRIALS: usize = 1000;

/// Everything the engine has to say about one hand.
///
/// Probabilities and equity are percentages, `pot_odds` and
/// `implied_odds` are fractions of the pot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandAnalysis {
    /// Name of the best hand made by the known cards.
    pub hand_type: String,
    pub category: HandCategory,
    pub street: Street,
    pub win_probability: f64,
    pub tie_probability: f64,
    pub loss_probability: f64,
    pub equity: f64,
    pub pot_odds: f64,
    pub implied_odds: f64,
    pub expected_value: f64,
    pub action: Action,
    pub confidence: u8,
    pub reasoning: Vec<String>,
    pub board_texture: BoardTexture,
    pub draw_potential: DrawPotential,
    pub trials: usize,
}

/// # AnalyzerBuilder
///
/// `RngAnalyzerBuilder` configures an `Analyzer`. Every field is
/// optional.
///
/// - `trials` defaults to `DEFAULT_TRIALS`.
/// - `implied_stack_fraction` defaults to `DEFAULT_IMPLIED_STACK_FRACTION`.
/// - `rng` defaults to the thread local rng.
/// - `seed` makes every analysis repeatable by running seeded batches,
///   and takes precedence over `rng`.
///
/// `AnalyzerBuilder` is a type alias for `RngAnalyzerBuilder<ThreadRng>`.
///
/// ## Examples
///
/// ```
/// use poker_equity::holdem::{AnalyzerBuilder, GameState};
///
/// let mut analyzer = AnalyzerBuilder::default().trials(500).seed(42).build().unwrap();
/// let game_state = GameState::from_strs("AhAd", "Ac2d9s", 2).unwrap();
/// let analysis = analyzer.analyze(&game_state).unwrap();
///
/// assert_eq!("Three of a Kind", analysis.hand_type);
/// assert_eq!(500, analysis.trials);
/// ```
///
/// Passing in a seeded rng works too:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use poker_equity::holdem::RngAnalyzerBuilder;
///
/// let analyzer = RngAnalyzerBuilder::default()
///     .rng(StdRng::seed_from_u64(420))
///     .build()
///     .unwrap();
/// ```
pub struct RngAnalyzerBuilder<R: Rng> {
    trials: Option<usize>,
    implied_stack_fraction: Option<f64>,
    rng: Option<R>,
    seed: Option<u64>,
}

impl<R: Rng> RngAnalyzerBuilder<R> {
    /// Number of Monte Carlo trials per analysis.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Share of the stack counted as future winnings for implied odds.
    pub fn implied_stack_fraction(mut self, fraction: f64) -> Self {
        self.implied_stack_fraction = Some(fraction);
        self
    }

    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fill in defaults and create the analyzer.
    ///
    /// @returns `InvalidTrialCount` if zero trials were asked for.
    pub fn build(self) -> Result<Analyzer<R>, PokerEngineError> {
        let trials = self.trials.unwrap_or(DEFAULT_TRIALS);
        if trials == 0 {
            return Err(PokerEngineError::InvalidTrialCount);
        }
        Ok(Analyzer {
            trials,
            implied_stack_fraction: self
                .implied_stack_fraction
                .unwrap_or(DEFAULT_IMPLIED_STACK_FRACTION),
            rng: self.rng,
            seed: self.seed,
        })
    }
}

impl<R: Rng> Default for RngAnalyzerBuilder<R> {
    fn default() -> Self {
        Self {
            trials: None,
            implied_stack_fraction: None,
            rng: None,
            seed: None,
        }
    }
}

/// The rng is ThreadRng.
pub type AnalyzerBuilder = RngAnalyzerBuilder<ThreadRng>;

/// Turns a `GameState` into a `HandAnalysis`.
#[derive(Debug)]
pub struct Analyzer<R: Rng> {
    trials: usize,
    implied_stack_fraction: f64,
    rng: Option<R>,
    seed: Option<u64>,
}

impl<R: Rng> Analyzer<R> {
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Validate the game state, simulate, and build the analysis.
    ///
    /// Every check runs before the first trial, so an error never comes
    /// with partial results.
    pub fn analyze(&mut self, game_state: &GameState) -> Result<HandAnalysis, PokerEngineError> {
        let span = trace_span!(
            "analyze",
            opponents = game_state.num_opponents,
            trials = self.trials
        );
        let _enter = span.enter();

        game_state.validate()?;
        let simulator = EquitySimulator::new(
            &game_state.hole_cards,
            &game_state.community_cards,
            game_state.num_opponents,
        )?;
        let current = rank_partial(&game_state.known_cards())?;

        let result = self.run(&simulator)?;
        let analysis = self.build_analysis(game_state, current.category, result);

        event!(
            tracing::Level::DEBUG,
            hand_type = analysis.hand_type.as_str(),
            equity = analysis.equity,
            action = %analysis.action,
            confidence = analysis.confidence,
            "Analysis finished"
        );
        Ok(analysis)
    }

    fn run(&mut self, simulator: &EquitySimulator) -> Result<SimulationResult, PokerEngineError> {
        match (self.seed, self.rng.as_mut()) {
            (Some(seed), _) => simulator.simulate_seeded(self.trials, seed),
            (None, Some(rng)) => simulator.simulate(self.trials, rng),
            (None, None) => simulator.simulate(self.trials, &mut rand::rng()),
        }
    }

    fn build_analysis(
        &self,
        game_state: &GameState,
        category: HandCategory,
        result: SimulationResult,
    ) -> HandAnalysis {
        let win = result.win_percentage / 100.0;
        let tie = result.tie_percentage / 100.0;

        let pot_odds = pot_odds(game_state.pot_size, game_state.bet_to_call);
        let implied_odds = implied_odds(
            game_state.pot_size,
            game_state.bet_to_call,
            game_state.stack_size,
            self.implied_stack_fraction,
        );
        let expected_value =
            expected_value(win, tie, game_state.pot_size, game_state.bet_to_call);
        let recommendation = recommend(result.equity, pot_odds, expected_value);

        HandAnalysis {
            hand_type: category.name().to_string(),
            category,
            street: game_state.street(),
            win_probability: result.win_percentage,
            tie_probability: result.tie_percentage,
            loss_probability: result.loss_percentage,
            equity: result.equity,
            pot_odds,
            implied_odds,
            expected_value,
            action: recommendation.action,
            confidence: recommendation.confidence,
            reasoning: reasoning(result.equity, pot_odds, expected_value),
            board_texture: BoardTexture::from_board(&game_state.community_cards),
            draw_potential: DrawPotential::from_board(&game_state.community_cards),
            trials: result.total,
        }
    }
}

/// Analyze with the default configuration and the thread local rng.
pub fn analyze(game_state: &GameState) -> Result<HandAnalysis, PokerEngineError> {
    AnalyzerBuilder::default().build()?.analyze(game_state)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn seeded(trials: usize) -> Analyzer<ThreadRng> {
        AnalyzerBuilder::default()
            .trials(trials)
            .seed(1234)
            .build()
            .unwrap()
    }

    #[test_log::test]
    fn test_set_of_aces() {
        let gs = GameState::from_strs("AhAd", "Ac2d9s", 2)
            .unwrap()
            .pot_size(100.0)
            .bet_to_call(20.0)
            .stack_size(500.0);
        let a = seeded(5_000).analyze(&gs).unwrap();

        assert_eq!("Three of a Kind", a.hand_type);
        assert_eq!(HandCategory::ThreeOfAKind, a.category);
        assert_eq!(Street::Flop, a.street);
        assert!(a.win_probability > 90.0, "win was {}", a.win_probability);
        assert!(a.expected_value > 0.0);
        assert_eq!(Action::AllIn, a.action);
        assert_eq!(95, a.confidence);
        assert_eq!(5_000, a.trials);
        assert_eq!(4, a.reasoning.len());
        assert_abs_diff_eq!(
            100.0,
            a.win_probability + a.tie_probability + a.loss_probability,
            epsilon = 1e-6
        );
    }

    #[test_log::test]
    fn test_preflop_hand_type() {
        let gs = GameState::from_strs("2h3c", "", 1).unwrap();
        let a = seeded(10_000).analyze(&gs).unwrap();

        assert_eq!("High Card", a.hand_type);
        assert_eq!(Street::Preflop, a.street);
        assert_eq!(BoardTexture::Preflop, a.board_texture);
        assert!(a.equity > 28.0 && a.equity < 45.0, "equity was {}", a.equity);

        let pair = GameState::from_strs("7c7d", "", 1).unwrap();
        assert_eq!("Pair", seeded(100).analyze(&pair).unwrap().hand_type);
    }

    #[test_log::test]
    fn test_flush_draw() {
        let gs = GameState::from_strs("AsKs", "QsJs2c", 1).unwrap();
        let a = seeded(10_000).analyze(&gs).unwrap();

        assert_eq!(HandCategory::HighCard, a.category);
        assert!(a.win_probability > 50.0, "win was {}", a.win_probability);
        assert!(a.draw_potential.straight_draw);
    }

    #[test_log::test]
    fn test_empty_pot() {
        // An empty pot with nothing to call has zero expected value.
        let gs = GameState::from_strs("7h2c", "KsQd9c", 3).unwrap();
        let a = seeded(1_000).analyze(&gs).unwrap();
        assert_eq!(0.0, a.expected_value);
        assert_eq!(0.0, a.pot_odds);
        assert!(matches!(a.action, Action::Fold | Action::Call));
    }

    #[test_log::test]
    fn test_seeded_analysis_repeats() {
        let gs = GameState::from_strs("JhTh", "9h8c2d", 3)
            .unwrap()
            .pot_size(60.0)
            .bet_to_call(30.0);
        let one = seeded(2_000).analyze(&gs).unwrap();
        let two = seeded(2_000).analyze(&gs).unwrap();
        assert_eq!(one, two);
    }

    #[test_log::test]
    fn test_rng_analyzer() {
        let gs = GameState::from_strs("QcQd", "", 2).unwrap();
        let mut analyzer = RngAnalyzerBuilder::default()
            .trials(300)
            .rng(StdRng::seed_from_u64(5))
            .build()
            .unwrap();
        let a = analyzer.analyze(&gs).unwrap();
        assert_eq!(300, a.trials);
        assert_eq!("Pair", a.hand_type);
    }

    #[test]
    fn test_fails_fast() {
        let mut analyzer = seeded(100);

        let gs = GameState::from_strs("AhAdAc", "", 1).unwrap();
        assert!(matches!(
            analyzer.analyze(&gs),
            Err(PokerEngineError::InvalidCardCount { .. })
        ));

        let gs = GameState::from_strs("AhAd", "Ad2c3c", 1).unwrap();
        assert!(matches!(
            analyzer.analyze(&gs),
            Err(PokerEngineError::DuplicateCard(_))
        ));

        let gs = GameState::from_strs("AhAd", "Ac2d9s3h4h", 40).unwrap();
        assert!(matches!(
            analyzer.analyze(&gs),
            Err(PokerEngineError::InsufficientDeck { .. })
        ));
    }

    #[test]
    fn test_zero_trials() {
        assert_eq!(
            Err(PokerEngineError::InvalidTrialCount),
            AnalyzerBuilder::default().trials(0).build().map(|a| a.trials())
        );
    }

    #[test]
    fn test_default_analyze() {
        let gs = GameState::from_strs("AhKh", "", 1).unwrap();
        let a = analyze(&gs).unwrap();
        assert_eq!(DEFAULT_TRIALS, a.trials);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_for_transport() {
        let gs = GameState::from_strs("AhKh", "2c3c4c", 1).unwrap();
        let a = seeded(100).analyze(&gs).unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!("High Card", json["hand_type"]);
        assert!(json["action"].is_string());

        let gs_json = serde_json::to_value(&gs).unwrap();
        assert_eq!("Ah", gs_json["hole_cards"][0]);
    }
}
