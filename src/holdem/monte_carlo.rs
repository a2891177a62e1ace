use std::cmp::Ordering;

use rand::{Rng, SeedableRng, rngs::StdRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{event, trace_span};

use crate::core::{Card, Deck, HandRank, PokerEngineError, Rankable, compare};

/// Number of trials each seeded batch runs.
pub const BATCH_SIZE: usize = 1000;

/// How a single trial ended for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Aggregate of many trials.
///
/// Percentages are in `0.0..=100.0` and `equity` counts a tie as half a win.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
    pub total: usize,
    pub win_percentage: f64,
    pub tie_percentage: f64,
    pub loss_percentage: f64,
    pub equity: f64,
}

impl SimulationResult {
    /// Build a result and its percentages from raw counts.
    ///
    /// ```
    /// use poker_equity::holdem::SimulationResult;
    ///
    /// let r = SimulationResult::from_counts(50, 10, 40);
    /// assert_eq!(100, r.total);
    /// assert_eq!(55.0, r.equity);
    /// ```
    pub fn from_counts(wins: usize, ties: usize, losses: usize) -> Self {
        let total = wins + ties + losses;
        let pct = |n: usize| {
            if total == 0 {
                0.0
            } else {
                n as f64 * 100.0 / total as f64
            }
        };
        let win_percentage = pct(wins);
        let tie_percentage = pct(ties);
        Self {
            wins,
            ties,
            losses,
            total,
            win_percentage,
            tie_percentage,
            loss_percentage: pct(losses),
            equity: win_percentage + tie_percentage / 2.0,
        }
    }

    /// Combine the counts of two results.
    pub fn merge(self, other: Self) -> Self {
        Self::from_counts(
            self.wins + other.wins,
            self.ties + other.ties,
            self.losses + other.losses,
        )
    }
}

/// Fold the opponents' hands down to the single best one.
///
/// The hero is then compared only against this hand. This throws away
/// how many opponents tied for the best hand, so a three way split pot
/// is scored the same as a two way split. Swap this out for full
/// showdown settlement if split pot sizes matter.
pub fn best_opponent(ranks: Vec<HandRank>) -> Option<HandRank> {
    ranks
        .into_iter()
        .reduce(|best, rank| match compare(&rank, &best) {
            Ordering::Greater => rank,
            _ => best,
        })
}

/// Monte Carlo equity of two hole cards against random opponent hands.
///
/// All validation happens in `new`; the unseen card pool is built once
/// and never changes, so trials can run on any number of threads.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use poker_equity::core::Hand;
/// use poker_equity::holdem::EquitySimulator;
///
/// let hole = Hand::new_from_str("AhAd").unwrap();
/// let board = Hand::new_from_str("Ac2d9s").unwrap();
/// let sim = EquitySimulator::new(&hole[..], &board[..], 2).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = sim.simulate(500, &mut rng).unwrap();
/// assert_eq!(500, result.wins + result.ties + result.losses);
/// ```
#[derive(Debug, Clone)]
pub struct EquitySimulator {
    hole_cards: Vec<Card>,
    community_cards: Vec<Card>,
    num_opponents: usize,
    /// Every card not in the hole or on the board.
    pool: Deck,
    /// Board cards plus opponent hole cards dealt each trial.
    cards_needed: usize,
}

impl EquitySimulator {
    pub fn new(
        hole_cards: &[Card],
        community_cards: &[Card],
        num_opponents: usize,
    ) -> Result<Self, PokerEngineError> {
        if hole_cards.len() != 2 || community_cards.len() > 5 {
            return Err(PokerEngineError::InvalidCardCount {
                hole: hole_cards.len(),
                community: community_cards.len(),
            });
        }
        if num_opponents == 0 {
            return Err(PokerEngineError::InvalidOpponentCount);
        }

        let known: Vec<Card> = hole_cards.iter().chain(community_cards).copied().collect();
        let pool = Deck::default().remove_known(&known)?;

        let cards_needed = (5 - community_cards.len()) + 2 * num_opponents;
        if cards_needed > pool.len() {
            return Err(PokerEngineError::InsufficientDeck {
                needed: cards_needed,
                available: pool.len(),
            });
        }

        Ok(Self {
            hole_cards: hole_cards.to_vec(),
            community_cards: community_cards.to_vec(),
            num_opponents,
            pool,
            cards_needed,
        })
    }

    pub fn pool(&self) -> &Deck {
        &self.pool
    }

    pub fn num_opponents(&self) -> usize {
        self.num_opponents
    }

    /// Deal out one random completion and score it.
    ///
    /// One draw from the pool supplies the rest of the board followed
    /// by every opponent's two cards, so no card is used twice.
    pub fn run_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Outcome, PokerEngineError> {
        let drawn = self.pool.sample_without_replacement(self.cards_needed, rng)?;
        let (runout, opponent_cards) = drawn.split_at(5 - self.community_cards.len());

        let mut board = Vec::with_capacity(5);
        board.extend_from_slice(&self.community_cards);
        board.extend_from_slice(runout);

        let hero = seven_cards(&self.hole_cards, &board).rank()?;
        let opponents = opponent_cards
            .chunks_exact(2)
            .map(|hole| seven_cards(hole, &board).rank())
            .collect::<Result<Vec<HandRank>, PokerEngineError>>()?;
        let villain = best_opponent(opponents).ok_or(PokerEngineError::InvalidOpponentCount)?;

        Ok(match compare(&hero, &villain) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Tie,
            Ordering::Less => Outcome::Loss,
        })
    }

    /// Run `trials` trials one after another using the given rng.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        trials: usize,
        rng: &mut R,
    ) -> Result<SimulationResult, PokerEngineError> {
        if trials == 0 {
            return Err(PokerEngineError::InvalidTrialCount);
        }
        let span = trace_span!("simulate", trials, opponents = self.num_opponents);
        let _enter = span.enter();

        let (mut wins, mut ties, mut losses) = (0, 0, 0);
        for _ in 0..trials {
            match self.run_trial(rng)? {
                Outcome::Win => wins += 1,
                Outcome::Tie => ties += 1,
                Outcome::Loss => losses += 1,
            }
        }
        let result = SimulationResult::from_counts(wins, ties, losses);

        event!(
            tracing::Level::DEBUG,
            wins = result.wins,
            ties = result.ties,
            losses = result.losses,
            equity = result.equity,
            "Simulation finished"
        );
        Ok(result)
    }

    /// Run `trials` trials split into batches of `BATCH_SIZE`.
    ///
    /// Batch `i` uses its own `StdRng` seeded with `seed + i`, so the
    /// result only depends on the seed and the trial count. With the
    /// `parallel` feature batches run on the rayon thread pool and the
    /// counts are merged once every batch is done.
    pub fn simulate_seeded(
        &self,
        trials: usize,
        seed: u64,
    ) -> Result<SimulationResult, PokerEngineError> {
        if trials == 0 {
            return Err(PokerEngineError::InvalidTrialCount);
        }
        let span = trace_span!("simulate_seeded", trials, seed);
        let _enter = span.enter();

        let num_batches = trials.div_ceil(BATCH_SIZE);
        let run_batch = |batch_idx: usize| -> Result<SimulationResult, PokerEngineError> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(batch_idx as u64));
            let batch_trials = BATCH_SIZE.min(trials - batch_idx * BATCH_SIZE);
            let result = self.simulate(batch_trials, &mut rng)?;
            event!(tracing::Level::TRACE, batch_idx, batch_trials, "Batch finished");
            Ok(result)
        };

        #[cfg(feature = "parallel")]
        let batches: Result<Vec<SimulationResult>, PokerEngineError> =
            (0..num_batches).into_par_iter().map(run_batch).collect();
        #[cfg(not(feature = "parallel"))]
        let batches: Result<Vec<SimulationResult>, PokerEngineError> =
            (0..num_batches).map(run_batch).collect();

        let result = batches?
            .into_iter()
            .fold(SimulationResult::default(), SimulationResult::merge);

        event!(
            tracing::Level::DEBUG,
            batches = num_batches,
            equity = result.equity,
            "Seeded simulation finished"
        );
        Ok(result)
    }
}

fn seven_cards(hole: &[Card], board: &[Card]) -> Vec<Card> {
    let mut cards = Vec::with_capacity(7);
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    cards
}

/// Estimate win, tie and loss rates for the hero's hole cards.
///
/// Fails before running a single trial if the cards or counts are invalid
/// or if the deck can't cover the board plus every opponent's hand.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use poker_equity::core::Hand;
/// use poker_equity::holdem::simulate_equity;
///
/// let hole = Hand::new_from_str("2h3c").unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = simulate_equity(&hole[..], &[], 1, 1000, &mut rng).unwrap();
///
/// assert_eq!(1000, result.total);
/// ```
pub fn simulate_equity<R: Rng + ?Sized>(
    hole_cards: &[Card],
    community_cards: &[Card],
    num_opponents: usize,
    trials: usize,
    rng: &mut R,
) -> Result<SimulationResult, PokerEngineError> {
    if trials == 0 {
        return Err(PokerEngineError::InvalidTrialCount);
    }
    EquitySimulator::new(hole_cards, community_cards, num_opponents)?.simulate(trials, rng)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::{Hand, HandCategory};

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap().into()
    }

    #[test]
    fn test_from_counts() {
        let r = SimulationResult::from_counts(3, 1, 4);
        assert_eq!(8, r.total);
        assert_abs_diff_eq!(37.5, r.win_percentage);
        assert_abs_diff_eq!(12.5, r.tie_percentage);
        assert_abs_diff_eq!(50.0, r.loss_percentage);
        assert_abs_diff_eq!(43.75, r.equity);

        let empty = SimulationResult::from_counts(0, 0, 0);
        assert_eq!(0.0, empty.equity);
    }

    #[test]
    fn test_merge() {
        let a = SimulationResult::from_counts(3, 1, 4);
        let b = SimulationResult::from_counts(1, 0, 1);
        assert_eq!(SimulationResult::from_counts(4, 1, 5), a.merge(b));
        assert_eq!(a, SimulationResult::default().merge(a));
    }

    #[test]
    fn test_best_opponent() {
        let ranks: Vec<HandRank> = ["2c3s4h5s6d", "AdAcAsAhTs", "Ad8h9cTc5c"]
            .iter()
            .map(|s| cards(s).rank().unwrap())
            .collect();
        let best = best_opponent(ranks).unwrap();
        assert_eq!(HandCategory::FourOfAKind, best.category);
        assert!(best_opponent(vec![]).is_none());
    }

    #[test_log::test]
    fn test_counts_add_up() {
        let sim = EquitySimulator::new(&cards("AhAd"), &cards("Ac2d9s"), 3).unwrap();
        let mut rng = StdRng::seed_from_u64(420);
        let r = sim.simulate(2_000, &mut rng).unwrap();

        assert_eq!(2_000, r.total);
        assert_eq!(r.total, r.wins + r.ties + r.losses);
        // Percentages come from the final counts.
        assert_eq!(SimulationResult::from_counts(r.wins, r.ties, r.losses), r);
        assert_abs_diff_eq!(
            100.0,
            r.win_percentage + r.tie_percentage + r.loss_percentage,
            epsilon = 1e-6
        );
    }

    #[test_log::test]
    fn test_seeded_is_repeatable() {
        let sim = EquitySimulator::new(&cards("KsQs"), &cards("Js2c"), 2).unwrap();

        let one = sim.simulate(500, &mut StdRng::seed_from_u64(9)).unwrap();
        let two = sim.simulate(500, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(one, two);

        let one = sim.simulate_seeded(2_500, 77).unwrap();
        let two = sim.simulate_seeded(2_500, 77).unwrap();
        assert_eq!(one, two);
        assert_eq!(2_500, one.total);
    }

    #[test_log::test]
    fn test_seeded_matches_batches() {
        // The seeded run is the merge of one sequential run per batch.
        let sim = EquitySimulator::new(&cards("9c9d"), &[], 1).unwrap();
        let seeded = sim.simulate_seeded(1_500, 5).unwrap();

        let first = sim.simulate(1_000, &mut StdRng::seed_from_u64(5)).unwrap();
        let second = sim.simulate(500, &mut StdRng::seed_from_u64(6)).unwrap();
        assert_eq!(first.merge(second), seeded);
    }

    #[test_log::test]
    fn test_set_on_dry_flop() {
        let sim = EquitySimulator::new(&cards("AhAd"), &cards("Ac2d9s"), 2).unwrap();
        let r = sim.simulate_seeded(5_000, 1).unwrap();
        assert!(r.win_percentage > 90.0, "win% was {}", r.win_percentage);
    }

    #[test_log::test]
    fn test_weak_offsuit_heads_up() {
        let sim = EquitySimulator::new(&cards("2h3c"), &[], 1).unwrap();
        let r = sim.simulate_seeded(10_000, 2).unwrap();
        assert!(r.equity > 28.0 && r.equity < 45.0, "equity was {}", r.equity);
    }

    #[test_log::test]
    fn test_flush_draw_heads_up() {
        let sim = EquitySimulator::new(&cards("AsKs"), &cards("QsJs2c"), 1).unwrap();
        let r = sim.simulate_seeded(10_000, 3).unwrap();
        assert!(r.win_percentage > 50.0, "win% was {}", r.win_percentage);
    }

    #[test_log::test]
    fn test_nuts_on_river_never_loses() {
        // Royal flush on the river can only tie with a board royal.
        let sim = EquitySimulator::new(&cards("AsKs"), &cards("QsJsTs2c3d"), 4).unwrap();
        let r = sim.simulate(300, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(300, r.wins);
    }

    #[test_log::test]
    fn test_board_royal_always_ties() {
        let sim = EquitySimulator::new(&cards("2c3d"), &cards("AsKsQsJsTs"), 3).unwrap();
        let r = sim.simulate(200, &mut StdRng::seed_from_u64(12)).unwrap();
        assert_eq!(200, r.ties);
        assert_abs_diff_eq!(50.0, r.equity);
    }

    #[test]
    fn test_pool_excludes_known_cards() {
        let hole = cards("AhAd");
        let board = cards("Ac2d9s");
        let sim = EquitySimulator::new(&hole, &board, 3).unwrap();

        assert_eq!(3, sim.num_opponents());
        assert_eq!(47, sim.pool().len());
        for c in hole.iter().chain(board.iter()) {
            assert!(!sim.pool().contains(c));
        }
    }

    #[test]
    fn test_insufficient_deck() {
        // 45 unseen cards can't cover 40 two card hands.
        let err = EquitySimulator::new(&cards("AhAd"), &cards("Ac2d9s3h4h"), 40).unwrap_err();
        assert_eq!(
            PokerEngineError::InsufficientDeck {
                needed: 80,
                available: 45
            },
            err
        );

        // 22 opponents need exactly 44 cards plus the 5 board cards.
        assert!(EquitySimulator::new(&cards("AhAd"), &[], 22).is_ok());
        assert!(EquitySimulator::new(&cards("AhAd"), &[], 23).is_err());
    }

    #[test]
    fn test_invalid_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Err(PokerEngineError::InvalidTrialCount),
            simulate_equity(&cards("AhAd"), &[], 1, 0, &mut rng)
        );
        assert_eq!(
            Err(PokerEngineError::InvalidOpponentCount),
            simulate_equity(&cards("AhAd"), &[], 0, 10, &mut rng)
        );
        assert_eq!(
            Err(PokerEngineError::InvalidCardCount {
                hole: 3,
                community: 0
            }),
            simulate_equity(&cards("AhAdAc"), &[], 1, 10, &mut rng)
        );
        assert!(matches!(
            simulate_equity(&cards("AhAd"), &cards("Ah2c3c"), 1, 10, &mut rng),
            Err(PokerEngineError::DuplicateCard(_))
        ));
    }
}
