//! Pot math used to judge whether continuing is profitable.
//!
//! Probabilities are fractions in `0.0..=1.0`, money is in whatever
//! unit the caller uses for the pot.

/// Default share of the remaining stack assumed to be won on later
/// streets when computing implied odds. This is a rule of thumb with
/// no derivation behind it; treat the resulting number as a hint.
pub const DEFAULT_IMPLIED_STACK_FRACTION: f64 = 0.3;

/// The share of the final pot the hero has to put in to call.
///
/// Calling is break even when the hero's equity equals this number.
/// Nothing owed means the odds are zero.
///
/// ```
/// use poker_equity::holdem::pot_odds;
///
/// assert_eq!(0.25, pot_odds(75.0, 25.0));
/// assert_eq!(0.0, pot_odds(100.0, 0.0));
/// ```
pub fn pot_odds(pot_size: f64, bet_to_call: f64) -> f64 {
    if bet_to_call <= 0.0 {
        return 0.0;
    }
    bet_to_call / (pot_size + bet_to_call)
}

/// Pot odds counting money expected to be won after this street.
///
/// Future winnings are estimated as `stack_size * stack_fraction`,
/// so the number is always at or below `pot_odds`.
pub fn implied_odds(pot_size: f64, bet_to_call: f64, stack_size: f64, stack_fraction: f64) -> f64 {
    if bet_to_call <= 0.0 {
        return 0.0;
    }
    let future = (stack_size * stack_fraction).max(0.0);
    bet_to_call / (pot_size + bet_to_call + future)
}

/// Expected value of calling.
///
/// Wins take the pot, ties split it, losses give up the call.
///
/// ```
/// use poker_equity::holdem::expected_value;
///
/// // Half the time we win 100, otherwise we lose 50.
/// assert_eq!(25.0, expected_value(0.5, 0.0, 100.0, 50.0));
/// ```
pub fn expected_value(win: f64, tie: f64, pot_size: f64, bet_to_call: f64) -> f64 {
    let loss = (1.0 - win - tie).max(0.0);
    win * pot_size + tie * pot_size / 2.0 - loss * bet_to_call
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_pot_odds() {
        assert_relative_eq!(1.0 / 3.0, pot_odds(100.0, 50.0));
        assert_relative_eq!(1.0, pot_odds(0.0, 10.0));
        assert_eq!(0.0, pot_odds(0.0, 0.0));
    }

    #[test]
    fn test_implied_odds_below_pot_odds() {
        let po = pot_odds(100.0, 50.0);
        let io = implied_odds(100.0, 50.0, 1000.0, DEFAULT_IMPLIED_STACK_FRACTION);
        assert_relative_eq!(50.0 / 450.0, io);
        assert!(io < po);

        // No stack behind means no implied money.
        assert_relative_eq!(po, implied_odds(100.0, 50.0, 0.0, 0.3));
        assert_eq!(0.0, implied_odds(100.0, 0.0, 1000.0, 0.3));
    }

    #[test]
    fn test_expected_value() {
        assert_relative_eq!(100.0, expected_value(1.0, 0.0, 100.0, 50.0));
        assert_relative_eq!(-50.0, expected_value(0.0, 0.0, 100.0, 50.0));
        assert_relative_eq!(50.0, expected_value(0.0, 1.0, 100.0, 50.0));
        assert_relative_eq!(0.0, expected_value(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_break_even_at_pot_odds() {
        // With equity equal to the pot odds the call neither wins nor loses.
        let pot = 150.0;
        let call = 50.0;
        let equity = pot_odds(pot, call);
        assert_relative_eq!(0.0, expected_value(equity, 0.0, pot, call), epsilon = 1e-9);
    }
}
