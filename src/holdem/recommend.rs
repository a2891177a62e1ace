use std::fmt;

/// What the hero should do next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Action {
    Fold,
    Call,
    Raise,
    AllIn,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Fold => "fold",
            Action::Call => "call",
            Action::Raise => "raise",
            Action::AllIn => "all-in",
        })
    }
}

/// An action and how sure the engine is about it, 0 to 100.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    pub action: Action,
    pub confidence: u8,
}

/// Coarse strength bucket for an equity percentage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Marginal,
    Strong,
    VeryStrong,
}

impl StrengthBand {
    pub fn from_equity(equity: f64) -> Self {
        if equity >= 80.0 {
            StrengthBand::VeryStrong
        } else if equity >= 60.0 {
            StrengthBand::Strong
        } else if equity >= 40.0 {
            StrengthBand::Marginal
        } else if equity >= 20.0 {
            StrengthBand::Weak
        } else {
            StrengthBand::VeryWeak
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrengthBand::VeryStrong => "very strong",
            StrengthBand::Strong => "strong",
            StrengthBand::Marginal => "marginal",
            StrengthBand::Weak => "weak",
            StrengthBand::VeryWeak => "very weak",
        }
    }
}

/// Pick an action from equity (percent), pot odds (fraction) and
/// expected value.
///
/// Positive expected value plays for value, scaled by equity. Otherwise
/// the hand folds when it is nearly dead or not getting the price,
/// and calls when the price is right.
///
/// ```
/// use poker_equity::holdem::{Action, recommend};
///
/// let r = recommend(85.0, 0.2, 40.0);
/// assert_eq!(Action::AllIn, r.action);
/// assert_eq!(95, r.confidence);
///
/// let r = recommend(30.0, 0.4, -10.0);
/// assert_eq!(Action::Fold, r.action);
/// assert_eq!(70, r.confidence);
/// ```
pub fn recommend(equity: f64, pot_odds: f64, expected_value: f64) -> Recommendation {
    let (action, confidence) = if expected_value > 0.0 {
        if equity > 80.0 {
            (Action::AllIn, 95)
        } else if equity > 60.0 {
            (Action::Raise, 85)
        } else {
            (Action::Call, 75)
        }
    } else if equity < 20.0 {
        (Action::Fold, 90)
    } else if pot_odds > equity / 100.0 {
        (Action::Fold, 70)
    } else {
        (Action::Call, 60)
    };
    Recommendation { action, confidence }
}

/// Plain language facts behind a recommendation, in a fixed order:
/// equity, expected value, pot odds, then overall hand strength.
///
/// Nothing here changes the action, it only explains it.
pub fn reasoning(equity: f64, pot_odds: f64, expected_value: f64) -> Vec<String> {
    let mut reasons = Vec::with_capacity(4);
    reasons.push(format!("Estimated equity is {equity:.1}%"));

    reasons.push(if expected_value > 0.0 {
        format!("Calling has positive expected value of {expected_value:.2}")
    } else if expected_value < 0.0 {
        format!("Calling has negative expected value of {expected_value:.2}")
    } else {
        "Calling is break even".to_string()
    });

    if pot_odds > 0.0 {
        let needed = pot_odds * 100.0;
        let verdict = if equity >= needed { "meets" } else { "falls short of" };
        reasons.push(format!(
            "Pot odds require {needed:.1}% equity, which the hand {verdict}"
        ));
    } else {
        reasons.push("There is no bet to call".to_string());
    }

    reasons.push(format!(
        "Hand strength is {}",
        StrengthBand::from_equity(equity).description()
    ));
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table() {
        let cases = [
            (90.0, 0.1, 10.0, Action::AllIn, 95),
            (70.0, 0.1, 10.0, Action::Raise, 85),
            (50.0, 0.1, 10.0, Action::Call, 75),
            (10.0, 0.1, -5.0, Action::Fold, 90),
            (30.0, 0.4, -5.0, Action::Fold, 70),
            (30.0, 0.2, -5.0, Action::Call, 60),
            (30.0, 0.2, 0.0, Action::Call, 60),
        ];
        for (equity, pot_odds, ev, action, confidence) in cases {
            assert_eq!(
                Recommendation { action, confidence },
                recommend(equity, pot_odds, ev),
                "equity={equity} pot_odds={pot_odds} ev={ev}"
            );
        }
    }

    #[test]
    fn test_boundaries() {
        // Thresholds are strict.
        assert_eq!(Action::Raise, recommend(80.0, 0.0, 1.0).action);
        assert_eq!(Action::Call, recommend(60.0, 0.0, 1.0).action);
        assert_eq!(Action::Call, recommend(20.0, 0.2, -1.0).action);
        assert_eq!(Action::Fold, recommend(20.0, 0.21, -1.0).action);
    }

    #[test]
    fn test_total_and_deterministic() {
        for equity in [0.0, 12.5, 50.0, 99.9, 100.0, f64::NAN] {
            for pot_odds in [0.0, 0.33, 1.0] {
                for ev in [-100.0, 0.0, 0.01, 100.0] {
                    let one = recommend(equity, pot_odds, ev);
                    let two = recommend(equity, pot_odds, ev);
                    assert_eq!(one, two);
                    assert!(one.confidence <= 100);
                }
            }
        }
    }

    #[test]
    fn test_reasoning_order() {
        let reasons = reasoning(65.0, 0.25, 12.5);
        assert_eq!(4, reasons.len());
        assert_eq!("Estimated equity is 65.0%", reasons[0]);
        assert_eq!("Calling has positive expected value of 12.50", reasons[1]);
        assert_eq!(
            "Pot odds require 25.0% equity, which the hand meets",
            reasons[2]
        );
        assert_eq!("Hand strength is strong", reasons[3]);
    }

    #[test]
    fn test_reasoning_negative() {
        let reasons = reasoning(15.0, 0.0, -3.0);
        assert_eq!("Calling has negative expected value of -3.00", reasons[1]);
        assert_eq!("There is no bet to call", reasons[2]);
        assert_eq!("Hand strength is very weak", reasons[3]);
    }

    #[test]
    fn test_bands() {
        assert_eq!(StrengthBand::VeryStrong, StrengthBand::from_equity(80.0));
        assert_eq!(StrengthBand::Marginal, StrengthBand::from_equity(45.0));
        assert!(StrengthBand::Weak < StrengthBand::Strong);
    }

    #[test]
    fn test_action_display() {
        assert_eq!("all-in", Action::AllIn.to_string());
        assert_eq!("fold", Action::Fold.to_string());
    }
}
