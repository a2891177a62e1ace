use std::fmt;

use super::{Card, Hand, PokerEngineError, Suit, Value};

/// All the different possible hand categories, weakest first.
/// The discriminant is the category number used at the boundary.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two diffent pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all fo the same suit.
    StraightFlush = 8,
}

impl HandCategory {
    /// The category number, 0 for high card up to 8 for a straight flush.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Human readable name of the category.
    ///
    /// ```
    /// use poker_equity::core::HandCategory;
    ///
    /// assert_eq!("Three of a Kind", HandCategory::ThreeOfAKind.name());
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of ranking a set of cards.
///
/// `cards` are the cards that make up the category, in the
/// order they matter for tie breaking (the trips before the pair
/// of a full house, the five first in a wheel). `kickers` are
/// only used to break ties between hands of the same category.
///
/// Equality and ordering only look at the category and the card
/// values, never the suits. See `core::compare`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandRank {
    pub category: HandCategory,
    pub cards: Vec<Card>,
    pub kickers: Vec<Card>,
}

impl HandRank {
    pub fn name(&self) -> &'static str {
        self.category.name()
    }

    /// Card values in tie break significance order:
    /// the made cards then the kickers.
    pub fn significant_values(&self) -> impl Iterator<Item = Value> + '_ {
        self.cards.iter().chain(self.kickers.iter()).map(|c| c.value)
    }
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Rank the cards. It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is called more than once.
    fn rank(&self) -> Result<HandRank, PokerEngineError>;
}

impl Rankable for [Card] {
    fn rank(&self) -> Result<HandRank, PokerEngineError> {
        evaluate(self)
    }
}

impl Rankable for Vec<Card> {
    fn rank(&self) -> Result<HandRank, PokerEngineError> {
        evaluate(self)
    }
}

impl Rankable for Hand {
    fn rank(&self) -> Result<HandRank, PokerEngineError> {
        evaluate(&self[..])
    }
}

/// Rank 5 to 7 distinct cards into the best hand they contain.
///
/// # Examples
///
/// ```
/// use poker_equity::core::{Card, HandCategory, Value, evaluate};
///
/// let cards: Vec<Card> = ["Ah", "2h", "3h", "4h", "5h"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let rank = evaluate(&cards).unwrap();
///
/// assert_eq!(HandCategory::StraightFlush, rank.category);
/// // The ace plays low in the wheel.
/// assert_eq!(Value::Five, rank.cards[0].value);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandRank, PokerEngineError> {
    if cards.len() < 5 {
        return Err(PokerEngineError::InsufficientCards(cards.len()));
    }
    rank_partial(cards)
}

/// Rank between 1 and 7 distinct cards.
///
/// This is the same search as `evaluate` without the five card
/// minimum, so it can name what a player is holding before the flop.
/// Straights and flushes need five cards and so never match short hands.
///
/// ```
/// use poker_equity::core::{Hand, HandCategory, rank_partial};
///
/// let hole = Hand::new_from_str("7c7d").unwrap();
/// assert_eq!(HandCategory::OnePair, rank_partial(&hole[..]).unwrap().category);
/// ```
pub fn rank_partial(cards: &[Card]) -> Result<HandRank, PokerEngineError> {
    if cards.is_empty() {
        return Err(PokerEngineError::InsufficientCards(0));
    }
    if cards.len() > 7 {
        return Err(PokerEngineError::TooManyCards(cards.len()));
    }
    let groups = CardGroups::new(cards)?;

    RANKING_CHAIN
        .iter()
        .find_map(|(category, extract)| {
            extract(&groups).map(|(cards, kickers)| HandRank {
                category: *category,
                cards,
                kickers,
            })
        })
        // High card always matches so this is never reached.
        .ok_or(PokerEngineError::InsufficientCards(cards.len()))
}

/// Made cards and kickers for a matched category.
type Made = (Vec<Card>, Vec<Card>);

/// A category check. Returns `None` when the category isn't present.
type Extractor = fn(&CardGroups) -> Option<Made>;

/// Every category, strongest first. The first one that
/// matches is the best hand the cards make.
const RANKING_CHAIN: [(HandCategory, Extractor); 9] = [
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::OnePair, one_pair),
    (HandCategory::HighCard, high_card),
];

/// The cards bucketed by value and suit.
/// Every list is sorted from the highest card down.
struct CardGroups {
    sorted: Vec<Card>,
    by_value: [Vec<Card>; 13],
    by_suit: [Vec<Card>; 4],
}

impl CardGroups {
    fn new(cards: &[Card]) -> Result<Self, PokerEngineError> {
        let mut sorted = cards.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(PokerEngineError::DuplicateCard(w[0]));
        }

        let mut by_value: [Vec<Card>; 13] = Default::default();
        let mut by_suit: [Vec<Card>; 4] = Default::default();
        for c in &sorted {
            by_value[c.value as usize].push(*c);
            by_suit[c.suit as usize].push(*c);
        }
        Ok(Self {
            sorted,
            by_value,
            by_suit,
        })
    }

    /// Values held at least `min` times, highest first.
    fn values_with_count(&self, min: usize) -> impl Iterator<Item = Value> + '_ {
        Value::values()
            .into_iter()
            .rev()
            .filter(move |v| self.by_value[*v as usize].len() >= min)
    }

    fn flush_suit(&self) -> Option<Suit> {
        Suit::suits()
            .into_iter()
            .find(|s| self.by_suit[*s as usize].len() >= 5)
    }

    /// The highest cards not already used by the made hand.
    fn kickers(&self, used: &[Card], n: usize) -> Vec<Card> {
        self.sorted
            .iter()
            .filter(|c| !used.contains(c))
            .take(n)
            .copied()
            .collect()
    }
}

/// Find the highest five card run in cards sorted high to low.
/// The wheel counts with the ace played below the two.
fn find_straight(sorted: &[Card]) -> Option<Vec<Card>> {
    let mut by_value: [Option<Card>; 13] = [None; 13];
    for c in sorted {
        let slot = &mut by_value[c.value as usize];
        if slot.is_none() {
            *slot = Some(*c);
        }
    }

    // A straight tops out at the five at the lowest.
    (Value::Five as usize..=Value::Ace as usize)
        .rev()
        .find_map(|high| {
            (0..5)
                .map(|step| {
                    let idx = if high == Value::Five as usize && step == 4 {
                        Value::Ace as usize
                    } else {
                        high - step
                    };
                    by_value[idx]
                })
                .collect::<Option<Vec<Card>>>()
        })
}

fn straight_flush(groups: &CardGroups) -> Option<Made> {
    let suit = groups.flush_suit()?;
    find_straight(&groups.by_suit[suit as usize]).map(|cards| (cards, vec![]))
}

fn four_of_a_kind(groups: &CardGroups) -> Option<Made> {
    let value = groups.values_with_count(4).next()?;
    let cards = groups.by_value[value as usize][..4].to_vec();
    let kickers = groups.kickers(&cards, 1);
    Some((cards, kickers))
}

fn full_house(groups: &CardGroups) -> Option<Made> {
    let trips = groups.values_with_count(3).next()?;
    let pair = groups.values_with_count(2).find(|v| *v != trips)?;

    let mut cards = groups.by_value[trips as usize][..3].to_vec();
    cards.extend_from_slice(&groups.by_value[pair as usize][..2]);
    Some((cards, vec![]))
}

fn flush(groups: &CardGroups) -> Option<Made> {
    let suit = groups.flush_suit()?;
    Some((groups.by_suit[suit as usize][..5].to_vec(), vec![]))
}

fn straight(groups: &CardGroups) -> Option<Made> {
    find_straight(&groups.sorted).map(|cards| (cards, vec![]))
}

fn three_of_a_kind(groups: &CardGroups) -> Option<Made> {
    let value = groups.values_with_count(3).next()?;
    let cards = groups.by_value[value as usize][..3].to_vec();
    let kickers = groups.kickers(&cards, 2);
    Some((cards, kickers))
}

fn two_pair(groups: &CardGroups) -> Option<Made> {
    let mut pairs = groups.values_with_count(2);
    let high = pairs.next()?;
    let low = pairs.next()?;

    let mut cards = groups.by_value[high as usize][..2].to_vec();
    cards.extend_from_slice(&groups.by_value[low as usize][..2]);
    let kickers = groups.kickers(&cards, 1);
    Some((cards, kickers))
}

fn one_pair(groups: &CardGroups) -> Option<Made> {
    let value = groups.values_with_count(2).next()?;
    let cards = groups.by_value[value as usize][..2].to_vec();
    let kickers = groups.kickers(&cards, 3);
    Some((cards, kickers))
}

fn high_card(groups: &CardGroups) -> Option<Made> {
    Some((groups.sorted.iter().take(5).copied().collect(), vec![]))
}
