use std::cmp::Ordering;

use super::HandRank;

/// Total order over ranked hands.
///
/// The category decides first. Within a category the card values of
/// `cards` then `kickers` are compared position by position, most
/// significant first. Suits never matter, so two hands that differ only
/// by suit are an exact tie.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use poker_equity::core::{Hand, Rankable, compare};
///
/// let kings = Hand::new_from_str("KsKdAh7c2d").unwrap().rank().unwrap();
/// let queens = Hand::new_from_str("QsQdAh7c2d").unwrap().rank().unwrap();
///
/// assert_eq!(Ordering::Greater, compare(&kings, &queens));
/// assert_eq!(Ordering::Less, compare(&queens, &kings));
/// assert_eq!(Ordering::Equal, compare(&kings, &kings));
/// ```
pub fn compare(a: &HandRank, b: &HandRank) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.significant_values().cmp(b.significant_values()))
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for HandRank {}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
