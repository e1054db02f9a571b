use std::collections::HashSet;
use std::fmt;

use crate::core::{Card, CardBitSet, GtoError};
use crate::holdem::starting_hand::{HandClass, TOTAL_COMBOS, combo_count, hand_combos};
use crate::holdem::strength::{HAND_RANKING, strength_index};

/// An ordered set of hand class strings.
///
/// Collecting into a `Range` drops duplicates, keeping the first one seen,
/// and then sorts strongest first. Strings that aren't real hand classes
/// go last in the order they were seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Range(Vec<String>);

impl Range {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, hand: &str) -> bool {
        self.0.iter().any(|h| h == hand)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Total number of concrete combinations in the range.
    pub fn total_combos(&self) -> u32 {
        total_combos(self.0.as_slice())
    }

    /// Share of all 1326 combinations, as a percentage.
    pub fn pct(&self) -> f64 {
        range_pct(self.0.as_slice())
    }

    /// This range with every class that can't be dealt around the dead cards removed.
    pub fn without_blocked<I>(&self, dead: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        blockers_remove(self.0.as_slice(), dead)
    }
}

impl FromIterator<String> for Range {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut seen = HashSet::new();
        let mut hands: Vec<String> = iter
            .into_iter()
            .filter(|h| seen.insert(h.clone()))
            .collect();
        // Stable so unranked hands keep their order.
        hands.sort_by_key(|h| strength_index(h));
        Self(hands)
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Range {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

/// Sum of `combo_count` over some hand classes.
///
/// ```
/// use rs_gto::holdem::total_combos;
///
/// assert_eq!(22, total_combos(&["AA", "AKs", "AKo"]));
/// ```
pub fn total_combos<S: AsRef<str>>(hands: &[S]) -> u32 {
    hands.iter().map(|h| combo_count(h.as_ref())).sum()
}

/// What percent of all 1326 starting combinations these classes cover.
pub fn range_pct<S: AsRef<str>>(hands: &[S]) -> f64 {
    f64::from(total_combos(hands)) / f64::from(TOTAL_COMBOS) * 100.0
}

/// The strongest hands that make up about `pct` percent of all combinations.
///
/// Hands are taken strongest first. Taking stops at the first hand that
/// reaches the target, and a hand that would go past the target is left
/// out unless nothing has been taken yet.
///
/// ```
/// use rs_gto::holdem::range_from_top_pct;
///
/// let top = range_from_top_pct(1.0).unwrap();
/// assert_eq!(vec!["AA", "KK"], top.as_slice());
/// assert!(range_from_top_pct(0.0).is_err());
/// ```
pub fn range_from_top_pct(pct: f64) -> Result<Range, GtoError> {
    if pct.is_nan() || pct <= 0.0 || pct > 100.0 {
        return Err(GtoError::OutOfRange(pct));
    }
    let target = f64::from(TOTAL_COMBOS) * (pct / 100.0);
    let mut result = Vec::new();
    let mut running = 0u32;
    for hand in HAND_RANKING {
        let count = combo_count(hand);
        if f64::from(running + count) > target && running > 0 {
            break;
        }
        result.push(hand.to_string());
        running += count;
        if f64::from(running) >= target {
            break;
        }
    }
    Ok(Range(result))
}

/// Count the combinations that survive the dead cards.
fn surviving(combos: &[(Card, Card)], dead: &CardBitSet) -> usize {
    combos
        .iter()
        .filter(|(one, two)| dead.is_disjoint(&[*one, *two].into_iter().collect()))
        .count()
}

/// Keep only the hand classes that still have at least one combination
/// that doesn't use a dead card. Anything that isn't a hand class has no
/// combinations, so it is dropped.
///
/// ```
/// use rs_gto::core::parse_board;
/// use rs_gto::holdem::blockers_remove;
///
/// let dead = parse_board("AsAhAd").unwrap();
/// let kept = blockers_remove(&["AA", "KK"], dead);
/// assert_eq!(vec!["KK"], kept.as_slice());
/// ```
pub fn blockers_remove<S, I>(hands: &[S], dead: I) -> Range
where
    S: AsRef<str>,
    I: IntoIterator<Item = Card>,
{
    let dead: CardBitSet = dead.into_iter().collect();
    let mut kept = Vec::with_capacity(hands.len());
    for hand in hands {
        let hand: &str = hand.as_ref();
        if let Ok(combos) = hand_combos(hand) {
            if surviving(&combos, &dead) > 0 {
                kept.push(hand.to_string());
            }
        }
    }
    Range(kept)
}

/// How many of a hand class' combinations are impossible because of the
/// dead cards. Anything that isn't a hand class, specific hands like
/// `AsKd` included, counts as 0 just like in [`combo_count`].
///
/// ```
/// use rs_gto::core::parse_board;
/// use rs_gto::holdem::blocked_combos;
///
/// assert_eq!(5, blocked_combos("AA", parse_board("AsAh").unwrap()));
/// ```
pub fn blocked_combos<I>(hand: &str, dead: I) -> u32
where
    I: IntoIterator<Item = Card>,
{
    let Ok(class) = hand.parse::<HandClass>() else {
        return 0;
    };
    let dead: CardBitSet = dead.into_iter().collect();
    let combos = class.combos();
    class.combo_count() - surviving(&combos, &dead) as u32
}
