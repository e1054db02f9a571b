use std::cmp::Ordering;
use std::fmt;

use super::{Card, CardIter, GtoError};

/// All the different possible hand categories.
/// The discriminant is the category rank used as the primary
/// sort key when comparing hands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two different pair of matching cards.
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
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 8,
    /// Ten to ace all of the same suit.
    RoyalFlush = 9,
}

const CATEGORIES: [HandCategory; 10] = [
    HandCategory::HighCard,
    HandCategory::OnePair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
    HandCategory::RoyalFlush,
];

impl HandCategory {
    /// Every category from weakest to strongest.
    pub const fn all() -> [Self; 10] {
        CATEGORIES
    }

    /// The integer rank, 0 for high card up to 9 for a royal flush.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        CATEGORIES.get(usize::from(rank)).copied()
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best five card hand found in some cards.
///
/// Two results are equal when their category and kickers are equal,
/// no matter which suits made the hand. Ordering is lexicographic on
/// `(rank, kickers)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct HandResult {
    /// What kind of hand this is.
    pub category: HandCategory,
    /// Face values (2 to 14) that break ties inside the category.
    pub kickers: Vec<u8>,
    /// The five cards making the hand.
    pub cards: Vec<Card>,
}

impl HandResult {
    /// The category rank. 0 is high card and 9 is a royal flush.
    pub fn rank(&self) -> u8 {
        self.category.rank()
    }
}

impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandResult {}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.kickers.cmp(&other.kickers))
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// If the distinct values make a straight return the high card of it.
/// The wheel is a five high straight.
fn straight_high(distinct_desc: &[u8]) -> Option<u8> {
    match distinct_desc {
        [14, 5, 4, 3, 2] => Some(5),
        [high, _, _, _, low] if high - low == 4 => Some(*high),
        _ => None,
    }
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// The cards that will be ranked.
    fn cards(&self) -> &[Card];

    /// Score exactly five cards.
    ///
    /// ```
    /// use rs_gto::core::{HandCategory, Rankable, parse_board};
    ///
    /// let cards = parse_board("Ah2c3s4h5s").unwrap();
    /// let result = cards.rank_five();
    /// assert_eq!(HandCategory::Straight, result.category);
    /// assert_eq!(vec![5], result.kickers);
    /// ```
    fn rank_five(&self) -> HandResult {
        let cards = self.cards();
        let mut values: Vec<u8> = cards.iter().map(|c| c.value.face()).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));

        // Counts indexed by face value.
        let mut counts = [0u8; 15];
        for v in &values {
            counts[usize::from(*v)] += 1;
        }

        let is_flush = cards
            .split_first()
            .is_some_and(|(first, rest)| rest.iter().all(|c| c.suit == first.suit));

        let mut distinct = values.clone();
        distinct.dedup();
        let straight = straight_high(&distinct);

        let result = |category: HandCategory, kickers: Vec<u8>| HandResult {
            category,
            kickers,
            cards: cards.to_vec(),
        };

        if let (true, Some(high)) = (is_flush, straight) {
            if high == 14 {
                return result(HandCategory::RoyalFlush, vec![high]);
            }
            return result(HandCategory::StraightFlush, vec![high]);
        }

        // (count, value) groups, biggest count first then highest value.
        let mut groups: Vec<(u8, u8)> = distinct
            .iter()
            .map(|&v| (counts[usize::from(v)], v))
            .collect();
        groups.sort_by(|a, b| b.0.cmp(&a.0));

        let others = |skip: &[u8]| -> Vec<u8> {
            values
                .iter()
                .copied()
                .filter(|v| !skip.contains(v))
                .collect()
        };

        match groups.as_slice() {
            [(4, quad), ..] => {
                let kicker = others(&[*quad]).first().copied();
                result(
                    HandCategory::FourOfAKind,
                    std::iter::once(*quad).chain(kicker).collect(),
                )
            }
            [(3, trips), (2, pair), ..] => result(HandCategory::FullHouse, vec![*trips, *pair]),
            _ if is_flush => result(HandCategory::Flush, values.clone()),
            _ if straight.is_some() => {
                result(HandCategory::Straight, straight.into_iter().collect())
            }
            [(3, trips), ..] => {
                let mut kickers = vec![*trips];
                kickers.extend(others(&[*trips]));
                result(HandCategory::ThreeOfAKind, kickers)
            }
            [(2, high), (2, low), ..] => {
                let mut kickers = vec![*high, *low];
                kickers.extend(others(&[*high, *low]).first().copied());
                result(HandCategory::TwoPair, kickers)
            }
            [(2, pair), ..] => {
                let mut kickers = vec![*pair];
                kickers.extend(others(&[*pair]));
                result(HandCategory::OnePair, kickers)
            }
            _ => result(HandCategory::HighCard, values.clone()),
        }
    }

    /// Find the best five card hand inside of these cards.
    ///
    /// Every five card subset is scored and the best one kept. When two
    /// subsets tie the first one found wins.
    fn rank(&self) -> Result<HandResult, GtoError> {
        let cards = self.cards();
        if cards.len() < 5 {
            return Err(GtoError::InsufficientCards {
                need: 5,
                got: cards.len(),
            });
        }
        let mut best: Option<HandResult> = None;
        for five in CardIter::new(cards, 5) {
            let current = five.rank_five();
            if best.as_ref().is_none_or(|b| current > *b) {
                best = Some(current);
            }
        }
        best.ok_or(GtoError::InsufficientCards {
            need: 5,
            got: cards.len(),
        })
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value, parse_board};

    fn rank_str(s: &str) -> HandResult {
        parse_board(s).unwrap().rank_five()
    }

    #[test]
    fn test_cmp() {
        assert!(HandCategory::HighCard < HandCategory::StraightFlush);
        assert!(HandCategory::HighCard < HandCategory::FourOfAKind);
        assert!(HandCategory::HighCard < HandCategory::ThreeOfAKind);
        assert!(HandCategory::StraightFlush < HandCategory::RoyalFlush);
    }

    #[test]
    fn test_category_ranks_are_bijective() {
        for (i, category) in HandCategory::all().iter().enumerate() {
            assert_eq!(i as u8, category.rank());
            assert_eq!(Some(*category), HandCategory::from_rank(i as u8));
        }
        assert_eq!(None, HandCategory::from_rank(10));
    }

    #[test]
    fn test_high_card_hand() {
        let r = rank_str("Ad8h9cTc5c");
        assert_eq!(HandCategory::HighCard, r.category);
        assert_eq!(vec![14, 10, 9, 8, 5], r.kickers);
        assert_eq!(0, r.rank());
    }

    #[test]
    fn test_flush() {
        let r = rank_str("Ad8d9dTd5d");
        assert_eq!(HandCategory::Flush, r.category);
        assert_eq!(vec![14, 10, 9, 8, 5], r.kickers);
    }

    #[test]
    fn test_full_house() {
        let r = rank_str("AdAc9d9c9s");
        assert_eq!(HandCategory::FullHouse, r.category);
        assert_eq!(vec![9, 14], r.kickers);
    }

    #[test]
    fn test_two_pair() {
        let r = rank_str("AdAc9d9cTs");
        assert_eq!(HandCategory::TwoPair, r.category);
        assert_eq!(vec![14, 9, 10], r.kickers);
    }

    #[test]
    fn test_one_pair() {
        let r = rank_str("AdAc9d8cTs");
        assert_eq!(HandCategory::OnePair, r.category);
        assert_eq!(vec![14, 10, 9, 8], r.kickers);
    }

    #[test]
    fn test_four_of_a_kind() {
        let r = rank_str("AdAcAsAhTs");
        assert_eq!(HandCategory::FourOfAKind, r.category);
        assert_eq!(vec![14, 10], r.kickers);
    }

    #[test]
    fn test_wheel() {
        let r = rank_str("Ad2c3s4h5s");
        assert_eq!(HandCategory::Straight, r.category);
        assert_eq!(vec![5], r.kickers);
    }

    #[test]
    fn test_straight() {
        let r = rank_str("2c3s4h5s6d");
        assert_eq!(HandCategory::Straight, r.category);
        assert_eq!(vec![6], r.kickers);
        assert!(r > rank_str("Ad2c3s4h5s"));
    }

    #[test]
    fn test_not_a_straight() {
        // Ace can't wrap around.
        let r = rank_str("QcKsAh2s3d");
        assert_eq!(HandCategory::HighCard, r.category);
    }

    #[test]
    fn test_three_of_a_kind() {
        let r = rank_str("2c2s2h5s6d");
        assert_eq!(HandCategory::ThreeOfAKind, r.category);
        assert_eq!(vec![2, 6, 5], r.kickers);
    }

    #[test]
    fn test_straight_flush() {
        let r = rank_str("9h8h7h6h5h");
        assert_eq!(HandCategory::StraightFlush, r.category);
        assert_eq!(vec![9], r.kickers);

        let steel_wheel = rank_str("Ah2h3h4h5h");
        assert_eq!(HandCategory::StraightFlush, steel_wheel.category);
        assert_eq!(vec![5], steel_wheel.kickers);
        assert!(steel_wheel < r);
    }

    #[test]
    fn test_royal_flush() {
        let r = rank_str("AsKsQsJsTs");
        assert_eq!(HandCategory::RoyalFlush, r.category);
        assert_eq!(9, r.rank());
        assert_eq!(vec![14], r.kickers);
    }

    #[test]
    fn test_suits_never_break_ties() {
        let spades = rank_str("AsKs9d7c2h");
        let hearts = rank_str("AhKh9c7d2s");
        assert_eq!(spades, hearts);
        assert_eq!(Ordering::Equal, spades.cmp(&hearts));
    }

    #[test]
    fn test_kicker_breaks_tie() {
        let better = rank_str("AsAdKc7h2h");
        let worse = rank_str("AhAcQc7d2s");
        assert!(better > worse);
    }

    #[test]
    fn test_category_beats_kickers() {
        assert!(rank_str("2c2d3h4s6c") > rank_str("AsKdQh9c7d"));
        assert!(rank_str("2c2d2h3s3c") > rank_str("AsKsQs9s7s"));
    }

    #[test]
    fn test_rank_best_of_seven() {
        let cards = parse_board("AsAhAdKsKh2c3d").unwrap();
        let r = cards.rank().unwrap();
        assert_eq!(HandCategory::FullHouse, r.category);
        assert_eq!(vec![14, 13], r.kickers);
        assert_eq!(5, r.cards.len());
    }

    #[test]
    fn test_rank_too_few() {
        let cards = vec![
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::Ace, Suit::Heart),
        ];
        assert!(matches!(
            cards.rank(),
            Err(GtoError::InsufficientCards { need: 5, got: 2 })
        ));
    }

    #[test]
    fn test_every_five_card_hand_has_one_category() {
        // All 7462 distinct classes would be slow to spell out here, so
        // walk a slice of the deck instead.
        let deck: Vec<Card> = (0..20u8).map(Card::from).collect();
        for five in CardIter::new(&deck, 5) {
            let r = five.rank_five();
            assert_eq!(Some(r.category), HandCategory::from_rank(r.rank()));
            assert_eq!(5, r.cards.len());
        }
    }
}
