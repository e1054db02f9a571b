use std::fmt;

use super::Card;

/// Bits set for the 52 cards of a deck.
const DECK_MASK: u64 = (1 << 52) - 1;

/// A set of cards stored as one bit per card in a `u64`.
///
/// Bit `n` is the card whose `u8` index is `n`. Ranges use it to hold the
/// dead cards, and the evaluator uses it to catch a card given twice.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    bits: u64,
}

impl CardBitSet {
    /// An empty set.
    ///
    /// ```
    /// use rs_gto::core::CardBitSet;
    ///
    /// assert!(CardBitSet::new().is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Every card in the deck.
    pub const fn full() -> Self {
        Self { bits: DECK_MASK }
    }

    fn bit(card: Card) -> u64 {
        1u64 << u8::from(card)
    }

    /// Add a card. Returns false if it was already there.
    ///
    /// ```
    /// use rs_gto::core::{CardBitSet, parse_board};
    ///
    /// let mut set = CardBitSet::new();
    /// let cards = parse_board("6cKc6c").unwrap();
    /// assert!(set.insert(cards[0]));
    /// assert!(set.insert(cards[1]));
    /// assert!(!set.insert(cards[2]));
    /// assert_eq!(2, set.count());
    /// ```
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = Self::bit(card);
        let added = self.bits & bit == 0;
        self.bits |= bit;
        added
    }

    pub fn contains(&self, card: Card) -> bool {
        self.bits & Self::bit(card) != 0
    }

    /// True when no card is in both sets.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.bits & other.bits == 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of cards in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> FromIterator<&'a Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = &'a Card>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Extend<Card> for CardBitSet {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl fmt::Debug for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

/// Cards of a `CardBitSet` from the lowest index up.
pub struct CardBitSetIter {
    bits: u64,
}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter { bits: self.bits }
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as u8;
        // Clear the lowest set bit.
        self.bits &= self.bits - 1;
        Some(Card::from(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CardBitSetIter {}
