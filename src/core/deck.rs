use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, CardBitSet, GtoError, Suit, Value};

/// A deck of cards that can be shuffled and dealt from.
///
/// The cards start out in value then suit order. Nothing is
/// random until `shuffle` is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage. Dealing takes from the front.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the normal 52 card deck
    ///
    /// ```
    /// use rs_gto::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        Self::new_excluding(&[])
    }

    /// Create a deck without the given cards. Useful for
    /// removing the hero's hole cards and the board.
    pub fn new_excluding(exclude: &[Card]) -> Self {
        let excluded: CardBitSet = exclude.iter().collect();
        let mut cards = Vec::with_capacity(52 - excluded.count());
        for v in Value::values() {
            for s in Suit::suits() {
                let card = Card::new(v, s);
                if !excluded.contains(card) {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    /// Deal `n` cards off the top of the deck.
    ///
    /// ```
    /// use rs_gto::core::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let hole = deck.deal(2).unwrap();
    /// assert_eq!(2, hole.len());
    /// assert_eq!(50, deck.len());
    /// assert!(deck.deal(51).is_err());
    /// ```
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GtoError> {
        if n > self.cards.len() {
            return Err(GtoError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
