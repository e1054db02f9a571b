use super::Card;

/// Iterator over every `num_cards` sized subset of some cards.
///
/// Subsets come out in lexicographic order of their positions in the
/// source slice, so the order is stable for the same input.
///
/// ```
/// use rs_gto::core::{CardIter, parse_board};
///
/// let cards = parse_board("AsKsQsJsTs9s8s").unwrap();
/// assert_eq!(21, CardIter::new(&cards, 5).count());
/// ```
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // Has the first subset been produced yet.
    started: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: (0..num_cards).collect(),
            started: false,
        }
    }

    fn current(&self) -> Vec<Card> {
        self.idx.iter().map(|&i| self.possible_cards[i]).collect()
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        let num_cards = self.idx.len();
        let total = self.possible_cards.len();
        if num_cards > total {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        // Find the right most offset that still has room to move forward.
        let mut level = num_cards;
        loop {
            if level == 0 {
                return None;
            }
            level -= 1;
            // Cards needed after this level have to fit after it.
            if self.idx[level] < total - (num_cards - level) {
                break;
            }
        }

        self.idx[level] += 1;
        for after in (level + 1)..num_cards {
            self.idx[after] = self.idx[after - 1] + 1;
        }
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardBitSet, Suit, Value};

    #[test]
    fn test_iter_one() {
        let cards = vec![Card::new(Value::Two, Suit::Spade)];

        for subset in CardIter::new(&cards, 1) {
            assert_eq!(1, subset.len());
        }
        assert_eq!(1, CardIter::new(&cards, 1).count());
    }

    #[test]
    fn test_iter_two() {
        let cards = vec![
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::Three, Suit::Spade),
            Card::new(Value::Four, Suit::Spade),
        ];

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::new(&cards, 2).count());

        // Make sure that everything has two cards and they are different.
        for subset in CardIter::new(&cards, 2) {
            assert_eq!(2, subset.len());
            assert!(subset[0] != subset[1]);
        }
    }

    #[test]
    fn test_iter_too_few() {
        let cards = vec![Card::new(Value::Two, Suit::Spade)];
        assert_eq!(0, CardIter::new(&cards, 2).count());
    }

    #[test]
    fn test_iter_seven_choose_five() {
        let cards: Vec<Card> = (0..7u8).map(Card::from).collect();
        let subsets: Vec<Vec<Card>> = CardIter::new(&cards, 5).collect();
        assert_eq!(21, subsets.len());
        for subset in &subsets {
            let uniq: CardBitSet = subset.iter().collect();
            assert_eq!(5, uniq.count());
        }
        assert_eq!(cards[..5].to_vec(), subsets[0]);
        assert_eq!(cards[2..].to_vec(), subsets[20]);
    }

    #[test]
    fn test_iter_deck_two() {
        let deck: Vec<Card> = CardBitSet::full().into_iter().collect();
        assert_eq!(1326, CardIter::new(&deck, 2).count());
    }
}
