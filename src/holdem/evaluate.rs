use std::cmp::Ordering;

use crate::core::{Card, CardBitSet, GtoError, HandResult, Rankable};

/// Find the best five card hand from hole cards and the board.
///
/// Needs at least five cards between the two and no more than seven.
/// Every card has to be different.
///
/// ```
/// use rs_gto::core::{HandCategory, parse_board};
/// use rs_gto::holdem::evaluate;
///
/// let hole = parse_board("As2h").unwrap();
/// let board = parse_board("3d4c5sKhQd").unwrap();
/// let result = evaluate(&hole, &board).unwrap();
/// assert_eq!(HandCategory::Straight, result.category);
/// assert_eq!(vec![5], result.kickers);
/// ```
pub fn evaluate(hole: &[Card], board: &[Card]) -> Result<HandResult, GtoError> {
    let got = hole.len() + board.len();
    if got < 5 {
        return Err(GtoError::InsufficientCards { need: 5, got });
    }
    if got > 7 {
        return Err(GtoError::TooManyCards(got));
    }

    let mut seen = CardBitSet::new();
    let mut all_cards = Vec::with_capacity(got);
    for card in hole.iter().chain(board) {
        if !seen.insert(*card) {
            return Err(GtoError::DuplicateCard(*card));
        }
        all_cards.push(*card);
    }
    all_cards.rank()
}

/// Compare two hole card hands on the same board.
///
/// `Greater` means the hero wins, `Less` means the villain wins, and
/// `Equal` is a split pot.
pub fn compare_hands(
    hero: &[Card],
    villain: &[Card],
    board: &[Card],
) -> Result<Ordering, GtoError> {
    let hero_result = evaluate(hero, board)?;
    let villain_result = evaluate(villain, board)?;
    Ok(hero_result.cmp(&villain_result))
}
