/// Module that can generate possible cards for a starting hand.
mod starting_hand;
/// Export `HandClass` and the combination helpers.
pub use self::starting_hand::{
    HandClass, Suitedness, TOTAL_COMBOS, combo_count, hand_combos, simplify_hand,
};

/// Best hand out of hole cards and a board.
mod evaluate;
pub use self::evaluate::{compare_hands, evaluate};

/// Preflop ordering of all 169 starting hands.
mod strength;
pub use self::strength::{HAND_RANKING, strength_index};

/// Module with all the starting hand parsing code.
mod parse;
/// Export `RangeParser`
pub use self::parse::{RangeParser, parse_range};

/// Range sets, combination counting and blockers.
mod range;
pub use self::range::{
    Range, blocked_combos, blockers_remove, range_from_top_pct, range_pct, total_combos,
};

/// Text rendering of a range as the usual 13x13 chart.
mod grid;
pub use self::grid::range_grid;
