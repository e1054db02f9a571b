use std::fmt;

use tracing::event;

use crate::core::{Card, CardBitSet, GtoError};

/// How closely the board's values sit together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Connectedness {
    Disconnected,
    SemiConnected,
    Connected,
}

impl fmt::Display for Connectedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Connectedness::Disconnected => "disconnected",
            Connectedness::SemiConnected => "semi-connected",
            Connectedness::Connected => "connected",
        })
    }
}

/// How many draws the board allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Wetness {
    Dry,
    Medium,
    Wet,
}

impl fmt::Display for Wetness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Wetness::Dry => "dry",
            Wetness::Medium => "medium",
            Wetness::Wet => "wet",
        })
    }
}

/// Suit layout of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SuitPattern {
    /// The flop is all one suit.
    Monotone,
    /// At least two cards share a suit.
    TwoTone,
    /// Every card a different suit.
    Rainbow,
}

impl fmt::Display for SuitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SuitPattern::Monotone => "monotone",
            SuitPattern::TwoTone => "two-tone",
            SuitPattern::Rainbow => "rainbow",
        })
    }
}

/// A read of a flop, turn or river board.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardTexture {
    pub cards: Vec<Card>,
    /// Value char of the highest card.
    pub high_card: char,
    pub is_paired: bool,
    pub suits: SuitPattern,
    pub flush_draw_possible: bool,
    pub straight_draw_possible: bool,
    pub connectedness: Connectedness,
    pub wetness: Wetness,
    /// Short summary like `"two-tone connected J-high"`.
    pub category: String,
    pub draws: Vec<&'static str>,
}

impl BoardTexture {
    pub fn is_monotone(&self) -> bool {
        self.suits == SuitPattern::Monotone
    }

    pub fn is_two_tone(&self) -> bool {
        self.suits == SuitPattern::TwoTone
    }

    pub fn is_rainbow(&self) -> bool {
        self.suits == SuitPattern::Rainbow
    }
}

impl fmt::Display for BoardTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.wetness)
    }
}

/// Three or more distinct values inside some five value window. An ace
/// also counts as a one.
fn has_straight_draw(unique_asc: &[u8]) -> bool {
    let in_window = unique_asc
        .iter()
        .any(|&low| unique_asc.iter().filter(|&&v| v >= low && v <= low + 4).count() >= 3);
    let wheel_window = unique_asc.contains(&14)
        && unique_asc.iter().filter(|&&v| v <= 5).count() + 1 >= 3;
    in_window || wheel_window
}

/// Describe a board of three to five cards.
///
/// ```
/// use rs_gto::core::parse_board;
/// use rs_gto::postflop::{Wetness, analyze_board};
///
/// let texture = analyze_board(&parse_board("Ks7d2c").unwrap()).unwrap();
/// assert_eq!(Wetness::Dry, texture.wetness);
/// assert_eq!("rainbow disconnected K-high", texture.category);
/// ```
pub fn analyze_board(board: &[Card]) -> Result<BoardTexture, GtoError> {
    if board.len() < 3 {
        return Err(GtoError::InsufficientCards {
            need: 3,
            got: board.len(),
        });
    }
    if board.len() > 5 {
        return Err(GtoError::TooManyCards(board.len()));
    }
    let mut seen = CardBitSet::new();
    for card in board {
        if !seen.insert(*card) {
            return Err(GtoError::DuplicateCard(*card));
        }
    }

    let mut suit_counts = [0u8; 4];
    let mut value_counts = [0u8; 15];
    for card in board {
        suit_counts[card.suit as usize] += 1;
        value_counts[usize::from(card.value.face())] += 1;
    }
    let max_suit = suit_counts.iter().copied().max().unwrap_or(0);
    let flop_one_suit = board[..3].iter().all(|c| c.suit == board[0].suit);

    let suits = if max_suit >= 3 && flop_one_suit {
        SuitPattern::Monotone
    } else if max_suit >= 2 {
        SuitPattern::TwoTone
    } else {
        SuitPattern::Rainbow
    };
    let is_paired = value_counts.iter().any(|&n| n >= 2);

    let unique: Vec<u8> = (2..=14u8).filter(|&v| value_counts[usize::from(v)] > 0).collect();
    let gaps: Vec<u8> = unique.windows(2).map(|w| w[1] - w[0]).collect();
    let has_connected = gaps.contains(&1);
    let has_one_gap = gaps.contains(&2);

    let connectedness = if has_connected && gaps.iter().filter(|&&g| g <= 2).count() >= 2 {
        Connectedness::Connected
    } else if has_connected || has_one_gap {
        Connectedness::SemiConnected
    } else {
        Connectedness::Disconnected
    };

    let mut wet_score: i32 = match suits {
        SuitPattern::Monotone => 3,
        SuitPattern::TwoTone => 1,
        SuitPattern::Rainbow => 0,
    };
    wet_score += match connectedness {
        Connectedness::Connected => 2,
        Connectedness::SemiConnected => 1,
        Connectedness::Disconnected => 0,
    };
    if is_paired {
        wet_score -= 1;
    }
    let wetness = match wet_score {
        s if s >= 3 => Wetness::Wet,
        s if s >= 1 => Wetness::Medium,
        _ => Wetness::Dry,
    };

    let flush_draw_possible = max_suit >= 2 && board.len() < 5;
    let straight_draw_possible = has_straight_draw(&unique);

    let mut draws = Vec::new();
    if flush_draw_possible && suits == SuitPattern::TwoTone {
        draws.push("flush draw");
    }
    if suits == SuitPattern::Monotone {
        draws.push("flush complete / 4-flush");
    }
    if straight_draw_possible {
        draws.push("straight draw");
    }
    if is_paired {
        draws.push("paired board");
    }

    let high_card = board
        .iter()
        .map(|c| c.value)
        .max()
        .map(|v| v.to_char())
        .unwrap_or('?');
    let mut category = format!("{suits} {connectedness}");
    if is_paired {
        category.push_str(" paired");
    }
    category.push_str(&format!(" {high_card}-high"));

    event!(tracing::Level::TRACE, %category, %wetness, "Analyzed board");

    Ok(BoardTexture {
        cards: board.to_vec(),
        high_card,
        is_paired,
        suits,
        flush_draw_possible,
        straight_draw_possible,
        connectedness,
        wetness,
        category,
        draws,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_board;

    fn texture(board: &str) -> BoardTexture {
        analyze_board(&parse_board(board).unwrap()).unwrap()
    }

    #[test]
    fn test_dry_rainbow() {
        let t = texture("Ks7d2c");
        assert!(t.is_rainbow());
        assert!(!t.is_paired);
        assert_eq!('K', t.high_card);
        assert_eq!(Wetness::Dry, t.wetness);
        assert_eq!(Connectedness::Disconnected, t.connectedness);
        assert!(!t.straight_draw_possible);
        assert!(t.draws.is_empty());
    }

    #[test]
    fn test_monotone_is_wet() {
        let t = texture("Ts8s3s");
        assert!(t.is_monotone());
        assert_eq!(Wetness::Wet, t.wetness);
        assert!(t.draws.contains(&"flush complete / 4-flush"));
    }

    #[test]
    fn test_paired() {
        let t = texture("Ks Kd 7c");
        assert!(t.is_paired);
        assert_eq!("rainbow disconnected paired K-high", t.category);
        assert!(t.draws.contains(&"paired board"));
    }

    #[test]
    fn test_connected() {
        let t = texture("9s8d7c");
        assert_eq!(Connectedness::Connected, t.connectedness);
        assert!(t.straight_draw_possible);
        assert_eq!(Wetness::Medium, t.wetness);
    }

    #[test]
    fn test_two_tone() {
        let t = texture("AsKs7d");
        assert!(t.is_two_tone());
        assert!(t.flush_draw_possible);
        assert!(t.draws.contains(&"flush draw"));
        assert_eq!(Connectedness::SemiConnected, t.connectedness);
    }

    #[test]
    fn test_wheel_draw() {
        let t = texture("Ah4d3c");
        assert!(t.straight_draw_possible);
        assert!(!texture("Ah8d3c").straight_draw_possible);
    }

    #[test]
    fn test_wet_two_tone_connected() {
        let t = texture("Ts9s8d");
        assert_eq!(Wetness::Wet, t.wetness);
        assert_eq!("two-tone connected T-high", t.category);
    }

    #[test]
    fn test_turn_and_river() {
        let turn = texture("As Kd Qh Js");
        assert_eq!(4, turn.cards.len());
        assert!(turn.flush_draw_possible);

        let river = texture("As Kd Qh Js 2s");
        assert!(!river.flush_draw_possible);
        // Three spades but the flop wasn't one suit.
        assert!(river.is_two_tone());
    }

    #[test]
    fn test_bad_boards() {
        assert!(matches!(
            analyze_board(&parse_board("AsKd").unwrap()),
            Err(GtoError::InsufficientCards { need: 3, got: 2 })
        ));
        assert!(matches!(
            analyze_board(&parse_board("AsKdQh2c3c4c").unwrap()),
            Err(GtoError::TooManyCards(6))
        ));
        assert!(matches!(
            analyze_board(&parse_board("AsAsQh").unwrap()),
            Err(GtoError::DuplicateCard(_))
        ));
    }
}
