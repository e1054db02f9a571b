use std::fmt;
use std::str::FromStr;

use tracing::event;

use crate::core::GtoError;

use super::texture::{BoardTexture, Wetness};

/// Whether hero acts last on the street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    InPosition,
    OutOfPosition,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::InPosition => "IP",
            Position::OutOfPosition => "OOP",
        })
    }
}

impl FromStr for Position {
    type Err = GtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IP" => Ok(Position::InPosition),
            "OOP" => Ok(Position::OutOfPosition),
            _ => Err(GtoError::InvalidChoice {
                kind: "position",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    /// The street a board of this many cards is on.
    pub fn from_board_len(len: usize) -> Option<Self> {
        match len {
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        })
    }
}

impl FromStr for Street {
    type Err = GtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flop" => Ok(Street::Flop),
            "turn" => Ok(Street::Turn),
            "river" => Ok(Street::River),
            _ => Err(GtoError::InvalidChoice {
                kind: "street",
                value: s.to_string(),
            }),
        }
    }
}

/// Coarse bucket for how good hero's holding is on this board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandStrength {
    Nuts,
    VeryStrong,
    Strong,
    Medium,
    Draw,
    Bluff,
    Weak,
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HandStrength::Nuts => "nuts",
            HandStrength::VeryStrong => "very_strong",
            HandStrength::Strong => "strong",
            HandStrength::Medium => "medium",
            HandStrength::Draw => "draw",
            HandStrength::Bluff => "bluff",
            HandStrength::Weak => "weak",
        })
    }
}

impl FromStr for HandStrength {
    type Err = GtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "nuts" => Ok(HandStrength::Nuts),
            "very_strong" => Ok(HandStrength::VeryStrong),
            "strong" => Ok(HandStrength::Strong),
            "medium" => Ok(HandStrength::Medium),
            "draw" => Ok(HandStrength::Draw),
            "bluff" => Ok(HandStrength::Bluff),
            "weak" => Ok(HandStrength::Weak),
            _ => Err(GtoError::InvalidChoice {
                kind: "hand strength",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreetAction {
    Bet,
    CheckOrBet,
    Check,
    SemiBluff,
    CheckCall,
    Bluff,
    CheckFold,
}

impl fmt::Display for StreetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StreetAction::Bet => "BET",
            StreetAction::CheckOrBet => "CHECK/BET",
            StreetAction::Check => "CHECK",
            StreetAction::SemiBluff => "BET (semi-bluff)",
            StreetAction::CheckCall => "CHECK/CALL",
            StreetAction::Bluff => "BET (bluff)",
            StreetAction::CheckFold => "CHECK/FOLD",
        })
    }
}

/// Whether to continuation bet the flop, and how often.
#[derive(Debug, Clone, PartialEq)]
pub struct CbetAdvice {
    pub should_cbet: bool,
    /// Share of the range that bets, 0 to 1.
    pub frequency: f64,
    pub sizing: &'static str,
    pub reasoning: &'static str,
}

impl fmt::Display for CbetAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.should_cbet { "C-bet" } else { "Check" };
        write!(
            f,
            "{verb} {:.0}% at {}: {}",
            self.frequency * 100.0,
            self.sizing,
            self.reasoning
        )
    }
}

/// A street action for one holding.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetPlan {
    pub action: StreetAction,
    /// `"-"` when the plan doesn't put money in.
    pub sizing: &'static str,
    pub reasoning: String,
}

impl fmt::Display for StreetPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.action, self.sizing, self.reasoning)
    }
}

/// Flop continuation bet advice for the preflop raiser. `_spr` is
/// accepted so callers can pass it along but doesn't move the advice.
pub fn cbet_recommendation(
    texture: &BoardTexture,
    position: Position,
    _spr: f64,
    multiway: bool,
) -> CbetAdvice {
    let ip = position == Position::InPosition;
    let (should_cbet, frequency, sizing, reasoning) = match (multiway, texture.wetness, ip) {
        (true, Wetness::Dry, _) => (
            true,
            0.4,
            "33% pot",
            "Multiway dry board: bet small with strong hands and good draws",
        ),
        (true, _, _) => (
            false,
            0.2,
            "50% pot",
            "Multiway wet board: check most of the range, bet only strong hands",
        ),
        (false, Wetness::Dry, true) => (
            true,
            0.7,
            "33% pot",
            "Dry board IP: high frequency small c-bet, range advantage",
        ),
        (false, Wetness::Dry, false) => (
            true,
            0.5,
            "33% pot",
            "Dry board OOP: moderate c-bet frequency, check some strong hands",
        ),
        (false, Wetness::Wet, true) => (
            true,
            0.5,
            "66-75% pot",
            "Wet board IP: polarized c-bet, bigger sizing to charge draws",
        ),
        (false, Wetness::Wet, false) => (
            true,
            0.35,
            "66-75% pot",
            "Wet board OOP: check-heavy, bet strong hands and draws",
        ),
        (false, Wetness::Medium, true) => (
            true,
            0.6,
            "50% pot",
            "Medium texture IP: balanced c-bet with medium sizing",
        ),
        (false, Wetness::Medium, false) => (
            true,
            0.45,
            "50% pot",
            "Medium texture OOP: mixed strategy, check more often",
        ),
    };
    CbetAdvice {
        should_cbet,
        frequency,
        sizing,
        reasoning,
    }
}

/// Bet size for a street as a share of the pot.
pub fn bet_sizing(
    texture: &BoardTexture,
    spr: f64,
    street: Street,
    polarized: bool,
) -> &'static str {
    if polarized {
        return match street {
            Street::River => "75-125% pot",
            _ => "66-75% pot",
        };
    }
    if spr <= 4.0 {
        return "33-50% pot (low SPR: pot commitment)";
    }
    match (street, texture.wetness) {
        (Street::Flop, Wetness::Dry) => "25-33% pot",
        (Street::Flop, Wetness::Wet) => "66-75% pot",
        (Street::Flop, Wetness::Medium) => "50% pot",
        (Street::Turn, Wetness::Dry) => "50% pot",
        (Street::Turn, _) => "66-75% pot",
        (Street::River, _) => "66-75% pot",
    }
}

/// What to do with a holding of the given strength. SPR falls back to
/// 10 when the pot is empty.
pub fn street_strategy(
    strength: HandStrength,
    texture: &BoardTexture,
    pot: f64,
    stack: f64,
    position: Position,
    street: Street,
) -> StreetPlan {
    let spr = if pot > 0.0 { stack / pot } else { 10.0 };
    let ip = position == Position::InPosition;
    let wet = texture.wetness == Wetness::Wet;

    let (action, sizing, reasoning) = match strength {
        HandStrength::Nuts | HandStrength::VeryStrong if spr <= 4.0 => (
            StreetAction::Bet,
            "all-in or 66-100% pot",
            "Strong hand + low SPR: get stacks in".to_string(),
        ),
        HandStrength::Nuts | HandStrength::VeryStrong => (
            StreetAction::Bet,
            bet_sizing(texture, spr, street, true),
            "Strong hand: value bet".to_string(),
        ),
        HandStrength::Strong => {
            let reasoning = if wet {
                "Strong hand on wet board: bet for value and protection"
            } else {
                "Strong hand: bet for value"
            };
            (
                StreetAction::Bet,
                bet_sizing(texture, spr, street, false),
                reasoning.to_string(),
            )
        }
        HandStrength::Medium if ip => (
            StreetAction::CheckOrBet,
            "50% pot if betting",
            "Medium hand IP: pot control, bet thin for value sometimes".to_string(),
        ),
        HandStrength::Medium => (
            StreetAction::Check,
            "-",
            "Medium hand OOP: check to control pot size".to_string(),
        ),
        HandStrength::Draw if wet && ip => (
            StreetAction::SemiBluff,
            bet_sizing(texture, spr, street, false),
            "Draw IP on wet board: semi-bluff for fold equity".to_string(),
        ),
        HandStrength::Draw => (
            StreetAction::CheckCall,
            "-",
            "Draw: check and realize equity".to_string(),
        ),
        HandStrength::Bluff => {
            let fold_equity = if stack > 0.0 {
                1.0 - pot / (pot + stack)
            } else {
                0.3
            };
            (
                StreetAction::Bluff,
                bet_sizing(texture, spr, street, true),
                format!("Bluff: need ~{:.0}% fold equity to profit", fold_equity * 100.0),
            )
        }
        HandStrength::Weak => (
            StreetAction::CheckFold,
            "-",
            "Weak hand: check and fold to aggression".to_string(),
        ),
    };

    event!(
        tracing::Level::DEBUG,
        %strength,
        %street,
        %position,
        %action,
        spr,
        "Street plan"
    );

    StreetPlan {
        action,
        sizing,
        reasoning,
    }
}
