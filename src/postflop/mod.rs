//! Postflop heuristics: read the board, then decide whether and how
//! much to bet.

/// Board texture reading.
mod texture;
pub use self::texture::{BoardTexture, Connectedness, SuitPattern, Wetness, analyze_board};

/// C-bet, sizing and per-street plans.
mod strategy;
pub use self::strategy::{
    CbetAdvice, HandStrength, Position, Street, StreetAction, StreetPlan, bet_sizing,
    cbet_recommendation, street_strategy,
};
