use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// rs_gto library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug)]
pub enum GtoError {
    #[error("Unable to parse card value '{0}'")]
    InvalidCardValue(char),
    #[error("Unable to parse card suit '{0}'")]
    InvalidCardSuit(char),
    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),
    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),
    #[error("Card used more than once {0}")]
    DuplicateCard(Card),
    #[error("Need at least {need} cards, got {got}")]
    InsufficientCards { need: usize, got: usize },
    #[error("Holdem hands should never have more than 7 cards in them, got {0}")]
    TooManyCards(usize),
    #[error("Percentage must be in (0, 100], got {0}")]
    OutOfRange(f64),
    #[error("Invalid hand notation: {0}")]
    InvalidHandNotation(String),
    #[error("A starting hand must be exactly 2 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Cannot deal {requested} cards, only {available} remaining")]
    NotEnoughCards { requested: usize, available: usize },
    #[error("No range data for: {0}")]
    RangeDataNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Need at least 2 stacks, got {0}")]
    NotEnoughStacks(usize),
    #[error("Unknown {kind}: {value}")]
    InvalidChoice { kind: &'static str, value: String },
    #[error("Unknown table size: {0}")]
    InvalidTableSize(String),
    #[error("Unknown preflop situation: {0}")]
    InvalidSituation(String),
    #[error("A villain position is required for this situation")]
    MissingVillain,
    #[error("Unable to read range data")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("Unable to parse range data")]
    Json(#[from] serde_json::Error),
}
