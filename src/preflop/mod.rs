//! Preflop charts read from JSON range files.
//!
//! Each table size has its own file, `ranges_6max.json` or
//! `ranges_9max.json`, holding opening ranges, responses to opens and
//! three bets, squeezes and big blind defense. Range entries are written
//! in the usual notation and expanded when the file is read.

/// Chart types and lookups.
mod table;
pub use self::table::{
    OpenRange, PreflopAction, PreflopDecision, PreflopTable, Situation, TableSize, Vs3BetRanges,
    VsRfiRanges,
};

/// Lazily loaded tables.
mod cache;
pub use self::cache::RangeTableCache;
