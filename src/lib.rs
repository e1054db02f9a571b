//! rs_gto is a library for poker decisions.
//!
//! It can find the best five card hand out of up to seven cards and
//! compare two hands with exact tie breaks. It also understands the range
//! notation players use (`"TT+"`, `"ATs-AKs"`), counts combinations and
//! removes the ones blocked by known cards.
//!
//! Postflop it reads board texture and suggests c-bet frequencies and
//! bet sizes, and `math` covers pot odds and stack to pot ratios.
//!
//! With the `serde` feature, on by default, preflop range tables can be
//! loaded from JSON files.

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
/// Board texture and postflop betting heuristics.
pub mod postflop;
/// Pot odds, defense frequencies and stack math.
pub mod math;
/// Preflop charts keyed by table size and position.
#[cfg(feature = "serde")]
pub mod preflop;
