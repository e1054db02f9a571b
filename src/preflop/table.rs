use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::event;

use crate::core::{GtoError, parse_board};
use crate::holdem::{Range, parse_range, simplify_hand};

const POSITIONS_6MAX: [&str; 6] = ["UTG", "HJ", "CO", "BTN", "SB", "BB"];
const POSITIONS_9MAX: [&str; 9] = ["UTG", "UTG1", "UTG2", "MP", "HJ", "CO", "BTN", "SB", "BB"];

/// How many seats the charts were made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableSize {
    SixMax,
    NineMax,
}

impl TableSize {
    /// The key used in file names and at the top of the JSON.
    pub fn key(&self) -> &'static str {
        match self {
            TableSize::SixMax => "6max",
            TableSize::NineMax => "9max",
        }
    }

    /// Seats in acting order preflop.
    pub fn positions(&self) -> &'static [&'static str] {
        match self {
            TableSize::SixMax => &POSITIONS_6MAX,
            TableSize::NineMax => &POSITIONS_9MAX,
        }
    }

    pub fn file_name(&self) -> String {
        format!("ranges_{}.json", self.key())
    }
}

impl fmt::Display for TableSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TableSize {
    type Err = GtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "6max" | "6" => Ok(TableSize::SixMax),
            "9max" | "9" => Ok(TableSize::NineMax),
            _ => Err(GtoError::InvalidTableSize(s.to_string())),
        }
    }
}

/// The spot the hero is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Situation {
    /// Nobody has raised yet.
    Rfi,
    /// Someone opened in front of us.
    VsRfi,
    /// We opened and got three bet.
    Vs3Bet,
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Situation::Rfi => "RFI",
            Situation::VsRfi => "vs_RFI",
            Situation::Vs3Bet => "vs_3bet",
        })
    }
}

impl FromStr for Situation {
    type Err = GtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "rfi" => Ok(Situation::Rfi),
            "vs_rfi" => Ok(Situation::VsRfi),
            "vs_3bet" => Ok(Situation::Vs3Bet),
            _ => Err(GtoError::InvalidSituation(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PreflopAction {
    Raise,
    ThreeBet,
    FourBet,
    Call,
    Fold,
}

impl fmt::Display for PreflopAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PreflopAction::Raise => "RAISE",
            PreflopAction::ThreeBet => "3BET",
            PreflopAction::FourBet => "4BET",
            PreflopAction::Call => "CALL",
            PreflopAction::Fold => "FOLD",
        })
    }
}

/// What to do with a hand, and a short reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreflopDecision {
    pub action: PreflopAction,
    pub hand: String,
    pub position: String,
    pub detail: String,
}

impl fmt::Display for PreflopDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} from {}: {}", self.action, self.hand, self.position, self.detail)
    }
}

/// Range entries can be a list of expressions or one comma separated
/// string. Either way they go through the range parser.
#[derive(Deserialize)]
#[serde(untagged)]
enum RangeEntries {
    One(String),
    Many(Vec<String>),
}

fn expand_range<'de, D>(deserializer: D) -> Result<Range, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RangeEntries::deserialize(deserializer)? {
        RangeEntries::One(expr) => parse_range(&expr),
        RangeEntries::Many(exprs) => parse_range(&exprs.join(",")),
    })
}

/// Opening range for one seat.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OpenRange {
    #[serde(default, deserialize_with = "expand_range")]
    pub raise: Range,
    /// Share of hands opened, as written in the chart.
    #[serde(default)]
    pub open_pct: f64,
}

/// How to continue against an open.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VsRfiRanges {
    #[serde(default, deserialize_with = "expand_range")]
    pub call: Range,
    #[serde(rename = "3bet", default, deserialize_with = "expand_range")]
    pub three_bet: Range,
    /// Free text note on folding, if the chart has one.
    #[serde(default)]
    pub fold: Option<String>,
}

/// How to continue against a three bet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Vs3BetRanges {
    #[serde(default, deserialize_with = "expand_range")]
    pub call: Range,
    #[serde(rename = "4bet", default, deserialize_with = "expand_range")]
    pub four_bet: Range,
    #[serde(default)]
    pub fold: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct SqueezeRanges {
    #[serde(default, deserialize_with = "expand_range")]
    squeeze: Range,
}

/// Every chart for one table size.
///
/// Keys follow the layout of the JSON files: `"BTN"` for opens,
/// `"BB_vs_BTN"` for facing an open or a three bet, `"BB_vs_CO_BTN"` for
/// squeezes and `"vs_BTN"` for big blind defense.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreflopTable {
    #[serde(rename = "RFI", default)]
    rfi: BTreeMap<String, OpenRange>,
    #[serde(rename = "vs_RFI", default)]
    vs_rfi: BTreeMap<String, VsRfiRanges>,
    #[serde(default)]
    vs_3bet: BTreeMap<String, Vs3BetRanges>,
    #[serde(default)]
    squeeze: BTreeMap<String, SqueezeRanges>,
    #[serde(default)]
    bb_defense: BTreeMap<String, VsRfiRanges>,
}

impl PreflopTable {
    /// Parse a range file. The file is an object keyed by table size, and
    /// only the entry for `size` is kept.
    pub fn from_json(json: &str, size: TableSize) -> Result<Self, GtoError> {
        let mut tables: BTreeMap<String, PreflopTable> = serde_json::from_str(json)?;
        tables
            .remove(size.key())
            .ok_or_else(|| GtoError::RangeDataNotFound(size.key().to_string()))
    }

    /// Read `ranges_{size}.json` from `dir`.
    pub fn load(dir: &Path, size: TableSize) -> Result<Self, GtoError> {
        let path = dir.join(size.file_name());
        if !path.exists() {
            event!(
                tracing::Level::WARN,
                path = %path.display(),
                "No range data for table size {}",
                size
            );
            return Err(GtoError::RangeDataNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(&path)?;
        let table = Self::from_json(&json, size)?;
        event!(
            tracing::Level::DEBUG,
            path = %path.display(),
            open_seats = table.rfi.len(),
            "Loaded {} range table",
            size
        );
        Ok(table)
    }

    /// Hands to open from `position`.
    pub fn rfi_range(&self, position: &str) -> Option<&Range> {
        self.rfi.get(position).map(|o| &o.raise)
    }

    /// The opening percentage written in the chart.
    pub fn rfi_pct(&self, position: &str) -> Option<f64> {
        self.rfi.get(position).map(|o| o.open_pct)
    }

    /// Ranges for `hero` facing an open from `villain`. The big blind falls
    /// back to its defense chart when there's no specific entry.
    pub fn vs_rfi(&self, hero: &str, villain: &str) -> Option<&VsRfiRanges> {
        self.vs_rfi
            .get(&format!("{hero}_vs_{villain}"))
            .or_else(|| {
                if hero == "BB" {
                    self.bb_defense(villain)
                } else {
                    None
                }
            })
    }

    /// Ranges for `hero` facing a three bet from `villain`, falling back to
    /// the hero's catch all `"{hero}_vs_any"` entry.
    pub fn vs_3bet(&self, hero: &str, villain: &str) -> Option<&Vs3BetRanges> {
        self.vs_3bet
            .get(&format!("{hero}_vs_{villain}"))
            .or_else(|| self.vs_3bet.get(&format!("{hero}_vs_any")))
    }

    /// Squeeze range for `hero` after `raiser` opened and `caller` called.
    /// Without an exact entry the first of the hero's squeeze entries, in
    /// key order, is used.
    pub fn squeeze_range(&self, hero: &str, raiser: &str, caller: &str) -> Option<&Range> {
        let prefix = format!("{hero}_vs_");
        self.squeeze
            .get(&format!("{hero}_vs_{raiser}_{caller}"))
            .or_else(|| {
                self.squeeze
                    .iter()
                    .find(|(key, _)| key.starts_with(&prefix))
                    .map(|(_, v)| v)
            })
            .map(|s| &s.squeeze)
    }

    /// Big blind defense against an open from `villain`.
    pub fn bb_defense(&self, villain: &str) -> Option<&VsRfiRanges> {
        self.bb_defense.get(&format!("vs_{villain}"))
    }

    /// Look up what the charts say to do with `hand` from `position`.
    ///
    /// `hand` is a class like `"AKs"` or two cards like `"AhKh"`. Facing an
    /// open or a three bet needs the villain's seat. A hand the charts
    /// don't list, or a spot with no chart, is a fold.
    pub fn action(
        &self,
        hand: &str,
        position: &str,
        situation: Situation,
        villain: Option<&str>,
    ) -> Result<PreflopDecision, GtoError> {
        let hand = hand_class(hand);
        let decide = |action: PreflopAction, detail: String| PreflopDecision {
            action,
            hand: hand.clone(),
            position: position.to_string(),
            detail,
        };

        let decision = match situation {
            Situation::Rfi => {
                if self.rfi_range(position).is_some_and(|r| r.contains(&hand)) {
                    decide(PreflopAction::Raise, format!("Open raise from {position}"))
                } else {
                    decide(PreflopAction::Fold, format!("Not in {position} opening range"))
                }
            }
            Situation::VsRfi => {
                let villain = villain.ok_or(GtoError::MissingVillain)?;
                match self.vs_rfi(position, villain) {
                    Some(r) if r.three_bet.contains(&hand) => {
                        decide(PreflopAction::ThreeBet, format!("3-bet vs {villain} open"))
                    }
                    Some(r) if r.call.contains(&hand) => {
                        decide(PreflopAction::Call, format!("Call {villain} open"))
                    }
                    _ => decide(PreflopAction::Fold, format!("Fold vs {villain} open")),
                }
            }
            Situation::Vs3Bet => {
                let villain = villain.ok_or(GtoError::MissingVillain)?;
                match self.vs_3bet(position, villain) {
                    Some(r) if r.four_bet.contains(&hand) => {
                        decide(PreflopAction::FourBet, format!("4-bet vs {villain} 3-bet"))
                    }
                    Some(r) if r.call.contains(&hand) => {
                        decide(PreflopAction::Call, format!("Call {villain} 3-bet"))
                    }
                    _ => decide(PreflopAction::Fold, format!("Fold vs {villain} 3-bet")),
                }
            }
        };
        Ok(decision)
    }
}

/// Two concrete cards become their class. Anything else is used as is.
fn hand_class(hand: &str) -> String {
    let hand = hand.trim();
    if hand.chars().count() == 4 {
        if let Ok(class) = parse_board(hand).and_then(|cards| simplify_hand(&cards)) {
            return class;
        }
    }
    hand.to_string()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const SIX_MAX: &str = r#"{
        "6max": {
            "RFI": {
                "UTG": {"raise": ["77+", "ATs+", "KQs", "AQo+"], "open_pct": 12},
                "BTN": {"raise": "22+,A2s+,K9s+,ATo+", "open_pct": 45.5}
            },
            "vs_RFI": {
                "BTN_vs_UTG": {"call": ["99-JJ", "AQs"], "3bet": ["QQ+", "AKs"], "fold": "default"}
            },
            "vs_3bet": {
                "UTG_vs_BTN": {"call": ["JJ-QQ"], "4bet": ["KK+"]},
                "CO_vs_any": {"call": ["TT"], "4bet": ["AA"]}
            },
            "squeeze": {
                "SB_vs_CO_BTN": {"squeeze": ["QQ+"]},
                "SB_vs_BTN_BB": {"squeeze": ["TT+", "AKs"]},
                "BB_vs_HJ_CO": {"squeeze": ["KK+"]}
            },
            "bb_defense": {
                "vs_BTN": {"call": ["22-99", "A2s-A9s"], "3bet": ["TT+"]}
            }
        }
    }"#;

    fn table() -> PreflopTable {
        PreflopTable::from_json(SIX_MAX, TableSize::SixMax).unwrap()
    }

    #[test]
    fn test_table_size() {
        assert_eq!(6, TableSize::SixMax.positions().len());
        assert_eq!(9, TableSize::NineMax.positions().len());
        assert_eq!("ranges_9max.json", TableSize::NineMax.file_name());
        assert_eq!(TableSize::SixMax, "6max".parse().unwrap());
        assert!("7max".parse::<TableSize>().is_err());
    }

    #[test]
    fn test_situation_parse() {
        assert_eq!(Situation::VsRfi, "vs_RFI".parse().unwrap());
        assert_eq!(Situation::Vs3Bet, "vs-3bet".parse().unwrap());
        assert_eq!(Situation::Rfi, "rfi".parse().unwrap());
        assert!("limp".parse::<Situation>().is_err());
    }

    #[test]
    fn test_rfi_expands_ranges() {
        let table = table();
        let utg = table.rfi_range("UTG").unwrap();
        assert!(utg.contains("77"));
        assert!(utg.contains("AA"));
        assert!(utg.contains("AJs"));
        assert!(!utg.contains("66"));
        assert_eq!(Some("AA"), utg.iter().next().map(String::as_str));

        // A single string works too.
        assert!(table.rfi_range("BTN").unwrap().contains("K9s"));

        assert_relative_eq!(12.0, table.rfi_pct("UTG").unwrap());
        assert_relative_eq!(45.5, table.rfi_pct("BTN").unwrap());
        assert!(table.rfi_range("HJ").is_none());
    }

    #[test]
    fn test_vs_rfi_and_bb_fallback() {
        let table = table();
        let btn = table.vs_rfi("BTN", "UTG").unwrap();
        assert!(btn.call.contains("TT"));
        assert_eq!(Some("default"), btn.fold.as_deref());

        let bb = table.vs_rfi("BB", "BTN").unwrap();
        assert!(bb.three_bet.contains("TT"));
        assert!(bb.call.contains("A5s"));
        assert!(bb.fold.is_none());

        assert!(table.vs_rfi("SB", "BTN").is_none());
        assert!(table.vs_rfi("BB", "UTG").is_none());
    }

    #[test]
    fn test_vs_3bet_generic() {
        let table = table();
        assert!(table.vs_3bet("UTG", "BTN").unwrap().four_bet.contains("KK"));
        assert!(table.vs_3bet("CO", "SB").unwrap().call.contains("TT"));
        assert!(table.vs_3bet("HJ", "SB").is_none());
    }

    #[test]
    fn test_squeeze_fallback() {
        let table = table();
        let exact = table.squeeze_range("SB", "BTN", "BB").unwrap();
        assert!(exact.contains("AKs"));
        // First SB entry by key is SB_vs_BTN_BB.
        let fallback = table.squeeze_range("SB", "UTG", "HJ").unwrap();
        assert_eq!(exact, fallback);
        assert!(table.squeeze_range("BTN", "UTG", "CO").is_none());
    }

    #[test]
    fn test_action_rfi() {
        let table = table();
        let d = table.action("AKs", "UTG", Situation::Rfi, None).unwrap();
        assert_eq!(PreflopAction::Raise, d.action);
        assert_eq!("Open raise from UTG", d.detail);

        let d = table.action("72o", "UTG", Situation::Rfi, None).unwrap();
        assert_eq!(PreflopAction::Fold, d.action);

        // Concrete cards are turned into their class.
        let d = table.action("KhQh", "UTG", Situation::Rfi, None).unwrap();
        assert_eq!("KQs", d.hand);
        assert_eq!(PreflopAction::Raise, d.action);
    }

    #[test]
    fn test_action_facing_raises() {
        let table = table();
        let vs = |hand, pos, situation, villain| {
            table.action(hand, pos, situation, Some(villain)).unwrap().action
        };
        assert_eq!(PreflopAction::ThreeBet, vs("KK", "BTN", Situation::VsRfi, "UTG"));
        assert_eq!(PreflopAction::Call, vs("AQs", "BTN", Situation::VsRfi, "UTG"));
        assert_eq!(PreflopAction::Fold, vs("72o", "BTN", Situation::VsRfi, "UTG"));
        assert_eq!(PreflopAction::Call, vs("55", "BB", Situation::VsRfi, "BTN"));
        assert_eq!(PreflopAction::FourBet, vs("AA", "UTG", Situation::Vs3Bet, "BTN"));
        assert_eq!(PreflopAction::Call, vs("QQ", "UTG", Situation::Vs3Bet, "BTN"));
        assert_eq!(PreflopAction::Fold, vs("AKo", "HJ", Situation::Vs3Bet, "BTN"));
    }

    #[test]
    fn test_action_missing_villain() {
        let table = table();
        for situation in [Situation::VsRfi, Situation::Vs3Bet] {
            assert!(matches!(
                table.action("AA", "BTN", situation, None),
                Err(GtoError::MissingVillain)
            ));
        }
    }

    #[test]
    fn test_missing_size_in_file() {
        assert!(matches!(
            PreflopTable::from_json(SIX_MAX, TableSize::NineMax),
            Err(GtoError::RangeDataNotFound(_))
        ));
        assert!(matches!(
            PreflopTable::from_json("{not json", TableSize::SixMax),
            Err(GtoError::Json(_))
        ));
    }

    #[test]
    fn test_empty_sections() {
        let table = PreflopTable::from_json(r#"{"9max": {}}"#, TableSize::NineMax).unwrap();
        assert_eq!(PreflopTable::default(), table);
        let d = table.action("AA", "UTG", Situation::Rfi, None).unwrap();
        assert_eq!(PreflopAction::Fold, d.action);
    }
}
