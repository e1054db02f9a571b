use tracing::event;

use crate::core::Value;
use crate::holdem::Range;
use crate::holdem::starting_hand::notation_value;

/// One end of a plus or dash range.
#[derive(Debug, PartialEq)]
enum Endpoint {
    /// A pocket pair like `TT`.
    Pair(Value),
    /// A fixed high card with a kicker like `ATs`. The kind char is kept
    /// as it was written.
    Kicker { high: Value, low: Value, kind: char },
}

impl Endpoint {
    fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            [a, b] if a == b => notation_value(*a).map(Endpoint::Pair),
            [h, l, kind] => Some(Endpoint::Kicker {
                high: notation_value(*h)?,
                low: notation_value(*l)?,
                kind: *kind,
            }),
            _ => None,
        }
    }
}

/// What kind of term was found between the commas.
#[derive(Debug)]
enum Modifier<'a> {
    /// `TT+` or `ATs+`
    Plus(&'a str),
    /// `77-TT` or `KTs-KQs`
    Range(&'a str, &'a str),
    /// Anything else is taken as written.
    Literal,
}

impl<'a> Modifier<'a> {
    fn from_term(term: &'a str) -> Self {
        if let Some(base) = term.strip_suffix('+') {
            return Modifier::Plus(base);
        }
        if term.contains('-') && term.chars().count() > 3 {
            let mut parts = term.split('-');
            if let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) {
                return Modifier::Range(start, end);
            }
        }
        Modifier::Literal
    }
}

fn pair_name(v: Value) -> String {
    format!("{0}{0}", v.to_char())
}

fn kicker_name(high: Value, low: Value, kind: char) -> String {
    format!("{}{}{}", high.to_char(), low.to_char(), kind)
}

/// Values from `start` to `end` inclusive, in either order.
fn values_between(start: Value, end: Value) -> impl Iterator<Item = Value> {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    Value::values()
        .into_iter()
        .filter(move |v| *v >= lo && *v <= hi)
}

pub struct RangeParser;

impl RangeParser {
    /// Parse a whole range expression like `"TT+, AJs-AKs, KQo"`.
    ///
    /// Whitespace is ignored and terms are split on commas. The result
    /// has no duplicates and is sorted strongest first. Terms that can't
    /// be understood are kept as written rather than failing the parse.
    ///
    /// ```
    /// use rs_gto::holdem::RangeParser;
    ///
    /// let range = RangeParser::parse("TT+");
    /// assert_eq!(vec!["AA", "KK", "QQ", "JJ", "TT"], range.as_slice());
    /// ```
    pub fn parse(range_str: &str) -> Range {
        let cleaned: String = range_str.chars().filter(|c| !c.is_whitespace()).collect();
        cleaned
            .split(',')
            .filter(|term| !term.is_empty())
            .flat_map(Self::parse_term)
            .collect()
    }

    /// Expand a single term into the hand classes it stands for.
    ///
    /// The classes come back in the order they were generated, weakest
    /// kicker first, with no sorting.
    pub fn parse_term(term: &str) -> Vec<String> {
        let expanded = match Modifier::from_term(term) {
            Modifier::Plus(base) => Self::expand_plus(base),
            Modifier::Range(start, end) => Self::expand_dash(start, end),
            Modifier::Literal => return vec![term.to_string()],
        };
        expanded.unwrap_or_else(|| {
            event!(
                tracing::Level::TRACE,
                term,
                "Unrecognized range term kept as written"
            );
            vec![term.to_string()]
        })
    }

    /// `TT+` is every pair from tens up. `ATs+` keeps the ace and kind and
    /// walks the kicker up to, but not including, the ace.
    fn expand_plus(base: &str) -> Option<Vec<String>> {
        match Endpoint::parse(base)? {
            Endpoint::Pair(v) => Some(values_between(v, Value::Ace).map(pair_name).collect()),
            Endpoint::Kicker { high, low, kind } => Some(
                Value::values()
                    .into_iter()
                    .filter(|v| *v >= low && *v < high)
                    .map(|v| kicker_name(high, v, kind))
                    .collect(),
            ),
        }
    }

    /// Both ends have to be the same shape: two pairs, or two hands with
    /// the same high card and kind.
    fn expand_dash(start: &str, end: &str) -> Option<Vec<String>> {
        match (Endpoint::parse(start)?, Endpoint::parse(end)?) {
            (Endpoint::Pair(a), Endpoint::Pair(b)) => {
                Some(values_between(a, b).map(pair_name).collect())
            }
            (
                Endpoint::Kicker {
                    high,
                    low: a,
                    kind,
                },
                Endpoint::Kicker {
                    high: end_high,
                    low: b,
                    kind: end_kind,
                },
            ) if high == end_high && kind == end_kind => {
                Some(values_between(a, b).map(|v| kicker_name(high, v, kind)).collect())
            }
            _ => None,
        }
    }
}

/// Shorthand for `RangeParser::parse`.
pub fn parse_range(range_str: &str) -> Range {
    RangeParser::parse(range_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(range: &Range) -> Vec<&str> {
        let mut v: Vec<&str> = range.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_simple() {
        let range = RangeParser::parse("AA,KK,QQ");
        assert_eq!(vec!["AA", "KK", "QQ"], range.as_slice());
    }

    #[test]
    fn test_plus_pairs() {
        let range = RangeParser::parse("TT+");
        assert_eq!(vec!["AA", "JJ", "KK", "QQ", "TT"], set(&range));
        assert!(!range.contains("99"));
    }

    #[test]
    fn test_plus_suited() {
        let range = RangeParser::parse("ATs+");
        assert_eq!(vec!["AJs", "AKs", "AQs", "ATs"], set(&range));
        assert!(!range.contains("A9s"));
    }

    #[test]
    fn test_plus_offsuit() {
        let range = RangeParser::parse("K9o+");
        assert_eq!(vec!["K9o", "KJo", "KQo", "KTo"], set(&range));
    }

    #[test]
    fn test_plus_at_top() {
        assert_eq!(vec!["AKs"], RangeParser::parse("AKs+").as_slice());
        assert_eq!(vec!["AA"], RangeParser::parse("AA+").as_slice());
    }

    #[test]
    fn test_plus_inverted_is_empty() {
        assert!(RangeParser::parse("KAs+").is_empty());
    }

    #[test]
    fn test_dash_pairs() {
        let range = RangeParser::parse("77-TT");
        assert_eq!(vec!["77", "88", "99", "TT"], set(&range));
        assert!(!range.contains("66"));
        assert!(!range.contains("JJ"));
    }

    #[test]
    fn test_dash_reversed() {
        assert_eq!(
            RangeParser::parse("77-TT").as_slice(),
            RangeParser::parse("TT-77").as_slice()
        );
    }

    #[test]
    fn test_dash_suited() {
        let range = RangeParser::parse("KTs-KQs");
        assert_eq!(vec!["KJs", "KQs", "KTs"], set(&range));
        assert!(!range.contains("K9s"));
    }

    #[test]
    fn test_dash_mismatched_shape() {
        // Different high cards can't be interpolated.
        assert_eq!(vec!["ATs-KQs"], RangeParser::parse("ATs-KQs").as_slice());
        assert_eq!(vec!["77-AKs"], RangeParser::parse("77-AKs").as_slice());
        assert_eq!(vec!["ATs-AQo"], RangeParser::parse("ATs-AQo").as_slice());
    }

    #[test]
    fn test_mixed() {
        let range = RangeParser::parse("QQ+, AKs, AKo");
        assert_eq!(vec!["AA", "KK", "QQ", "AKs", "AKo"], range.as_slice());
    }

    #[test]
    fn test_sorted_by_strength() {
        let range = RangeParser::parse("22,AA,72o,AKs");
        assert_eq!(vec!["AA", "AKs", "22", "72o"], range.as_slice());
    }

    #[test]
    fn test_duplicates_removed() {
        let range = RangeParser::parse("TT+,JJ,QQ-KK");
        assert_eq!(5, range.len());
    }

    #[test]
    fn test_whitespace_and_empty_terms() {
        let range = RangeParser::parse(" AA ,\tKK,, ");
        assert_eq!(vec!["AA", "KK"], range.as_slice());
        assert!(RangeParser::parse("").is_empty());
    }

    #[test_log::test]
    fn test_garbage_passes_through() {
        let range = RangeParser::parse("zz,AA,XY+,A-K,Q");
        // Known classes first, then the rest in the order they were seen.
        assert_eq!(vec!["AA", "zz", "XY+", "A-K", "Q"], range.as_slice());
    }

    #[test]
    fn test_parse_term_order() {
        assert_eq!(
            vec!["99", "TT", "JJ", "QQ", "KK", "AA"],
            RangeParser::parse_term("99+")
        );
        assert_eq!(
            vec!["ATs", "AJs", "AQs", "AKs"],
            RangeParser::parse_term("ATs+")
        );
    }
}
