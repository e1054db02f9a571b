use std::fmt;

use crate::core::Value;
use crate::holdem::{HandClass, Range, Suitedness};

const CELL_WIDTH: usize = 4;

/// Chart view over a range.
struct RangeGrid<'a> {
    range: &'a Range,
    title: &'a str,
}

impl RangeGrid<'_> {
    /// Class in row `row`, column `col`, where both count down from the ace.
    fn class_at(values: &[Value], row: usize, col: usize) -> HandClass {
        match row.cmp(&col) {
            std::cmp::Ordering::Equal => {
                HandClass::new(values[row], values[col], Suitedness::OffSuit)
            }
            std::cmp::Ordering::Less => {
                HandClass::new(values[row], values[col], Suitedness::Suited)
            }
            std::cmp::Ordering::Greater => {
                HandClass::new(values[col], values[row], Suitedness::OffSuit)
            }
        }
    }
}

impl fmt::Display for RangeGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<Value> = Value::values().into_iter().rev().collect();
        if !self.title.is_empty() {
            writeln!(f, "{}", self.title)?;
        }

        let mut line = String::from("   ");
        for v in &values {
            line.push_str(&format!("{:<CELL_WIDTH$}", v.to_char()));
        }
        writeln!(f, "{}", line.trim_end())?;

        for (row, value) in values.iter().enumerate() {
            let mut line = format!("{}  ", value.to_char());
            for col in 0..values.len() {
                let class = Self::class_at(&values, row, col).to_string();
                let cell = if self.range.contains(&class) {
                    class.as_str()
                } else {
                    "."
                };
                line.push_str(&format!("{cell:<CELL_WIDTH$}"));
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        write!(
            f,
            "{} combos ({:.1}%)",
            self.range.total_combos(),
            self.range.pct()
        )
    }
}

/// Render a range as a 13x13 chart with the aces in the top left.
///
/// Pairs run down the diagonal, suited hands sit above it and off suit
/// hands below it. Hands in the range are written out and the rest show
/// as `.`. The last line gives the number of combinations and the share
/// of all starting hands.
///
/// ```
/// use rs_gto::holdem::{parse_range, range_grid};
///
/// let grid = range_grid(&parse_range("AA,AKs"), "Premium");
/// assert!(grid.starts_with("Premium\n"));
/// assert!(grid.ends_with("10 combos (0.8%)"));
/// ```
pub fn range_grid(range: &Range, title: &str) -> String {
    RangeGrid { range, title }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdem::parse_range;

    #[test]
    fn test_layout() {
        let grid = range_grid(&parse_range("AA,AKs,AKo,72o"), "Test");
        let lines: Vec<&str> = grid.lines().collect();
        // Title, header, 13 rows and the footer.
        assert_eq!(16, lines.len());
        assert_eq!("Test", lines[0]);
        assert!(lines[1].starts_with("   A   K   Q"));
        assert!(lines[2].starts_with("A  AA  AKs"));
        assert!(lines[3].starts_with("K  AKo ."));
        // 72o is in the deuce row under the seven column.
        assert!(lines[14].starts_with("2  .   .   .   .   .   .   .   72o"));
        assert!(lines[9].starts_with("7  "));
        assert!(lines[9].ends_with('.'));
        assert_eq!("34 combos (2.6%)", lines[15]);
    }

    #[test]
    fn test_empty_range() {
        let grid = range_grid(&Range::new(), "");
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(15, lines.len());
        assert!(lines[1..14].iter().all(|l| !l.contains('s') && !l.contains('o')));
        assert_eq!("0 combos (0.0%)", lines[14]);
    }

    #[test]
    fn test_every_cell_is_unique() {
        let values: Vec<Value> = Value::values().into_iter().rev().collect();
        let mut seen = std::collections::HashSet::new();
        for row in 0..13 {
            for col in 0..13 {
                assert!(seen.insert(RangeGrid::class_at(&values, row, col)));
            }
        }
        assert_eq!(169, seen.len());
    }

    #[test]
    fn test_garbage_not_drawn() {
        let grid = range_grid(&parse_range("zz"), "");
        assert!(!grid.contains("zz"));
    }
}
