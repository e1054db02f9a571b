//! Pot odds and stack math. Amounts are in whatever unit the caller
//! uses (chips or big blinds) as long as it's consistent.

use std::fmt;

use crate::core::GtoError;

fn positive(name: &str, v: f64) -> Result<f64, GtoError> {
    // Also rejects NaN.
    if v > 0.0 {
        Ok(v)
    } else {
        Err(GtoError::InvalidAmount(format!("{name} must be positive, got {v}")))
    }
}

fn non_negative(name: &str, v: f64) -> Result<f64, GtoError> {
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(GtoError::InvalidAmount(format!("{name} must not be negative, got {v}")))
    }
}

/// Equity needed to call `bet` into `pot`, where `pot` already holds
/// villain's bet.
///
/// ```
/// use rs_gto::math::pot_odds;
///
/// // Half pot bet needs 25%.
/// assert_eq!(0.25, pot_odds(100.0, 50.0).unwrap());
/// ```
pub fn pot_odds(pot: f64, bet: f64) -> Result<f64, GtoError> {
    let pot = positive("pot", pot)?;
    let bet = positive("bet", bet)?;
    Ok(bet / (pot + 2.0 * bet))
}

/// Pot odds counting `future` winnings on later streets.
pub fn implied_odds(pot: f64, bet: f64, future: f64) -> Result<f64, GtoError> {
    let pot = non_negative("pot", pot)?;
    let bet = positive("bet", bet)?;
    let future = non_negative("future winnings", future)?;
    Ok(bet / (pot + 2.0 * bet + future))
}

/// Pot odds when `risk` more may be lost later to a better hand.
pub fn reverse_implied_odds(pot: f64, bet: f64, risk: f64) -> Result<f64, GtoError> {
    let pot = non_negative("pot", pot)?;
    let bet = positive("bet", bet)?;
    let risk = non_negative("risk", risk)?;
    Ok((bet + risk) / (pot + 2.0 * bet + risk))
}

/// Expected value of calling `bet` into `pot` with `equity`.
pub fn call_ev(equity: f64, pot: f64, bet: f64) -> Result<f64, GtoError> {
    if !(0.0..=1.0).contains(&equity) {
        return Err(GtoError::OutOfRange(equity));
    }
    Ok(equity * (pot + bet) - (1.0 - equity) * bet)
}

/// Minimum defense frequency: how much of a range must continue so a
/// bet of `bet` into `pot` can't profit with any two cards.
pub fn mdf(bet: f64, pot: f64) -> Result<f64, GtoError> {
    let pot = positive("pot", pot)?;
    let bet = non_negative("bet", bet)?;
    Ok(pot / (pot + bet))
}

/// Expected profit of a pure bluff that gets folds `fold_pct` of the
/// time.
pub fn fold_equity(fold_pct: f64, pot: f64, bet: f64) -> Result<f64, GtoError> {
    if !(0.0..=1.0).contains(&fold_pct) {
        return Err(GtoError::OutOfRange(fold_pct));
    }
    Ok(fold_pct * pot - (1.0 - fold_pct) * bet)
}

/// How often a bluff of `bet` into `pot` has to work to break even.
pub fn break_even_pct(pot: f64, bet: f64) -> Result<f64, GtoError> {
    let pot = non_negative("pot", pot)?;
    let bet = non_negative("bet", bet)?;
    positive("pot plus bet", pot + bet)?;
    Ok(bet / (pot + 2.0 * bet))
}

/// Share of a polarized betting range that can be bluffs.
pub fn bluff_ratio(bet: f64, pot: f64) -> Result<f64, GtoError> {
    let pot = non_negative("pot", pot)?;
    let bet = non_negative("bet", bet)?;
    let total = positive("pot plus bet", pot + bet)?;
    Ok(bet / total)
}

/// The second largest stack. Nobody can win or lose more than that.
pub fn effective_stack(stacks: &[f64]) -> Result<f64, GtoError> {
    if stacks.len() < 2 {
        return Err(GtoError::NotEnoughStacks(stacks.len()));
    }
    for &s in stacks {
        non_negative("stack", s)?;
    }
    let mut sorted = stacks.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    Ok(sorted[1])
}

/// Stack to pot ratio bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SprZone {
    /// Four or under.
    Low,
    /// Ten or under.
    Medium,
    High,
}

impl SprZone {
    pub fn guidance(&self) -> &'static str {
        match self {
            SprZone::Low => "Commit with top pair+. All-in pressure is standard.",
            SprZone::Medium => "Two pair+ for stacking. One pair hands play cautiously.",
            SprZone::High => "Need very strong hands to stack off. Implied odds matter most.",
        }
    }
}

impl fmt::Display for SprZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SprZone::Low => "low",
            SprZone::Medium => "medium",
            SprZone::High => "high",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Spr {
    pub ratio: f64,
    pub zone: SprZone,
}

impl fmt::Display for Spr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SPR {:.1} ({})", self.ratio, self.zone)
    }
}

/// Stack to pot ratio for `stack` behind and `pot` in the middle.
///
/// ```
/// use rs_gto::math::{SprZone, spr};
///
/// let s = spr(300.0, 100.0).unwrap();
/// assert_eq!(SprZone::Low, s.zone);
/// assert_eq!("SPR 3.0 (low)", s.to_string());
/// ```
pub fn spr(stack: f64, pot: f64) -> Result<Spr, GtoError> {
    let pot = positive("pot", pot)?;
    let stack = non_negative("stack", stack)?;
    let ratio = stack / pot;
    let zone = if ratio <= 4.0 {
        SprZone::Low
    } else if ratio <= 10.0 {
        SprZone::Medium
    } else {
        SprZone::High
    };
    Ok(Spr { ratio, zone })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pot_odds() {
        assert_relative_eq!(0.25, pot_odds(100.0, 50.0).unwrap());
        assert_relative_eq!(1.0 / 3.0, pot_odds(100.0, 100.0).unwrap());
        assert!(matches!(pot_odds(0.0, 50.0), Err(GtoError::InvalidAmount(_))));
        assert!(pot_odds(100.0, -1.0).is_err());
        assert!(pot_odds(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_implied_odds_lower_than_pot_odds() {
        let direct = pot_odds(100.0, 50.0).unwrap();
        let implied = implied_odds(100.0, 50.0, 200.0).unwrap();
        assert_relative_eq!(0.125, implied);
        assert!(implied < direct);
        assert!(implied_odds(100.0, 0.0, 200.0).is_err());
    }

    #[test]
    fn test_reverse_implied_odds() {
        assert_relative_eq!(
            pot_odds(100.0, 50.0).unwrap(),
            reverse_implied_odds(100.0, 50.0, 0.0).unwrap()
        );
        assert!(reverse_implied_odds(100.0, 50.0, 100.0).unwrap() > 0.25);
    }

    #[test]
    fn test_call_ev() {
        // Exactly pot odds breaks even.
        assert_relative_eq!(0.0, call_ev(0.25, 100.0, 50.0).unwrap(), epsilon = 1e-9);
        assert!(call_ev(0.5, 100.0, 50.0).unwrap() > 0.0);
        assert!(matches!(call_ev(1.5, 100.0, 50.0), Err(GtoError::OutOfRange(_))));
    }

    #[test]
    fn test_mdf() {
        assert_relative_eq!(0.5, mdf(100.0, 100.0).unwrap());
        assert_relative_eq!(2.0 / 3.0, mdf(50.0, 100.0).unwrap());
        assert_relative_eq!(1.0, mdf(0.0, 100.0).unwrap());
        assert!(mdf(50.0, 0.0).is_err());
    }

    #[test]
    fn test_fold_equity_and_break_even() {
        let needed = break_even_pct(100.0, 100.0).unwrap();
        assert_relative_eq!(1.0 / 3.0, needed);
        assert_relative_eq!(0.0, fold_equity(0.5, 100.0, 100.0).unwrap());
        assert!(fold_equity(0.2, 100.0, 100.0).unwrap() < 0.0);
        assert!(break_even_pct(0.0, 0.0).is_err());
    }

    #[test]
    fn test_bluff_ratio() {
        assert_relative_eq!(0.5, bluff_ratio(100.0, 100.0).unwrap());
        assert_relative_eq!(1.0 / 3.0, bluff_ratio(50.0, 100.0).unwrap());
    }

    #[test]
    fn test_effective_stack() {
        assert_relative_eq!(80.0, effective_stack(&[100.0, 80.0]).unwrap());
        assert_relative_eq!(150.0, effective_stack(&[40.0, 200.0, 150.0]).unwrap());
        assert!(matches!(
            effective_stack(&[100.0]),
            Err(GtoError::NotEnoughStacks(1))
        ));
        assert!(effective_stack(&[100.0, -5.0]).is_err());
    }

    #[test]
    fn test_spr_zones() {
        assert_eq!(SprZone::Low, spr(400.0, 100.0).unwrap().zone);
        assert_eq!(SprZone::Medium, spr(1000.0, 100.0).unwrap().zone);
        let deep = spr(2000.0, 100.0).unwrap();
        assert_eq!(SprZone::High, deep.zone);
        assert_relative_eq!(20.0, deep.ratio);
        assert!(deep.zone.guidance().contains("Implied odds"));
        assert!(spr(100.0, 0.0).is_err());
    }
}
