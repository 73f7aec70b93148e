//! Long/short direction flags for multi-leg structures.

use std::str::FromStr;

use num_traits::Float;

use super::error::PricingError;

/// Direction of a composed structure.
///
/// A short structure is the exact negation of the long one: every leg
/// weight flips sign, so every attribute flips sign.
///
/// # Examples
/// ```
/// use greeks_core::types::Direction;
///
/// assert_eq!(Direction::Long.signum::<f64>(), 1.0);
/// assert_eq!(Direction::Short.signum::<f64>(), -1.0);
///
/// // Parsing is case-insensitive; anything else is InvalidDirection
/// let parsed: Direction = "Long".parse().unwrap();
/// assert_eq!(parsed, Direction::Long);
/// assert!("sideways".parse::<Direction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Buy the structure.
    Long,
    /// Sell the structure.
    Short,
}

impl Direction {
    /// Returns the weight multiplier for this direction: +1 for long,
    /// -1 for short.
    #[inline]
    pub fn signum<T: Float>(self) -> T {
        match self {
            Direction::Long => T::one(),
            Direction::Short => -T::one(),
        }
    }
}

impl FromStr for Direction {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("long") {
            Ok(Direction::Long)
        } else if s.eq_ignore_ascii_case("short") {
            Ok(Direction::Short)
        } else {
            Err(PricingError::InvalidDirection {
                direction: s.to_string(),
            })
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Long => f.write_str("long"),
            Direction::Short => f.write_str("short"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signum() {
        assert_eq!(Direction::Long.signum::<f64>(), 1.0);
        assert_eq!(Direction::Short.signum::<f64>(), -1.0);
        assert_eq!(Direction::Short.signum::<f32>(), -1.0_f32);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("long".parse::<Direction>().unwrap(), Direction::Long);
        assert_eq!("SHORT".parse::<Direction>().unwrap(), Direction::Short);
        assert_eq!("Long".parse::<Direction>().unwrap(), Direction::Long);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "straddle".parse::<Direction>().unwrap_err();
        match err {
            PricingError::InvalidDirection { direction } => {
                assert_eq!(direction, "straddle");
            }
            _ => panic!("Expected InvalidDirection error"),
        }
    }

    #[test]
    fn test_display_round_trip() {
        for direction in [Direction::Long, Direction::Short] {
            let parsed: Direction = direction.to_string().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }
}
