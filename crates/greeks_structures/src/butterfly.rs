//! Butterfly: three equally spaced strikes, peaked at the middle.

use num_traits::Float;

use greeks_core::traits::OptionAttributes;
use greeks_core::types::{Attribute, Direction, PricingError};

use crate::compose::{violated, Combination, VanillaLeg};

/// A butterfly over equally spaced strikes K1 < K2 < K3.
///
/// - Long: Call(K1) - 2·Call(K2) + Call(K3)
/// - Short: -Put(K1) + 2·Put(K2) - Put(K3)
///
/// The two renderings have the same payoff shape with opposite sign;
/// the short side is built from puts, as the strategy is quoted.
#[derive(Debug, Clone)]
pub struct Butterfly<T: Float> {
    combo: Combination<T>,
}

impl<T: Float> Butterfly<T> {
    /// Creates a butterfly over strikes `k1 < k2 < k3`.
    ///
    /// # Errors
    /// `PricingError::InvalidStructure` unless K1 < K2 < K3 and the
    /// strikes are symmetric (K2 - K1 = K3 - K2).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        k1: T,
        k2: T,
        k3: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
        direction: Direction,
    ) -> Result<Self, PricingError> {
        if !(k1 < k2 && k2 < k3) {
            return Err(violated(
                "K1 < K2 < K3",
                &[("K1", k1), ("K2", k2), ("K3", k3)],
            ));
        }
        if k2 - k1 != k3 - k2 {
            return Err(violated(
                "K2 - K1 = K3 - K2",
                &[("K1", k1), ("K2", k2), ("K3", k3)],
            ));
        }

        let two = T::from(2.0).unwrap();
        let legs = match direction {
            Direction::Long => vec![
                (
                    VanillaLeg::call(spot, k1, expiry, rate, volatility, dividend_yield)?,
                    T::one(),
                ),
                (
                    VanillaLeg::call(spot, k2, expiry, rate, volatility, dividend_yield)?,
                    -two,
                ),
                (
                    VanillaLeg::call(spot, k3, expiry, rate, volatility, dividend_yield)?,
                    T::one(),
                ),
            ],
            Direction::Short => vec![
                (
                    VanillaLeg::put(spot, k1, expiry, rate, volatility, dividend_yield)?,
                    -T::one(),
                ),
                (
                    VanillaLeg::put(spot, k2, expiry, rate, volatility, dividend_yield)?,
                    two,
                ),
                (
                    VanillaLeg::put(spot, k3, expiry, rate, volatility, dividend_yield)?,
                    -T::one(),
                ),
            ],
        };

        Ok(Self {
            combo: Combination::new(legs),
        })
    }
}

impl<T: Float> OptionAttributes<T> for Butterfly<T> {
    fn attribute(&self, attr: Attribute) -> T {
        self.combo.evaluate(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use greeks_models::{EquityCall, EquityParams};

    fn call_price(strike: f64) -> f64 {
        EquityCall::new(
            EquityParams::without_dividend(55.0_f64, strike, 1.0, 0.0025, 0.15).unwrap(),
        )
        .price()
    }

    #[test]
    fn test_long_decomposes_into_calls() {
        let fly = Butterfly::new(
            55.0_f64,
            50.0,
            55.0,
            60.0,
            1.0,
            0.0025,
            0.15,
            0.0,
            Direction::Long,
        )
        .unwrap();
        assert_relative_eq!(
            fly.price(),
            call_price(50.0) - 2.0 * call_price(55.0) + call_price(60.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_long_price_positive() {
        // Convexity of the call price in strike
        let fly = Butterfly::new(
            55.0_f64,
            50.0,
            55.0,
            60.0,
            1.0,
            0.0025,
            0.15,
            0.0,
            Direction::Long,
        )
        .unwrap();
        assert!(fly.price() > 0.0);
    }

    #[test]
    fn test_short_put_rendering_negates_long_payoff_shape() {
        // Put-call parity makes the put butterfly equal to the call
        // butterfly at every strike triple, so short = -long
        let long = Butterfly::new(
            55.0_f64,
            50.0,
            55.0,
            60.0,
            1.0,
            0.0025,
            0.15,
            0.0,
            Direction::Long,
        )
        .unwrap();
        let short = Butterfly::new(
            55.0_f64,
            50.0,
            55.0,
            60.0,
            1.0,
            0.0025,
            0.15,
            0.0,
            Direction::Short,
        )
        .unwrap();
        assert_relative_eq!(short.price(), -long.price(), epsilon = 1e-9);
        assert_relative_eq!(short.gamma(), -long.gamma(), epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_unordered_strikes() {
        assert!(matches!(
            Butterfly::new(
                55.0_f64,
                55.0,
                50.0,
                60.0,
                1.0,
                0.0025,
                0.15,
                0.0,
                Direction::Long
            ),
            Err(PricingError::InvalidStructure { .. })
        ));
    }

    #[test]
    fn test_rejects_asymmetric_strikes() {
        let result = Butterfly::new(
            55.0_f64,
            50.0,
            54.0,
            60.0,
            1.0,
            0.0025,
            0.15,
            0.0,
            Direction::Long,
        );
        match result {
            Err(PricingError::InvalidStructure { constraint }) => {
                assert!(constraint.contains("K2 - K1 = K3 - K2"));
            }
            other => panic!("Expected InvalidStructure, got {other:?}"),
        }
    }
}
