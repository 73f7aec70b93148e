//! Iron butterfly: an iron condor with the body strikes collapsed.

use num_traits::Float;

use greeks_core::traits::OptionAttributes;
use greeks_core::types::{Attribute, Direction, PricingError};

use crate::compose::{violated, Combination, VanillaLeg};

/// An iron butterfly over strikes K1 < K2 < K3 with symmetric wings.
///
/// - Long: -Put(K1) + Put(K2) + Call(K2) - Call(K3)
/// - Short: Put(K1) - Put(K2) - Call(K2) + Call(K3)
///
/// Both body legs sit at the middle strike K2, so the position is a
/// short straddle protected by the wings.
#[derive(Debug, Clone)]
pub struct IronButterfly<T: Float> {
    combo: Combination<T>,
}

impl<T: Float> IronButterfly<T> {
    /// Creates an iron butterfly over strikes `k1 < k2 < k3`.
    ///
    /// # Errors
    /// `PricingError::InvalidStructure` unless K1 < K2 < K3 and the
    /// wings are symmetric (K3 - K2 = K2 - K1).
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
        if k3 - k2 != k2 - k1 {
            return Err(violated(
                "K3 - K2 = K2 - K1",
                &[("K1", k1), ("K2", k2), ("K3", k3)],
            ));
        }

        let sign = direction.signum::<T>();
        let legs = vec![
            (
                VanillaLeg::put(spot, k1, expiry, rate, volatility, dividend_yield)?,
                -sign,
            ),
            (
                VanillaLeg::put(spot, k2, expiry, rate, volatility, dividend_yield)?,
                sign,
            ),
            (
                VanillaLeg::call(spot, k2, expiry, rate, volatility, dividend_yield)?,
                sign,
            ),
            (
                VanillaLeg::call(spot, k3, expiry, rate, volatility, dividend_yield)?,
                -sign,
            ),
        ];

        Ok(Self {
            combo: Combination::new(legs),
        })
    }
}

impl<T: Float> OptionAttributes<T> for IronButterfly<T> {
    fn attribute(&self, attr: Attribute) -> T {
        self.combo.evaluate(attr)
    }
}
