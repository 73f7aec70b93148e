//! Iron condor: a put spread below a call spread.

use num_traits::Float;

use greeks_core::traits::OptionAttributes;
use greeks_core::types::{Attribute, Direction, PricingError};

use crate::compose::{violated, Combination, VanillaLeg};

/// An iron condor over strikes K1 < K2 < K3 < K4 with symmetric wings.
///
/// - Long: -Put(K1) + Put(K2) + Call(K3) - Call(K4)
/// - Short: Put(K1) - Put(K2) - Call(K3) + Call(K4)
///
/// The long condor is short both wings, collecting premium while the
/// underlying stays between K2 and K3.
#[derive(Debug, Clone)]
pub struct IronCondor<T: Float> {
    combo: Combination<T>,
}

impl<T: Float> IronCondor<T> {
    /// Creates an iron condor over strikes `k1 < k2 < k3 < k4`.
    ///
    /// # Errors
    /// `PricingError::InvalidStructure` unless K1 < K2 < K3 < K4 and the
    /// wings are symmetric (K4 - K3 = K2 - K1).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        k1: T,
        k2: T,
        k3: T,
        k4: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
        direction: Direction,
    ) -> Result<Self, PricingError> {
        if !(k1 < k2 && k2 < k3 && k3 < k4) {
            return Err(violated(
                "K1 < K2 < K3 < K4",
                &[("K1", k1), ("K2", k2), ("K3", k3), ("K4", k4)],
            ));
        }
        if k4 - k3 != k2 - k1 {
            return Err(violated(
                "K4 - K3 = K2 - K1",
                &[("K1", k1), ("K2", k2), ("K3", k3), ("K4", k4)],
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
                VanillaLeg::call(spot, k3, expiry, rate, volatility, dividend_yield)?,
                sign,
            ),
            (
                VanillaLeg::call(spot, k4, expiry, rate, volatility, dividend_yield)?,
                -sign,
            ),
        ];

        Ok(Self {
            combo: Combination::new(legs),
        })
    }
}

impl<T: Float> OptionAttributes<T> for IronCondor<T> {
    fn attribute(&self, attr: Attribute) -> T {
        self.combo.evaluate(attr)
    }
}
