//! Strangle: an out-of-the-money put below an out-of-the-money call.

use num_traits::Float;

use greeks_core::traits::OptionAttributes;
use greeks_core::types::{Attribute, Direction, PricingError};

use crate::compose::{violated, Combination, VanillaLeg};

/// A strangle: Put(K1) + Call(K2) with K1 < K2.
///
/// Cheaper than a straddle at the cost of needing a larger move before
/// it pays.
#[derive(Debug, Clone)]
pub struct Strangle<T: Float> {
    combo: Combination<T>,
}

impl<T: Float> Strangle<T> {
    /// Creates a strangle with put strike `k1` and call strike `k2`.
    ///
    /// # Errors
    /// `PricingError::InvalidStructure` unless K1 < K2;
    /// `PricingError::InvalidParameter` if any scalar is outside the
    /// model domain.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        k1: T,
        k2: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
        direction: Direction,
    ) -> Result<Self, PricingError> {
        if k1 >= k2 {
            return Err(violated("K1 < K2", &[("K1", k1), ("K2", k2)]));
        }

        let sign = direction.signum::<T>();
        let put = VanillaLeg::put(spot, k1, expiry, rate, volatility, dividend_yield)?;
        let call = VanillaLeg::call(spot, k2, expiry, rate, volatility, dividend_yield)?;

        Ok(Self {
            combo: Combination::new(vec![(put, sign), (call, sign)]),
        })
    }
}

impl<T: Float> OptionAttributes<T> for Strangle<T> {
    fn attribute(&self, attr: Attribute) -> T {
        self.combo.evaluate(attr)
    }
}
