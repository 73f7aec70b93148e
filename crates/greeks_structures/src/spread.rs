//! Two-leg spreads: vertical (bull/bear) and calendar.

use num_traits::Float;

use greeks_core::traits::OptionAttributes;
use greeks_core::types::{Attribute, PricingError};

use crate::compose::{violated, Combination, VanillaLeg};

/// A bull spread: Call(K1) - Call(K2) with K1 < K2.
///
/// Long the lower strike, short the higher; bounded payoff, always
/// worth between zero and the discounted strike gap.
#[derive(Debug, Clone)]
pub struct BullSpread<T: Float> {
    combo: Combination<T>,
}

impl<T: Float> BullSpread<T> {
    /// Creates a bull spread buying Call(K1) and selling Call(K2).
    ///
    /// # Errors
    /// `PricingError::InvalidStructure` unless K1 < K2.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        k1: T,
        k2: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, PricingError> {
        if k1 >= k2 {
            return Err(violated("K1 < K2", &[("K1", k1), ("K2", k2)]));
        }

        let bought = VanillaLeg::call(spot, k1, expiry, rate, volatility, dividend_yield)?;
        let sold = VanillaLeg::call(spot, k2, expiry, rate, volatility, dividend_yield)?;

        Ok(Self {
            combo: Combination::new(vec![(bought, T::one()), (sold, -T::one())]),
        })
    }
}

impl<T: Float> OptionAttributes<T> for BullSpread<T> {
    fn attribute(&self, attr: Attribute) -> T {
        self.combo.evaluate(attr)
    }
}

/// A bear spread: Put(K1) - Put(K2) with K1 > K2.
///
/// Long the higher-strike put, short the lower; profits as the
/// underlying falls.
#[derive(Debug, Clone)]
pub struct BearSpread<T: Float> {
    combo: Combination<T>,
}

impl<T: Float> BearSpread<T> {
    /// Creates a bear spread buying Put(K1) and selling Put(K2).
    ///
    /// # Errors
    /// `PricingError::InvalidStructure` unless K1 > K2.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        k1: T,
        k2: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, PricingError> {
        if k1 <= k2 {
            return Err(violated("K1 > K2", &[("K1", k1), ("K2", k2)]));
        }

        let bought = VanillaLeg::put(spot, k1, expiry, rate, volatility, dividend_yield)?;
        let sold = VanillaLeg::put(spot, k2, expiry, rate, volatility, dividend_yield)?;

        Ok(Self {
            combo: Combination::new(vec![(bought, T::one()), (sold, -T::one())]),
        })
    }
}

impl<T: Float> OptionAttributes<T> for BearSpread<T> {
    fn attribute(&self, attr: Attribute) -> T {
        self.combo.evaluate(attr)
    }
}

/// A calendar call spread: Call(K1, T1) - Call(K2, T2) with T1 > T2.
///
/// Horizontal when K1 == K2, diagonal otherwise.
#[derive(Debug, Clone)]
pub struct CalendarCallSpread<T: Float> {
    combo: Combination<T>,
}

impl<T: Float> CalendarCallSpread<T> {
    /// Creates a calendar spread buying Call(K1, T1) and selling
    /// Call(K2, T2).
    ///
    /// # Errors
    /// `PricingError::InvalidStructure` unless T1 > T2.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        k1: T,
        k2: T,
        t1: T,
        t2: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, PricingError> {
        if t1 <= t2 {
            return Err(violated("T1 > T2", &[("T1", t1), ("T2", t2)]));
        }

        let bought = VanillaLeg::call(spot, k1, t1, rate, volatility, dividend_yield)?;
        let sold = VanillaLeg::call(spot, k2, t2, rate, volatility, dividend_yield)?;

        Ok(Self {
            combo: Combination::new(vec![(bought, T::one()), (sold, -T::one())]),
        })
    }
}

impl<T: Float> OptionAttributes<T> for CalendarCallSpread<T> {
    fn attribute(&self, attr: Attribute) -> T {
        self.combo.evaluate(attr)
    }
}

/// A calendar put spread: Put(K1, T1) - Put(K2, T2) with T1 > T2.
#[derive(Debug, Clone)]
pub struct CalendarPutSpread<T: Float> {
    combo: Combination<T>,
}

impl<T: Float> CalendarPutSpread<T> {
    /// Creates a calendar spread buying Put(K1, T1) and selling
    /// Put(K2, T2).
    ///
    /// # Errors
    /// `PricingError::InvalidStructure` unless T1 > T2.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        k1: T,
        k2: T,
        t1: T,
        t2: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, PricingError> {
        if t1 <= t2 {
            return Err(violated("T1 > T2", &[("T1", t1), ("T2", t2)]));
        }

        let bought = VanillaLeg::put(spot, k1, t1, rate, volatility, dividend_yield)?;
        let sold = VanillaLeg::put(spot, k2, t2, rate, volatility, dividend_yield)?;

        Ok(Self {
            combo: Combination::new(vec![(bought, T::one()), (sold, -T::one())]),
        })
    }
}

impl<T: Float> OptionAttributes<T> for CalendarPutSpread<T> {
    fn attribute(&self, attr: Attribute) -> T {
        self.combo.evaluate(attr)
    }
}
