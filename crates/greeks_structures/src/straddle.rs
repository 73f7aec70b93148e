//! Straddle: a put and a call struck at the same level.

use num_traits::Float;

use greeks_core::traits::OptionAttributes;
use greeks_core::types::{Attribute, Direction, PricingError};

use crate::compose::{Combination, VanillaLeg};

/// A straddle: Put(K) + Call(K), both at the same strike and expiry.
///
/// Long profits from a large move in either direction; `Direction::Short`
/// negates every leg weight, so a short straddle's attributes are the
/// exact negation of the long's.
///
/// # Examples
/// ```
/// use greeks_core::traits::OptionAttributes;
/// use greeks_core::types::Direction;
/// use greeks_structures::Straddle;
///
/// let straddle =
///     Straddle::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15, 0.0, Direction::Long).unwrap();
/// assert!((straddle.price() - 7.553972).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct Straddle<T: Float> {
    combo: Combination<T>,
}

impl<T: Float> Straddle<T> {
    /// Creates a straddle at strike `strike`.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if any scalar is outside the
    /// model domain.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
        direction: Direction,
    ) -> Result<Self, PricingError> {
        let sign = direction.signum::<T>();
        let put = VanillaLeg::put(spot, strike, expiry, rate, volatility, dividend_yield)?;
        let call = VanillaLeg::call(spot, strike, expiry, rate, volatility, dividend_yield)?;

        Ok(Self {
            combo: Combination::new(vec![(put, sign), (call, sign)]),
        })
    }
}

impl<T: Float> OptionAttributes<T> for Straddle<T> {
    fn attribute(&self, attr: Attribute) -> T {
        self.combo.evaluate(attr)
    }
}
