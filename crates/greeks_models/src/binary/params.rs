//! Validated market/contract parameters for cash-or-nothing digitals.

use num_traits::Float;

use greeks_core::types::PricingError;

/// Immutable parameter tuple for the binary (digital) model.
///
/// Same probability factors as the dividend-free Black-Scholes-Merton
/// model; the payoff is a unit of cash instead of the underlying.
///
/// # Examples
/// ```
/// use greeks_models::BinaryParams;
///
/// let params = BinaryParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
/// assert_eq!(params.strike(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryParams<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BinaryParams<T> {
    /// Creates a new validated parameter tuple.
    ///
    /// # Arguments
    /// * `spot` - Underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `rate` - Risk-free rate r (may be negative)
    /// * `volatility` - Volatility σ (must be positive)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
    ) -> Result<Self, PricingError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(invalid("spot", spot));
        }
        if strike <= zero {
            return Err(invalid("strike", strike));
        }
        if expiry <= zero {
            return Err(invalid("expiry", expiry));
        }
        if volatility <= zero {
            return Err(invalid("volatility", volatility));
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the underlying price S.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price K.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }
}

/// Quantities derived from the parameter tuple, cached once per leg.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Factors<T: Float> {
    /// 1st probability factor.
    pub d1: T,
    /// 2nd probability factor: d1 - σ√T.
    pub d2: T,
    /// √T.
    pub sqrt_t: T,
    /// e^(-rT).
    pub df: T,
}

impl<T: Float> Factors<T> {
    /// Derives d1/d2 and the discount factor.
    ///
    /// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
    /// d2 = d1 - σ·√T
    pub fn compute(p: &BinaryParams<T>) -> Self {
        let half = T::from(0.5).unwrap();

        let sqrt_t = p.expiry.sqrt();
        let vol_sqrt_t = p.volatility * sqrt_t;

        let log_moneyness = (p.spot / p.strike).ln();
        let drift = (p.rate + half * p.volatility * p.volatility) * p.expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        Self {
            d1,
            d2,
            sqrt_t,
            df: (-p.rate * p.expiry).exp(),
        }
    }
}

fn invalid<T: Float>(name: &'static str, value: T) -> PricingError {
    PricingError::InvalidParameter {
        name,
        value: value.to_f64().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_non_positive_fields() {
        for (name, params) in [
            ("spot", BinaryParams::new(-1.0_f64, 50.0, 1.0, 0.0025, 0.15)),
            ("strike", BinaryParams::new(55.0_f64, 0.0, 1.0, 0.0025, 0.15)),
            ("expiry", BinaryParams::new(55.0_f64, 50.0, 0.0, 0.0025, 0.15)),
            (
                "volatility",
                BinaryParams::new(55.0_f64, 50.0, 1.0, 0.0025, -0.1),
            ),
        ] {
            match params.unwrap_err() {
                PricingError::InvalidParameter { name: got, .. } => assert_eq!(got, name),
                other => panic!("Expected InvalidParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_factors_match_dividend_free_equity() {
        // Same d1/d2 as Black-Scholes-Merton with q = 0
        let p = BinaryParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
        let f = Factors::compute(&p);
        assert_relative_eq!(f.d1, 0.727068, epsilon = 1e-5);
        assert_relative_eq!(f.d2, 0.577068, epsilon = 1e-5);
    }
}
