//! Validated market/contract parameters for the Black-76 model.

use num_traits::Float;

use greeks_core::types::PricingError;

/// Immutable parameter tuple for the Black-76 futures model.
///
/// There is no carry term: the underlying is a futures price, so the
/// risk-free rate enters only through the discount factor e^(-rT).
///
/// # Examples
/// ```
/// use greeks_models::FuturesParams;
///
/// let params = FuturesParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
/// assert_eq!(params.future(), 55.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuturesParams<T: Float> {
    future: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
}

impl<T: Float> FuturesParams<T> {
    /// Creates a new validated parameter tuple.
    ///
    /// # Arguments
    /// * `future` - Futures price F (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `rate` - Risk-free rate r (may be negative)
    /// * `volatility` - Volatility σ (must be positive)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    pub fn new(
        future: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
    ) -> Result<Self, PricingError> {
        let zero = T::zero();

        if future <= zero {
            return Err(invalid("future", future));
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
            future,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the futures price F.
    #[inline]
    pub fn future(&self) -> T {
        self.future
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
    /// d1 = (ln(F/K) + (σ²/2)·T) / (σ·√T)
    /// d2 = d1 - σ·√T
    pub fn compute(p: &FuturesParams<T>) -> Self {
        let half = T::from(0.5).unwrap();

        let sqrt_t = p.expiry.sqrt();
        let vol_sqrt_t = p.volatility * sqrt_t;

        let log_moneyness = (p.future / p.strike).ln();
        let drift = half * p.volatility * p.volatility * p.expiry;

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
    fn test_new_valid_parameters() {
        let p = FuturesParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
        assert_eq!(p.future(), 55.0);
        assert_eq!(p.strike(), 50.0);
        assert_eq!(p.expiry(), 1.0);
        assert_eq!(p.rate(), 0.0025);
        assert_eq!(p.volatility(), 0.15);
    }

    #[test]
    fn test_new_rejects_non_positive_fields() {
        for (name, params) in [
            ("future", FuturesParams::new(0.0_f64, 50.0, 1.0, 0.0025, 0.15)),
            ("strike", FuturesParams::new(55.0_f64, 0.0, 1.0, 0.0025, 0.15)),
            ("expiry", FuturesParams::new(55.0_f64, 50.0, -1.0, 0.0025, 0.15)),
            (
                "volatility",
                FuturesParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.0),
            ),
        ] {
            match params.unwrap_err() {
                PricingError::InvalidParameter { name: got, .. } => assert_eq!(got, name),
                other => panic!("Expected InvalidParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_d1_d2_reference_values() {
        // F=55, K=50, T=1, r=0.0025, σ=0.15
        let p = FuturesParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
        let f = Factors::compute(&p);
        assert_relative_eq!(f.d1, 0.710401, epsilon = 1e-5);
        assert_relative_eq!(f.d2, 0.560401, epsilon = 1e-5);
    }

    #[test]
    fn test_rate_only_affects_discount() {
        let low = FuturesParams::new(55.0_f64, 50.0, 1.0, 0.0, 0.15).unwrap();
        let high = FuturesParams::new(55.0_f64, 50.0, 1.0, 0.05, 0.15).unwrap();
        let (fl, fh) = (Factors::compute(&low), Factors::compute(&high));
        assert_eq!(fl.d1, fh.d1);
        assert_eq!(fl.d2, fh.d2);
        assert!(fh.df < fl.df);
    }
}
