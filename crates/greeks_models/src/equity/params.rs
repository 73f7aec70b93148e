//! Validated market/contract parameters for the equity model.

use num_traits::Float;

use greeks_core::types::PricingError;

/// Immutable parameter tuple for the Black-Scholes-Merton model.
///
/// Validated once at construction; a constructed value is always inside
/// the model's domain, so derived quantities (d1, d2, discount factors)
/// never hit a division by zero or a logarithm of a non-positive number.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use greeks_models::EquityParams;
///
/// let params = EquityParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15, 0.0).unwrap();
/// assert_eq!(params.spot(), 55.0);
///
/// // Non-positive volatility is rejected at construction
/// assert!(EquityParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquityParams<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    dividend_yield: T,
}

impl<T: Float> EquityParams<T> {
    /// Creates a new validated parameter tuple.
    ///
    /// # Arguments
    /// * `spot` - Underlying price S (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `rate` - Risk-free rate r (may be negative)
    /// * `volatility` - Volatility σ (must be positive)
    /// * `dividend_yield` - Continuous dividend yield q (must be >= 0)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
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
        if dividend_yield < zero {
            return Err(invalid("dividend_yield", dividend_yield));
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Creates a parameter tuple with zero dividend yield.
    pub fn without_dividend(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
    ) -> Result<Self, PricingError> {
        Self::new(spot, strike, expiry, rate, volatility, T::zero())
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

    /// Returns the continuous dividend yield q.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }
}

/// Quantities derived from the parameter tuple, cached once per leg.
///
/// Pure functions of the immutable params; caching is a performance
/// convenience, never a correctness requirement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Factors<T: Float> {
    /// 1st probability factor.
    pub d1: T,
    /// 2nd probability factor: d1 - σ√T.
    pub d2: T,
    /// √T.
    pub sqrt_t: T,
    /// e^(-rT).
    pub df_rate: T,
    /// e^(-qT).
    pub df_div: T,
}

impl<T: Float> Factors<T> {
    /// Derives d1/d2 and the discount factors.
    ///
    /// d1 = (ln(S/K) + (r - q + σ²/2)·T) / (σ·√T)
    /// d2 = d1 - σ·√T
    pub fn compute(p: &EquityParams<T>) -> Self {
        let half = T::from(0.5).unwrap();

        let sqrt_t = p.expiry.sqrt();
        let vol_sqrt_t = p.volatility * sqrt_t;

        let log_moneyness = (p.spot / p.strike).ln();
        let drift = (p.rate - p.dividend_yield + half * p.volatility * p.volatility) * p.expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        Self {
            d1,
            d2,
            sqrt_t,
            df_rate: (-p.rate * p.expiry).exp(),
            df_div: (-p.dividend_yield * p.expiry).exp(),
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

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let p = EquityParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15, 0.01).unwrap();
        assert_eq!(p.spot(), 55.0);
        assert_eq!(p.strike(), 50.0);
        assert_eq!(p.expiry(), 1.0);
        assert_eq!(p.rate(), 0.0025);
        assert_eq!(p.volatility(), 0.15);
        assert_eq!(p.dividend_yield(), 0.01);
    }

    #[test]
    fn test_new_rejects_non_positive_fields() {
        for (name, params) in [
            ("spot", EquityParams::new(0.0_f64, 50.0, 1.0, 0.0025, 0.15, 0.0)),
            ("strike", EquityParams::new(55.0_f64, -50.0, 1.0, 0.0025, 0.15, 0.0)),
            ("expiry", EquityParams::new(55.0_f64, 50.0, 0.0, 0.0025, 0.15, 0.0)),
            ("volatility", EquityParams::new(55.0_f64, 50.0, 1.0, 0.0025, -0.15, 0.0)),
            (
                "dividend_yield",
                EquityParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15, -0.01),
            ),
        ] {
            match params.unwrap_err() {
                PricingError::InvalidParameter { name: got, .. } => assert_eq!(got, name),
                other => panic!("Expected InvalidParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_rate_allowed() {
        assert!(EquityParams::new(55.0_f64, 50.0, 1.0, -0.02, 0.15, 0.0).is_ok());
    }

    #[test]
    fn test_without_dividend() {
        let p = EquityParams::without_dividend(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
        assert_eq!(p.dividend_yield(), 0.0);
    }

    // ==========================================================
    // Probability Factor Tests
    // ==========================================================

    #[test]
    fn test_d1_d2_reference_values() {
        // S=55, K=50, T=1, r=0.0025, σ=0.15, q=0
        let p = EquityParams::without_dividend(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
        let f = Factors::compute(&p);
        assert_relative_eq!(f.d1, 0.727068, epsilon = 1e-5);
        assert_relative_eq!(f.d2, 0.577068, epsilon = 1e-5);
    }

    #[test]
    fn test_d2_is_d1_minus_vol_sqrt_t() {
        let p = EquityParams::new(100.0_f64, 105.0, 0.5, 0.05, 0.2, 0.01).unwrap();
        let f = Factors::compute(&p);
        assert_relative_eq!(f.d2, f.d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_dividend_yield_lowers_d1() {
        let no_div = EquityParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, 0.0).unwrap();
        let with_div = EquityParams::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, 0.03).unwrap();
        assert!(Factors::compute(&with_div).d1 < Factors::compute(&no_div).d1);
    }

    #[test]
    fn test_discount_factors() {
        let p = EquityParams::new(100.0_f64, 100.0, 2.0, 0.05, 0.2, 0.01).unwrap();
        let f = Factors::compute(&p);
        assert_relative_eq!(f.df_rate, (-0.1_f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(f.df_div, (-0.02_f64).exp(), epsilon = 1e-12);
    }
}
