//! European put on a futures price under Black-76.

use std::collections::BTreeMap;

use num_traits::Float;

use greeks_core::math::distributions::norm_cdf;

use super::greeks;
use super::params::{Factors, FuturesParams};

/// A European put on a futures contract.
///
/// P = e^(-rT)·(K·N(-d2) - F·N(-d1))
///
/// # Examples
/// ```
/// use greeks_models::{FuturesParams, FuturesPut};
///
/// let params = FuturesParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
/// let put = FuturesPut::new(params);
///
/// assert!((put.price() - 1.247050).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct FuturesPut<T: Float> {
    params: FuturesParams<T>,
    f: Factors<T>,
}

impl<T: Float> FuturesPut<T> {
    /// Creates a put leg, deriving d1/d2 and the discount factor once.
    pub fn new(params: FuturesParams<T>) -> Self {
        let f = Factors::compute(&params);
        Self { params, f }
    }

    /// Returns a reference to the parameter tuple.
    #[inline]
    pub fn params(&self) -> &FuturesParams<T> {
        &self.params
    }

    /// Returns the 1st probability factor d1.
    #[inline]
    pub fn d1(&self) -> T {
        self.f.d1
    }

    /// Returns the 2nd probability factor d2.
    #[inline]
    pub fn d2(&self) -> T {
        self.f.d2
    }

    /// Fair value: e^(-rT)·(K·N(-d2) - F·N(-d1)).
    pub fn price(&self) -> T {
        self.f.df
            * (self.params.strike() * norm_cdf(-self.f.d2)
                - self.params.future() * norm_cdf(-self.f.d1))
    }

    /// Risk-neutral probability of expiring in the money: N(-d2).
    pub fn in_the_money(&self) -> T {
        norm_cdf(-self.f.d2)
    }

    /// Sensitivity to the futures price: -e^(-rT)·N(-d1).
    pub fn delta(&self) -> T {
        -self.f.df * norm_cdf(-self.f.d1)
    }

    /// Second-order sensitivity to the futures price.
    pub fn gamma(&self) -> T {
        greeks::gamma(&self.params, &self.f)
    }

    /// Sensitivity to volatility.
    pub fn vega(&self) -> T {
        greeks::vega(&self.params, &self.f)
    }

    /// Sensitivity to the passage of time (per year, sign of -∂V/∂T).
    pub fn theta(&self) -> T {
        let p = &self.params;
        let f = &self.f;
        greeks::theta_decay(p, f) + p.rate() * p.strike() * f.df * norm_cdf(-f.d2)
            - p.rate() * p.future() * f.df * norm_cdf(-f.d1)
    }

    /// Sensitivity to the risk-free rate: -T·price.
    pub fn rho(&self) -> T {
        -self.params.expiry() * self.price()
    }

    /// Cross sensitivity ∂²V/∂F∂σ.
    pub fn vanna(&self) -> T {
        greeks::vanna(&self.params, &self.f)
    }

    /// Second-order sensitivity to volatility.
    pub fn vomma(&self) -> T {
        greeks::vomma(&self.params, &self.f)
    }

    /// The five first-order Greeks keyed by name.
    pub fn core_greeks(&self) -> BTreeMap<&'static str, T> {
        BTreeMap::from([
            ("delta", self.delta()),
            ("gamma", self.gamma()),
            ("vega", self.vega()),
            ("theta", self.theta()),
            ("rho", self.rho()),
        ])
    }

    /// Every supported Greek keyed by name.
    pub fn all_greeks(&self) -> BTreeMap<&'static str, T> {
        let mut map = self.core_greeks();
        map.insert("vanna", self.vanna());
        map.insert("vomma", self.vomma());
        map
    }
}
