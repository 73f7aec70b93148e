//! Cash-or-nothing digital put.

use std::collections::BTreeMap;

use num_traits::Float;

use greeks_core::math::distributions::{norm_cdf, norm_pdf};

use super::params::{BinaryParams, Factors};

/// A cash-or-nothing put paying one unit if S < K at expiry.
///
/// P = e^(-rT)·N(-d2)
///
/// A digital call and put on the same parameters sum to the discount
/// factor, so delta, gamma and vega here are the exact negations of
/// [`super::BinaryCall`]'s.
///
/// # Examples
/// ```
/// use greeks_models::{BinaryParams, BinaryPut};
///
/// let params = BinaryParams::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
/// let put = BinaryPut::new(params);
///
/// assert!((put.price() - 0.281243).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryPut<T: Float> {
    params: BinaryParams<T>,
    f: Factors<T>,
}

impl<T: Float> BinaryPut<T> {
    /// Creates a digital put leg, deriving d1/d2 and the discount
    /// factor once.
    pub fn new(params: BinaryParams<T>) -> Self {
        let f = Factors::compute(&params);
        Self { params, f }
    }

    /// Returns a reference to the parameter tuple.
    #[inline]
    pub fn params(&self) -> &BinaryParams<T> {
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

    /// Undiscounted exercise probability: N(-d2).
    pub fn forward(&self) -> T {
        norm_cdf(-self.f.d2)
    }

    /// Fair value: e^(-rT)·N(-d2).
    pub fn price(&self) -> T {
        self.f.df * norm_cdf(-self.f.d2)
    }

    /// Risk-neutral probability of expiring in the money: N(-d2).
    pub fn in_the_money(&self) -> T {
        norm_cdf(-self.f.d2)
    }

    /// delta = -e^(-rT)·φ(d2) / (S·σ·√T)
    pub fn delta(&self) -> T {
        let p = &self.params;
        -self.f.df * norm_pdf(self.f.d2) / (p.spot() * p.volatility() * self.f.sqrt_t)
    }

    /// gamma = e^(-rT)·φ(d2)·d1 / (S²·σ²·T)
    pub fn gamma(&self) -> T {
        let p = &self.params;
        self.f.df * norm_pdf(self.f.d2) * self.f.d1
            / (p.spot() * p.spot() * p.volatility() * p.volatility() * p.expiry())
    }

    /// vega = e^(-rT)·φ(d2)·d1/σ
    pub fn vega(&self) -> T {
        self.f.df * norm_pdf(self.f.d2) * self.f.d1 / self.params.volatility()
    }

    /// theta = e^(-rT)·(r·N(-d2) - φ(d2)·(d1/(2T) - r/(σ·√T)))
    pub fn theta(&self) -> T {
        let p = &self.params;
        let f = &self.f;
        let two = T::from(2.0).unwrap();

        let drift = f.d1 / (two * p.expiry()) - p.rate() / (p.volatility() * f.sqrt_t);
        f.df * (p.rate() * norm_cdf(-f.d2) - norm_pdf(f.d2) * drift)
    }

    /// rho = -e^(-rT)·(φ(d2)·√T/σ + T·N(-d2))
    pub fn rho(&self) -> T {
        let p = &self.params;
        let f = &self.f;
        -f.df * (norm_pdf(f.d2) * f.sqrt_t / p.volatility() + p.expiry() * norm_cdf(-f.d2))
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

    /// Every supported Greek keyed by name (same set as
    /// [`Self::core_greeks`] for the digital family).
    pub fn all_greeks(&self) -> BTreeMap<&'static str, T> {
        self.core_greeks()
    }
}
