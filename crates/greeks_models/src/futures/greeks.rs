//! Black-76 Greeks that are identical for calls and puts.

use num_traits::Float;

use greeks_core::math::distributions::norm_pdf;

use super::params::{Factors, FuturesParams};

/// gamma = e^(-rT)·φ(d1) / (F·σ·√T)
pub(crate) fn gamma<T: Float>(p: &FuturesParams<T>, f: &Factors<T>) -> T {
    f.df * norm_pdf(f.d1) / (p.future() * p.volatility() * f.sqrt_t)
}

/// vega = F·e^(-rT)·φ(d1)·√T
pub(crate) fn vega<T: Float>(p: &FuturesParams<T>, f: &Factors<T>) -> T {
    p.future() * f.df * norm_pdf(f.d1) * f.sqrt_t
}

/// vanna = (vega/F)·(1 - d1/(σ√T))
pub(crate) fn vanna<T: Float>(p: &FuturesParams<T>, f: &Factors<T>) -> T {
    vega(p, f) / p.future() * (T::one() - f.d1 / (p.volatility() * f.sqrt_t))
}

/// vomma = vega·d1·d2/σ
pub(crate) fn vomma<T: Float>(p: &FuturesParams<T>, f: &Factors<T>) -> T {
    vega(p, f) * f.d1 * f.d2 / p.volatility()
}

/// The common time-decay term of theta: -F·e^(-rT)·φ(d1)·σ/(2√T).
pub(crate) fn theta_decay<T: Float>(p: &FuturesParams<T>, f: &Factors<T>) -> T {
    let two = T::from(2.0).unwrap();
    -(p.future() * f.df * norm_pdf(f.d1) * p.volatility()) / (two * f.sqrt_t)
}
