//! Greeks that are identical for calls and puts.
//!
//! Second- and higher-order sensitivities of the Black-Scholes-Merton
//! model depend on the option only through d1/d2, so they are shared by
//! both legs. Implementing them once here (instead of per leg) is what
//! keeps call and put Greeks from ever drifting apart.

use num_traits::Float;

use greeks_core::math::distributions::{norm_cdf, norm_pdf};

use super::params::{EquityParams, Factors};

/// gamma = e^(-qT)·φ(d1) / (S·σ·√T)
pub(crate) fn gamma<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    f.df_div * norm_pdf(f.d1) / (p.spot() * p.volatility() * f.sqrt_t)
}

/// dual_gamma = e^(-rT)·φ(d2) / (K·σ·√T)
pub(crate) fn dual_gamma<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    f.df_rate * norm_pdf(f.d2) / (p.strike() * p.volatility() * f.sqrt_t)
}

/// vega = S·e^(-qT)·φ(d1)·√T
pub(crate) fn vega<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    p.spot() * f.df_div * norm_pdf(f.d1) * f.sqrt_t
}

/// vanna = -φ(d1)·d2/σ
pub(crate) fn vanna<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    -norm_pdf(f.d1) * f.d2 / p.volatility()
}

/// vomma = vega·d1·d2/σ
pub(crate) fn vomma<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    vega(p, f) * f.d1 * f.d2 / p.volatility()
}

/// veta = -S·e^(-qT)·φ(d1)·√T·(q + (r-q)·d1/(σ√T) - (1 + d1·d2)/(2T))
pub(crate) fn veta<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let q = p.dividend_yield();

    let carry = (p.rate() - q) * f.d1 / (p.volatility() * f.sqrt_t);
    let decay = (one + f.d1 * f.d2) / (two * p.expiry());

    -p.spot() * f.df_div * norm_pdf(f.d1) * f.sqrt_t * (q + carry - decay)
}

/// phi = e^(-rT)·(1/K)·(1/√(2πσ²T))·exp(-(ln(K/S) - (r-q-σ²/2)T)² / (2σ²T))
pub(crate) fn phi<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    let half = T::from(0.5).unwrap();
    let two_pi = T::from(2.0 * std::f64::consts::PI).unwrap();

    let sigma2 = p.volatility() * p.volatility();
    let drift = (p.rate() - p.dividend_yield() - half * sigma2) * p.expiry();
    let log_k_s = (p.strike() / p.spot()).ln();
    let exponent = -(log_k_s - drift) * (log_k_s - drift) / (T::from(2.0).unwrap() * sigma2 * p.expiry());

    f.df_rate / p.strike() / (two_pi * sigma2 * p.expiry()).sqrt() * exponent.exp()
}

/// speed = -(gamma/S)·(d1/(σ√T) + 1)
pub(crate) fn speed<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    -gamma(p, f) / p.spot() * (f.d1 / (p.volatility() * f.sqrt_t) + T::one())
}

/// zomma = gamma·(d1·d2 - 1)/σ
pub(crate) fn zomma<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    gamma(p, f) * (f.d1 * f.d2 - T::one()) / p.volatility()
}

/// color = -e^(-qT)·φ(d1)/(2·S·T·σ√T)·(2qT + 1 + (2(r-q)T - d2·σ√T)/(σ√T)·d1)
pub(crate) fn color<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let q = p.dividend_yield();
    let vol_sqrt_t = p.volatility() * f.sqrt_t;

    let inner = two * q * p.expiry()
        + one
        + (two * (p.rate() - q) * p.expiry() - f.d2 * vol_sqrt_t) / vol_sqrt_t * f.d1;

    -f.df_div * norm_pdf(f.d1) / (two * p.spot() * p.expiry() * vol_sqrt_t) * inner
}

/// ultima = -(vega/σ²)·(d1·d2·(1 - d1·d2) + d1² + d2²)
pub(crate) fn ultima<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    let d1d2 = f.d1 * f.d2;
    let sigma2 = p.volatility() * p.volatility();

    -vega(p, f) / sigma2 * (d1d2 * (T::one() - d1d2) + f.d1 * f.d1 + f.d2 * f.d2)
}

/// charm shares its second term between call and put; only the
/// q·e^(-qT)·N(±d1) correction differs in sign, so the common part lives
/// here.
pub(crate) fn charm_decay<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    let two = T::from(2.0).unwrap();
    let vol_sqrt_t = p.volatility() * f.sqrt_t;

    let numerator = two * (p.rate() - p.dividend_yield()) * p.expiry() - f.d2 * vol_sqrt_t;
    f.df_div * norm_pdf(f.d1) * numerator / (two * p.expiry() * vol_sqrt_t)
}

/// The common time-decay term of theta: -e^(-qT)·S·φ(d1)·σ/(2√T).
pub(crate) fn theta_decay<T: Float>(p: &EquityParams<T>, f: &Factors<T>) -> T {
    let two = T::from(2.0).unwrap();
    -(f.df_div * p.spot() * norm_pdf(f.d1) * p.volatility()) / (two * f.sqrt_t)
}

/// Dividend correction term of theta: q·S·e^(-qT)·N(x).
pub(crate) fn dividend_flow<T: Float>(p: &EquityParams<T>, f: &Factors<T>, x: T) -> T {
    p.dividend_yield() * p.spot() * f.df_div * norm_cdf(x)
}
