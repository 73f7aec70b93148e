//! European put option under Black-Scholes-Merton.

use num_traits::Float;

use greeks_core::math::distributions::norm_cdf;
use greeks_core::traits::OptionAttributes;
use greeks_core::types::Attribute;

use super::greeks;
use super::params::{EquityParams, Factors};

/// A European put on a dividend-paying underlying.
///
/// P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
///
/// Shares d1/d2 and all second-order Greeks with [`super::EquityCall`];
/// only the first-order sensitivities and the price differ in sign
/// structure.
///
/// # Examples
/// ```
/// use greeks_core::traits::OptionAttributes;
/// use greeks_models::{EquityParams, EquityPut};
///
/// let params = EquityParams::without_dividend(55.0_f64, 50.0, 1.0, 0.0025, 0.15).unwrap();
/// let put = EquityPut::new(params);
///
/// assert!((put.price() - 1.214564).abs() < 1e-5);
/// assert!(put.delta() < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct EquityPut<T: Float> {
    params: EquityParams<T>,
    f: Factors<T>,
}

impl<T: Float> EquityPut<T> {
    /// Creates a put leg, deriving d1/d2 and the discount factors once.
    ///
    /// Infallible: `params` has already been validated.
    pub fn new(params: EquityParams<T>) -> Self {
        let f = Factors::compute(&params);
        Self { params, f }
    }

    /// Returns a reference to the parameter tuple.
    #[inline]
    pub fn params(&self) -> &EquityParams<T> {
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
}

impl<T: Float> OptionAttributes<T> for EquityPut<T> {
    fn attribute(&self, attr: Attribute) -> T {
        let p = &self.params;
        let f = &self.f;

        match attr {
            // P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
            Attribute::Price => {
                p.strike() * f.df_rate * norm_cdf(-f.d2) - p.spot() * f.df_div * norm_cdf(-f.d1)
            }
            Attribute::InTheMoney => norm_cdf(-f.d2),
            Attribute::Delta => -f.df_div * norm_cdf(-f.d1),
            Attribute::SpotDelta => {
                -((p.rate() - p.dividend_yield()) * p.expiry()).exp() * norm_cdf(-f.d1)
            }
            Attribute::DualDelta => f.df_rate * norm_cdf(-f.d2),
            Attribute::Theta => {
                greeks::theta_decay(p, f) + p.rate() * p.strike() * f.df_rate * norm_cdf(-f.d2)
                    - greeks::dividend_flow(p, f, -f.d1)
            }
            Attribute::Rho => -p.strike() * p.expiry() * f.df_rate * norm_cdf(-f.d2),
            Attribute::Epsilon => p.spot() * p.expiry() * f.df_div * norm_cdf(-f.d1),
            Attribute::Charm => {
                -p.dividend_yield() * f.df_div * norm_cdf(-f.d1) - greeks::charm_decay(p, f)
            }
            Attribute::Lambda => {
                let delta = self.attribute(Attribute::Delta);
                let price = self.attribute(Attribute::Price);
                delta * p.spot() / price
            }
            Attribute::Gamma => greeks::gamma(p, f),
            Attribute::DualGamma => greeks::dual_gamma(p, f),
            Attribute::Vega => greeks::vega(p, f),
            Attribute::Vanna => greeks::vanna(p, f),
            Attribute::Vomma => greeks::vomma(p, f),
            Attribute::Veta => greeks::veta(p, f),
            Attribute::Phi => greeks::phi(p, f),
            Attribute::Speed => greeks::speed(p, f),
            Attribute::Zomma => greeks::zomma(p, f),
            Attribute::Color => greeks::color(p, f),
            Attribute::Ultima => greeks::ultima(p, f),
        }
    }
}
