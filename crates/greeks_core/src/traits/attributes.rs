//! The uniform query surface shared by legs and structures.
//!
//! Implementors provide a single total function from [`Attribute`] to a
//! value; everything else — the named per-Greek queries and the three
//! aggregate views — is derived from it. Because both the named queries
//! and the aggregate maps route through the same `attribute` call, every
//! key in `all_greeks()` is guaranteed to equal its individually queried
//! counterpart.

use std::collections::BTreeMap;

use num_traits::Float;

use crate::types::Attribute;

/// Uniform capability surface for single legs and composed structures.
///
/// The only required method is [`OptionAttributes::attribute`], a pure
/// infallible function of the implementor's immutable parameters. All
/// named queries and aggregate views are provided on top of it.
///
/// # Examples
/// ```
/// use greeks_core::traits::OptionAttributes;
/// use greeks_core::types::Attribute;
///
/// // A degenerate "leg" whose every attribute is a constant.
/// struct Flat(f64);
///
/// impl OptionAttributes<f64> for Flat {
///     fn attribute(&self, _attr: Attribute) -> f64 {
///         self.0
///     }
/// }
///
/// let flat = Flat(2.5);
/// assert_eq!(flat.price(), 2.5);
/// assert_eq!(flat.delta(), 2.5);
/// assert_eq!(flat.all_greeks()["vanna"], 2.5);
/// ```
pub trait OptionAttributes<T: Float> {
    /// Evaluates one named capability.
    ///
    /// Pure and infallible: every variant of [`Attribute`] must be
    /// handled, which the exhaustive match in each implementor enforces
    /// at compile time.
    fn attribute(&self, attr: Attribute) -> T;

    /// Fair value.
    fn price(&self) -> T {
        self.attribute(Attribute::Price)
    }

    /// Naive probability of finishing in the money at expiry.
    fn in_the_money(&self) -> T {
        self.attribute(Attribute::InTheMoney)
    }

    /// Rate of change in value with respect to the underlying price.
    fn delta(&self) -> T {
        self.attribute(Attribute::Delta)
    }

    /// Delta discounted for interest rates.
    fn spot_delta(&self) -> T {
        self.attribute(Attribute::SpotDelta)
    }

    /// Rate of change in value with respect to the strike price.
    fn dual_delta(&self) -> T {
        self.attribute(Attribute::DualDelta)
    }

    /// Rate of change in delta with respect to the underlying price.
    fn gamma(&self) -> T {
        self.attribute(Attribute::Gamma)
    }

    /// Second derivative of value with respect to the strike price.
    fn dual_gamma(&self) -> T {
        self.attribute(Attribute::DualGamma)
    }

    /// Rate of change in value with respect to volatility.
    fn vega(&self) -> T {
        self.attribute(Attribute::Vega)
    }

    /// Rate of change in value with respect to time (time decay).
    fn theta(&self) -> T {
        self.attribute(Attribute::Theta)
    }

    /// Rate of change in value with respect to the dividend yield.
    fn epsilon(&self) -> T {
        self.attribute(Attribute::Epsilon)
    }

    /// Rate of change in value with respect to the risk-free rate.
    fn rho(&self) -> T {
        self.attribute(Attribute::Rho)
    }

    /// Gearing: percentage change in value per percent change in the
    /// underlying.
    fn lambda(&self) -> T {
        self.attribute(Attribute::Lambda)
    }

    /// Sensitivity of delta to volatility.
    fn vanna(&self) -> T {
        self.attribute(Attribute::Vanna)
    }

    /// Delta decay: rate of change of delta over time.
    fn charm(&self) -> T {
        self.attribute(Attribute::Charm)
    }

    /// Volatility convexity (volga).
    fn vomma(&self) -> T {
        self.attribute(Attribute::Vomma)
    }

    /// Rate of change of vega over time.
    fn veta(&self) -> T {
        self.attribute(Attribute::Veta)
    }

    /// Second-order strike sensitivity in probability-density form.
    fn phi(&self) -> T {
        self.attribute(Attribute::Phi)
    }

    /// Rate of change of gamma with respect to the underlying price.
    fn speed(&self) -> T {
        self.attribute(Attribute::Speed)
    }

    /// Rate of change of gamma with respect to volatility.
    fn zomma(&self) -> T {
        self.attribute(Attribute::Zomma)
    }

    /// Rate of change of gamma over time.
    fn color(&self) -> T {
        self.attribute(Attribute::Color)
    }

    /// Sensitivity of vomma with respect to volatility.
    fn ultima(&self) -> T {
        self.attribute(Attribute::Ultima)
    }

    /// The five most widely used Greeks, keyed by name.
    fn core_greeks(&self) -> BTreeMap<&'static str, T> {
        Attribute::CORE
            .iter()
            .map(|&attr| (attr.name(), self.attribute(attr)))
            .collect()
    }

    /// The in-the-money proxies, keyed by name.
    fn itm_proxies(&self) -> BTreeMap<&'static str, T> {
        Attribute::ITM_PROXIES
            .iter()
            .map(|&attr| (attr.name(), self.attribute(attr)))
            .collect()
    }

    /// Every supported Greek, keyed by name.
    ///
    /// Each entry equals the value returned by the correspondingly named
    /// individual query.
    fn all_greeks(&self) -> BTreeMap<&'static str, T> {
        Attribute::GREEKS
            .iter()
            .map(|&attr| (attr.name(), self.attribute(attr)))
            .collect()
    }
}
