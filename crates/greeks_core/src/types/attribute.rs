//! The enumerated capability contract.
//!
//! Every quantity a leg or structure can be asked for is a variant of
//! [`Attribute`]. Composition code dispatches on this enum instead of on
//! strings, so the compiler verifies that every implementor handles every
//! capability and a misspelled capability cannot be requested at runtime.

/// A named quantity computable from a leg or a composed structure.
///
/// Covers the fair value, the naive in-the-money probability, and every
/// supported Greek. The string returned by [`Attribute::name`] is the key
/// used in the aggregate maps (`core_greeks`, `itm_proxies`,
/// `all_greeks`).
///
/// # Examples
/// ```
/// use greeks_core::types::Attribute;
///
/// assert_eq!(Attribute::DualDelta.name(), "dual_delta");
/// assert_eq!(Attribute::ALL.len(), 21);
/// assert_eq!(Attribute::CORE.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attribute {
    /// Fair value of the option or structure.
    Price,
    /// Naive probability of finishing in the money at expiry.
    InTheMoney,
    /// ∂V/∂S (forward delta for the dividend model).
    Delta,
    /// Delta discounted for interest rates.
    SpotDelta,
    /// ∂V/∂K.
    DualDelta,
    /// ∂²V/∂S².
    Gamma,
    /// ∂²V/∂K².
    DualGamma,
    /// ∂V/∂σ.
    Vega,
    /// ∂V/∂t (time decay).
    Theta,
    /// ∂V/∂q (dividend sensitivity, also called psi).
    Epsilon,
    /// ∂V/∂r.
    Rho,
    /// Percentage change in value per percent change in underlying
    /// (gearing): delta·S/price.
    Lambda,
    /// ∂²V/∂S∂σ.
    Vanna,
    /// Delta decay: rate of change of delta over time.
    Charm,
    /// ∂²V/∂σ² (volatility convexity, also called volga).
    Vomma,
    /// Rate of change of vega over time.
    Veta,
    /// Second-order strike sensitivity in its probability-density form.
    Phi,
    /// ∂gamma/∂S (third order).
    Speed,
    /// ∂gamma/∂σ (third order).
    Zomma,
    /// Rate of change of gamma over time (third order).
    Color,
    /// ∂vomma/∂σ (third order).
    Ultima,
}

impl Attribute {
    /// Every capability, in the order used by `all_greeks` plus the two
    /// non-Greek quantities (price and in-the-money probability).
    pub const ALL: [Attribute; 21] = [
        Attribute::Price,
        Attribute::InTheMoney,
        Attribute::Delta,
        Attribute::SpotDelta,
        Attribute::DualDelta,
        Attribute::Gamma,
        Attribute::DualGamma,
        Attribute::Vega,
        Attribute::Theta,
        Attribute::Epsilon,
        Attribute::Rho,
        Attribute::Lambda,
        Attribute::Vanna,
        Attribute::Charm,
        Attribute::Vomma,
        Attribute::Veta,
        Attribute::Phi,
        Attribute::Speed,
        Attribute::Zomma,
        Attribute::Color,
        Attribute::Ultima,
    ];

    /// Every Greek: [`Attribute::ALL`] without `Price` and `InTheMoney`.
    pub const GREEKS: [Attribute; 19] = [
        Attribute::Delta,
        Attribute::SpotDelta,
        Attribute::DualDelta,
        Attribute::Gamma,
        Attribute::DualGamma,
        Attribute::Vega,
        Attribute::Theta,
        Attribute::Epsilon,
        Attribute::Rho,
        Attribute::Lambda,
        Attribute::Vanna,
        Attribute::Charm,
        Attribute::Vomma,
        Attribute::Veta,
        Attribute::Phi,
        Attribute::Speed,
        Attribute::Zomma,
        Attribute::Color,
        Attribute::Ultima,
    ];

    /// The five most widely used Greeks.
    pub const CORE: [Attribute; 5] = [
        Attribute::Delta,
        Attribute::Gamma,
        Attribute::Vega,
        Attribute::Theta,
        Attribute::Rho,
    ];

    /// The two in-the-money proxies.
    pub const ITM_PROXIES: [Attribute; 2] = [Attribute::InTheMoney, Attribute::DualDelta];

    /// Returns the snake_case key for this capability.
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Price => "price",
            Attribute::InTheMoney => "in_the_money",
            Attribute::Delta => "delta",
            Attribute::SpotDelta => "spot_delta",
            Attribute::DualDelta => "dual_delta",
            Attribute::Gamma => "gamma",
            Attribute::DualGamma => "dual_gamma",
            Attribute::Vega => "vega",
            Attribute::Theta => "theta",
            Attribute::Epsilon => "epsilon",
            Attribute::Rho => "rho",
            Attribute::Lambda => "lambda",
            Attribute::Vanna => "vanna",
            Attribute::Charm => "charm",
            Attribute::Vomma => "vomma",
            Attribute::Veta => "veta",
            Attribute::Phi => "phi",
            Attribute::Speed => "speed",
            Attribute::Zomma => "zomma",
            Attribute::Color => "color",
            Attribute::Ultima => "ultima",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
