//! The linear-combination machinery behind every structure.
//!
//! A structure is an ordered list of weighted vanilla legs. Because
//! price and every Greek are linear in the position, one fold over the
//! legs answers every capability query; the concrete structures differ
//! only in which legs they build and with which weights.

use num_traits::Float;

use greeks_core::traits::OptionAttributes;
use greeks_core::types::{Attribute, PricingError};
use greeks_models::{EquityCall, EquityParams, EquityPut};

/// A single vanilla leg of a structure.
#[derive(Debug, Clone)]
pub(crate) enum VanillaLeg<T: Float> {
    Call(EquityCall<T>),
    Put(EquityPut<T>),
}

impl<T: Float> VanillaLeg<T> {
    /// Builds a call leg from scalars, validating the parameters.
    pub fn call(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, PricingError> {
        let params = EquityParams::new(spot, strike, expiry, rate, volatility, dividend_yield)?;
        Ok(Self::Call(EquityCall::new(params)))
    }

    /// Builds a put leg from scalars, validating the parameters.
    pub fn put(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, PricingError> {
        let params = EquityParams::new(spot, strike, expiry, rate, volatility, dividend_yield)?;
        Ok(Self::Put(EquityPut::new(params)))
    }
}

impl<T: Float> OptionAttributes<T> for VanillaLeg<T> {
    fn attribute(&self, attr: Attribute) -> T {
        match self {
            Self::Call(call) => call.attribute(attr),
            Self::Put(put) => put.attribute(attr),
        }
    }
}

/// An ordered list of weighted legs.
///
/// Immutable after construction; every query is the same weighted fold,
/// so a structure's attribute always equals the weighted sum of its
/// legs' attributes to floating-point exactness.
#[derive(Debug, Clone)]
pub(crate) struct Combination<T: Float> {
    legs: Vec<(VanillaLeg<T>, T)>,
}

impl<T: Float> Combination<T> {
    pub fn new(legs: Vec<(VanillaLeg<T>, T)>) -> Self {
        Self { legs }
    }

    /// Weighted sum of the legs' values for one attribute.
    pub fn evaluate(&self, attr: Attribute) -> T {
        self.legs
            .iter()
            .fold(T::zero(), |acc, (leg, weight)| {
                acc + *weight * leg.attribute(attr)
            })
    }
}

/// Formats the `InvalidStructure` error for a violated constraint.
pub(crate) fn violated<T: Float>(relation: &str, values: &[(&str, T)]) -> PricingError {
    let got = values
        .iter()
        .map(|(name, value)| format!("{name}={}", value.to_f64().unwrap_or(f64::NAN)))
        .collect::<Vec<_>>()
        .join(", ");
    PricingError::InvalidStructure {
        constraint: format!("{relation} (got {got})"),
    }
}
