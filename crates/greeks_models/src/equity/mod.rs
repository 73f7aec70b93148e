//! Black-Scholes-Merton legs on a dividend-paying underlying.

mod call;
mod greeks;
mod params;
mod put;

pub use call::EquityCall;
pub use params::EquityParams;
pub use put::EquityPut;

pub(crate) use params::Factors;
