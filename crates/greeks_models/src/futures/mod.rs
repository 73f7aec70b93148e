//! Black-76 legs on a futures price.

mod call;
mod greeks;
mod params;
mod put;

pub use call::FuturesCall;
pub use params::FuturesParams;
pub use put::FuturesPut;
