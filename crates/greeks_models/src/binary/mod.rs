//! Cash-or-nothing digital legs.

mod call;
mod params;
mod put;

pub use call::BinaryCall;
pub use params::BinaryParams;
pub use put::BinaryPut;
