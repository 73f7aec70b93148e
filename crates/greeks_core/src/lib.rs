//! # greeks_core: Foundation for Closed-Form Option Analytics
//!
//! Bottom layer of the workspace, providing:
//! - Standard normal density and cumulative distribution (`math::distributions`)
//! - The enumerated capability contract shared by legs and structures
//!   (`types::Attribute`, `traits::OptionAttributes`)
//! - Direction flags for long/short structures (`types::Direction`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use greeks_core::math::distributions::{norm_cdf, norm_pdf};
//! use greeks_core::types::{Attribute, Direction};
//!
//! // Normal kernel
//! let density = norm_pdf(0.0_f64);
//! assert!((density - 0.3989422804).abs() < 1e-7);
//! let probability = norm_cdf(0.0_f64);
//! assert!((probability - 0.5).abs() < 1e-7);
//!
//! // Capability names
//! assert_eq!(Attribute::Delta.name(), "delta");
//!
//! // Direction flags
//! let short: Direction = "short".parse().unwrap();
//! assert_eq!(short.signum::<f64>(), -1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Attribute` and `Direction`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
