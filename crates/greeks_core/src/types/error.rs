//! Error types for leg and structure construction.
//!
//! All validation happens once, at construction. Query operations on a
//! successfully constructed leg or structure are infallible pure reads,
//! so this is the complete error surface of the workspace.

use thiserror::Error;

/// Pricing construction errors.
///
/// # Variants
/// - `InvalidParameter`: a scalar input violates its domain constraint
/// - `InvalidStructure`: leg strikes/expiries violate an ordering or
///   symmetry relation required by a structure
/// - `InvalidDirection`: a direction flag is neither "long" nor "short"
///
/// # Examples
/// ```
/// use greeks_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter { name: "volatility", value: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A scalar parameter is outside its valid domain (non-positive
    /// price/strike/expiry/volatility, or negative dividend yield).
    #[error("Invalid parameter {name}: got {value}")]
    InvalidParameter {
        /// Name of the offending field
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Strikes or expiries violate the structure's required ordering or
    /// symmetry relation.
    #[error("Invalid structure: {constraint}")]
    InvalidStructure {
        /// The inequality that failed, with the offending values
        constraint: String,
    },

    /// A direction flag could not be parsed as long or short.
    #[error("Invalid direction: expected \"long\" or \"short\", got {direction:?}")]
    InvalidDirection {
        /// The rejected flag
        direction: String,
    },
}
