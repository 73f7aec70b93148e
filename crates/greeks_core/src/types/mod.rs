//! Shared types for the analytics workspace.

pub mod attribute;
pub mod direction;
pub mod error;

pub use attribute::Attribute;
pub use direction::Direction;
pub use error::PricingError;
