//! Capability traits implemented by legs and composed structures.

pub mod attributes;

pub use attributes::OptionAttributes;
