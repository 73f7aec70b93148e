//! # greeks_models: Closed-Form European Option Legs
//!
//! Single-option pricing objects ("legs") under three closed-form model
//! families:
//! - `equity`: Black-Scholes-Merton with continuous dividend yield
//! - `futures`: Black-76 on a futures price
//! - `binary`: cash-or-nothing digital options
//!
//! Each family owns a validated, immutable parameter struct; the
//! probability factors d1/d2 are derived once at construction and every
//! price/Greek query is a pure read. Equity legs implement the shared
//! [`greeks_core::traits::OptionAttributes`] capability surface and are
//! the building blocks for multi-leg structures; the futures and binary
//! families expose their narrower Greek sets as inherent methods.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports `f64` and `f32`
//! - **Validate once, query forever**: domain checks happen only in
//!   parameter constructors, never at query time
//! - **One normal kernel**: all densities and probabilities come from
//!   `greeks_core::math::distributions`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod binary;
pub mod equity;
pub mod futures;

pub use binary::{BinaryCall, BinaryParams, BinaryPut};
pub use equity::{EquityCall, EquityParams, EquityPut};
pub use futures::{FuturesCall, FuturesParams, FuturesPut};
