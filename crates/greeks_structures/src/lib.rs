//! # greeks_structures: Multi-Leg Option Structures
//!
//! Standard multi-leg strategies (straddles, strangles, spreads,
//! butterflies, iron condors and iron butterflies) composed from the
//! vanilla equity legs in `greeks_models`.
//!
//! Every structure is a fixed linear combination of calls and puts, and
//! price plus all Greeks are linear in the position. Each structure
//! therefore implements the same [`greeks_core::traits::OptionAttributes`]
//! capability surface as a single leg, answering every query with one
//! weighted fold over its legs:
//!
//! ```
//! use greeks_core::traits::OptionAttributes;
//! use greeks_core::types::Direction;
//! use greeks_structures::Straddle;
//!
//! let straddle =
//!     Straddle::new(55.0_f64, 50.0, 1.0, 0.0025, 0.15, 0.0, Direction::Long).unwrap();
//! let greeks = straddle.all_greeks();
//! assert_eq!(greeks["vega"], straddle.vega());
//! ```
//!
//! ## Design Principles
//!
//! - **Validate once**: strike/expiry ordering and wing symmetry are
//!   checked at construction; queries never fail
//! - **Exact decomposition**: a structure's attribute equals the
//!   weighted sum of its legs' attributes to floating-point exactness
//! - **Direction by sign**: `Direction::Short` negates every weight

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod compose;

pub mod butterfly;
pub mod iron_butterfly;
pub mod iron_condor;
pub mod spread;
pub mod straddle;
pub mod strangle;

pub use butterfly::Butterfly;
pub use iron_butterfly::IronButterfly;
pub use iron_condor::IronCondor;
pub use spread::{BearSpread, BullSpread, CalendarCallSpread, CalendarPutSpread};
pub use straddle::Straddle;
pub use strangle::Strangle;
