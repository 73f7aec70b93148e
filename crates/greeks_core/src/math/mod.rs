//! Numerical routines shared by every pricing model.

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
