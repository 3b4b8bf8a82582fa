#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and optics conventions.
pub mod constants;
/// Length and frequency units.
pub mod units;
/// Scalar aliases and small numeric helpers.
pub mod math;
/// Frequency sweep construction and lookup.
pub mod sweep;
/// Gaussian beam optics.
pub mod optics;
/// Error types shared across the crate.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
