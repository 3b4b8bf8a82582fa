//! Baseline physical constants and numerical conventions.
//!
//! ## Accuracy
//!
//! The speed of light is exact by SI definition (2019 revision). The remaining
//! values are conventions of the Gaussian beam formulas rather than measured
//! quantities.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Goldsmith, P. F. (1998). Quasioptical Systems: Gaussian Beam Quasioptical
//!   Propagation and Applications. IEEE Press.

use std::f64::consts::LN_10;

use crate::math::Scalar;

/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: Scalar = 299_792_458.0;

/// Radius of curvature (m) standing in for a planar wavefront in the coupling formula.
///
/// Its reciprocal must vanish to working precision; 1e50 m gives `1/R ≈ 1e-50`,
/// far below any curvature produced by a real system. Treat it as tunable, not as
/// a physical constant.
pub const PLANAR_REFERENCE_RADIUS: Scalar = 1.0e50;

/// Decibels per unit of `a²/w²` in the edge taper, `20 / ln 10 ≈ 8.686`.
pub const TAPER_DB_PER_NEPER: Scalar = 20.0 / LN_10;

/// Returns the free-space wavelength in meters for a given frequency in hertz.
#[inline]
#[must_use]
pub fn wavelength_from_frequency(hz: Scalar) -> Scalar {
    SPEED_OF_LIGHT / hz
}
