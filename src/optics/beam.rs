//! Gaussian beam propagation: the beam parameter `q` and what can be derived from it.
//!
//! All functions are pure and operate on one frequency sample; the `_all` variants
//! map them over sweep-aligned slices.
//!
//! Numeric policy: nothing here returns an error. A beam parameter without a
//! physical waist (`Im(-1/q) <= 0`) produces NaN or infinity following IEEE
//! semantics, and those values flow through to coupling and edge taper unchanged.

use std::f64::consts::PI;

use crate::constants::{PLANAR_REFERENCE_RADIUS, TAPER_DB_PER_NEPER};
use crate::math::{CScalar, Scalar};

use super::horn::Horn;
use super::matrix::AbcdMatrix;

/// Output scale of [`edge_taper`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaperScale {
    /// Power ratio `exp(-2a²/w²)`.
    Linear,
    /// `-10 log10` of the power ratio.
    #[default]
    Decibel,
}

/// Applies `matrix` to a beam parameter: `(A q + B) / (C q + D)`.
#[must_use]
pub fn transform(matrix: &AbcdMatrix, q: CScalar) -> CScalar {
    matrix.transform(q)
}

/// Applies `matrix` to every beam parameter of a sweep.
#[must_use]
pub fn transform_all(matrix: &AbcdMatrix, q: &[CScalar]) -> Vec<CScalar> {
    q.iter().map(|&q| matrix.transform(q)).collect()
}

/// Beam parameter at a waist of radius `waist` (only valid where the wavefront is flat).
#[must_use]
pub fn q_from_waist(waist: Scalar, wavelength: Scalar) -> CScalar {
    CScalar::new(0.0, PI * waist * waist / wavelength)
}

/// Beam radius `sqrt(λ / (π Im(-1/q)))` at the plane described by `q`.
#[must_use]
pub fn waist_from_q(q: CScalar, wavelength: Scalar) -> Scalar {
    (wavelength / (PI * (-q.inv()).im)).sqrt()
}

/// [`waist_from_q`] over sweep-aligned slices.
#[must_use]
pub fn waists_from_q(q: &[CScalar], wavelengths: &[Scalar]) -> Vec<Scalar> {
    q.iter()
        .zip(wavelengths)
        .map(|(&q, &wavelength)| waist_from_q(q, wavelength))
        .collect()
}

/// Wavefront radius of curvature `1 / Re(1/q)`; infinite at a waist.
#[must_use]
pub fn radius_from_q(q: CScalar) -> Scalar {
    1.0 / q.inv().re
}

/// Edge taper of an aperture of radius `aperture_radius` in a beam of radius `waist`.
#[must_use]
pub fn edge_taper(waist: Scalar, aperture_radius: Scalar, scale: TaperScale) -> Scalar {
    let taper = (-2.0 * aperture_radius.powi(2) / waist.powi(2)).exp();
    match scale {
        TaperScale::Linear => taper,
        TaperScale::Decibel => -10.0 * taper.log10(),
    }
}

/// Aperture radius giving an edge taper of `taper_db` in a beam of radius `waist`.
#[must_use]
pub fn aperture_for_taper(waist: Scalar, taper_db: Scalar) -> Scalar {
    waist * (taper_db / TAPER_DB_PER_NEPER).sqrt()
}

/// Power coupling between a beam and a horn's fundamental mode.
///
/// `q_out` is the beam at the horn aperture; it is propagated forward by the
/// horn's `z_offset` to the horn's waist plane and compared with a waist of
/// `horn_waist` and a flat wavefront. The result lies in `[0, 1]`.
#[must_use]
pub fn coupling(
    q_out: CScalar,
    horn_waist: Scalar,
    horn_z_offset: Scalar,
    wavelength: Scalar,
) -> Scalar {
    let q = AbcdMatrix::propagation(horn_z_offset).transform(q_out);
    let w = waist_from_q(q, wavelength);
    let r = radius_from_q(q);
    // (w/wh + wh/w)² rewritten as 4 + (w/wh - wh/w)² so rounding cannot push past 1.
    let size = w / horn_waist - horn_waist / w;
    let curvature = 1.0 / r - 1.0 / PLANAR_REFERENCE_RADIUS;
    let phase = PI * horn_waist * w / wavelength;
    4.0 / (4.0 + size * size + phase * phase * curvature * curvature)
}

/// [`coupling`] between sweep-aligned output beam parameters and `horn`.
#[must_use]
pub fn coupling_to_horn(q_out: &[CScalar], horn: &Horn) -> Vec<Scalar> {
    q_out
        .iter()
        .zip(horn.aperture_waists())
        .zip(horn.z_offsets())
        .zip(horn.sweep().wavelengths())
        .map(|(((&q, &w), &z), &wavelength)| coupling(q, w, z, wavelength))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    const WAVELENGTH: Scalar = 1.2e-3;

    #[test]
    fn waist_round_trips_through_q() {
        let q = q_from_waist(3.0e-3, WAVELENGTH);
        assert_relative_eq!(waist_from_q(q, WAVELENGTH), 3.0e-3, max_relative = 1e-12);
        assert!(radius_from_q(q).is_infinite());
    }

    #[test]
    fn beam_expands_away_from_waist() {
        let w0 = 2.0e-3;
        let q0 = q_from_waist(w0, WAVELENGTH);
        let z_r = q0.im;
        let q = transform(&AbcdMatrix::propagation(z_r), q0);
        // At one Rayleigh range the beam is √2 wider and R = 2 z_R.
        assert_relative_eq!(waist_from_q(q, WAVELENGTH), w0 * 2f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(radius_from_q(q), 2.0 * z_r, max_relative = 1e-12);
    }

    #[test]
    fn lens_at_focal_distance_images_waist() {
        let f = 0.16;
        let q0 = q_from_waist(4.0e-3, WAVELENGTH);
        let system = AbcdMatrix::propagation(f)
            .cascade(&AbcdMatrix::thin_lens(f))
            .cascade(&AbcdMatrix::propagation(f));
        let q = transform(&system, q0);
        // Output waist sits at the back focal plane.
        assert_abs_diff_eq!(q.re, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn transform_all_is_elementwise() {
        let m = AbcdMatrix::propagation(0.05);
        let q = vec![q_from_waist(1e-3, WAVELENGTH), q_from_waist(2e-3, WAVELENGTH)];
        let out = transform_all(&m, &q);
        assert_eq!(out.len(), 2);
        for (o, i) in out.iter().zip(&q) {
            assert_eq!(*o, m.transform(*i));
        }
    }

    #[test]
    fn non_physical_q_gives_nan_waist() {
        let q = CScalar::new(0.0, -1.0);
        assert!(waist_from_q(q, WAVELENGTH).is_nan());
    }

    #[test]
    fn edge_taper_matches_goldsmith_table() {
        let waist = 30.0;
        let radius = 1.2 * waist;
        assert_abs_diff_eq!(edge_taper(waist, radius, TaperScale::Decibel), 12.5, epsilon = 0.05);
        assert_relative_eq!(
            edge_taper(waist, radius, TaperScale::Linear),
            (-2.88f64).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn aperture_for_taper_inverts_edge_taper() {
        let waist = 12.0e-3;
        let radius = aperture_for_taper(waist, 30.0);
        assert_relative_eq!(
            edge_taper(waist, radius, TaperScale::Decibel),
            30.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn matched_beam_couples_perfectly() {
        let w = 2.5e-3;
        let q = q_from_waist(w, WAVELENGTH);
        assert_abs_diff_eq!(coupling(q, w, 0.0, WAVELENGTH), 1.0, epsilon = 1e-12);

        // A beam 5 mm before the horn's waist plane, with the horn offset 5 mm.
        let q_early = transform(&AbcdMatrix::propagation(-5.0e-3), q);
        assert_abs_diff_eq!(coupling(q_early, w, 5.0e-3, WAVELENGTH), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn size_mismatch_reduces_coupling() {
        let w = 2.0e-3;
        let q = q_from_waist(2.0 * w, WAVELENGTH);
        // Pure size mismatch: 4 / (2 + 1/2)² = 0.64.
        assert_relative_eq!(coupling(q, w, 0.0, WAVELENGTH), 0.64, max_relative = 1e-12);
    }

    #[test]
    fn coupling_stays_in_unit_interval() {
        let horn_waist = 1.9e-3;
        for i in 0..40 {
            let w = 0.5e-3 + 0.25e-3 * Scalar::from(i);
            for j in -10..=10 {
                let offset = 0.01 * Scalar::from(j);
                let q = transform(&AbcdMatrix::propagation(offset), q_from_waist(w, WAVELENGTH));
                let c = coupling(q, horn_waist, 0.004, WAVELENGTH);
                assert!((0.0..=1.0).contains(&c), "coupling {c} out of range");
            }
        }
    }
}
