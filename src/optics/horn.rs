//! Waveguide horn antennas as Gaussian beam launchers.

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use log::info;

use crate::errors::{positive, OpticsError};
use crate::math::{CScalar, Scalar};
use crate::sweep::FrequencySweep;
use crate::units::{FrequencyUnit, LengthUnit};

use super::beam::{edge_taper, q_from_waist, waist_from_q, TaperScale};
use super::element::ElementOptions;
use super::matrix::AbcdMatrix;

/// Horn factor of a corrugated conical horn.
pub const DEFAULT_HORN_FACTOR: Scalar = 0.59;

/// Gaussian beam launched by a horn at one wavelength.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HornBeam {
    /// Beam parameter at the horn aperture.
    pub q: CScalar,
    /// Beam waist radius (m).
    pub waist: Scalar,
    /// Distance from the waist to the aperture (m).
    pub z_offset: Scalar,
}

/// Beam launched by a horn of slant length `slant_length`, aperture radius
/// `aperture_radius` and horn factor `horn_factor` (lengths in m) at `wavelength` (m).
///
/// Goldsmith eqs. 7.38a/b.
#[must_use]
pub fn horn_beam(
    slant_length: Scalar,
    aperture_radius: Scalar,
    horn_factor: Scalar,
    wavelength: Scalar,
) -> HornBeam {
    let w_ap = horn_factor * aperture_radius;
    let x = PI * w_ap * w_ap / (wavelength * slant_length);
    let waist = w_ap / (1.0 + x * x).sqrt();
    let z_offset = slant_length / (1.0 + (1.0 / x).powi(2));
    let q = AbcdMatrix::propagation(z_offset).transform(q_from_waist(waist, wavelength));
    HornBeam { q, waist, z_offset }
}

/// A horn antenna evaluated over a frequency sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct Horn {
    sweep: Arc<FrequencySweep>,
    slant_length: Scalar,
    aperture_radius: Scalar,
    horn_factor: Scalar,
    q: Vec<CScalar>,
    waist: Vec<Scalar>,
    z_offset: Vec<Scalar>,
    radius: Option<Scalar>,
    comment: String,
    unit: LengthUnit,
}

impl Horn {
    /// Builds a horn and its beam for every sample of `sweep`.
    ///
    /// `slant_length` and `aperture_radius` are in `options.units`.
    pub fn new(
        sweep: impl Into<Arc<FrequencySweep>>,
        slant_length: Scalar,
        aperture_radius: Scalar,
        horn_factor: Scalar,
        options: &ElementOptions,
    ) -> Result<Self, OpticsError> {
        let sweep = sweep.into();
        let unit = options.length_unit()?;
        let slant_length = positive("slant length", unit.to_si(slant_length))?;
        let aperture_radius = positive("aperture radius", unit.to_si(aperture_radius))?;
        let horn_factor = positive("horn factor", horn_factor)?;

        let beams: Vec<HornBeam> = sweep
            .wavelengths()
            .iter()
            .map(|&wavelength| horn_beam(slant_length, aperture_radius, horn_factor, wavelength))
            .collect();

        let horn = Self {
            q: beams.iter().map(|b| b.q).collect(),
            waist: beams.iter().map(|b| b.waist).collect(),
            z_offset: beams.iter().map(|b| b.z_offset).collect(),
            sweep,
            slant_length,
            aperture_radius,
            horn_factor,
            radius: options.radius_si(unit)?,
            comment: options.comment.clone(),
            unit,
        };
        if options.verbose {
            info!("{horn}");
        }
        Ok(horn)
    }

    /// Independent copy with a new label; the beam arrays are reused as-is.
    #[must_use]
    pub fn copy_with(&self, comment: impl Into<String>, verbose: bool) -> Self {
        let horn = Self {
            comment: comment.into(),
            ..self.clone()
        };
        if verbose {
            info!("{horn}");
        }
        horn
    }

    /// Frequency sweep the horn was evaluated on.
    #[must_use]
    pub fn sweep(&self) -> &Arc<FrequencySweep> {
        &self.sweep
    }

    /// Beam parameters at the aperture, one per sample.
    #[must_use]
    pub fn beam_parameters(&self) -> &[CScalar] {
        &self.q
    }

    /// Beam waist radii in meters, one per sample.
    #[must_use]
    pub fn aperture_waists(&self) -> &[Scalar] {
        &self.waist
    }

    /// Waist-to-aperture distances in meters, one per sample.
    #[must_use]
    pub fn z_offsets(&self) -> &[Scalar] {
        &self.z_offset
    }

    /// Beam waist radii converted to `unit`.
    pub fn waist(&self, unit: &str) -> Result<Vec<Scalar>, OpticsError> {
        let unit = LengthUnit::parse(unit)?;
        Ok(self.waist.iter().map(|&w| unit.from_si(w)).collect())
    }

    /// Waist-to-aperture distances converted to `unit`.
    pub fn z_offset(&self, unit: &str) -> Result<Vec<Scalar>, OpticsError> {
        let unit = LengthUnit::parse(unit)?;
        Ok(self.z_offset.iter().map(|&z| unit.from_si(z)).collect())
    }

    /// Waist at the sample nearest `frequency`, in `length_unit`.
    pub fn waist_at(
        &self,
        frequency: Scalar,
        frequency_unit: &str,
        length_unit: &str,
    ) -> Result<Scalar, OpticsError> {
        let idx = self.sweep.index_of(frequency, frequency_unit)?;
        Ok(LengthUnit::parse(length_unit)?.from_si(self.waist[idx]))
    }

    /// Z-offset at the sample nearest `frequency`, in `length_unit`.
    pub fn z_offset_at(
        &self,
        frequency: Scalar,
        frequency_unit: &str,
        length_unit: &str,
    ) -> Result<Scalar, OpticsError> {
        let idx = self.sweep.index_of(frequency, frequency_unit)?;
        Ok(LengthUnit::parse(length_unit)?.from_si(self.z_offset[idx]))
    }

    /// Slant length (m).
    #[must_use]
    pub fn slant_length(&self) -> Scalar {
        self.slant_length
    }

    /// Aperture radius (m).
    #[must_use]
    pub fn aperture_radius(&self) -> Scalar {
        self.aperture_radius
    }

    /// Horn factor.
    #[must_use]
    pub fn horn_factor(&self) -> Scalar {
        self.horn_factor
    }

    /// Optional clear-aperture radius for edge-taper analysis (m).
    #[must_use]
    pub fn radius(&self) -> Option<Scalar> {
        self.radius
    }

    /// Beam radius (m) at the horn aperture, one per sample.
    #[must_use]
    pub fn aperture_beam_radii(&self) -> Vec<Scalar> {
        self.q
            .iter()
            .zip(self.sweep.wavelengths())
            .map(|(&q, &wavelength)| waist_from_q(q, wavelength))
            .collect()
    }

    /// Edge taper of the clear aperture set by [`ElementOptions::radius`], one per
    /// sample; `None` when no radius was given.
    #[must_use]
    pub fn edge_taper(&self, scale: TaperScale) -> Option<Vec<Scalar>> {
        let radius = self.radius?;
        Some(
            self.aperture_beam_radii()
                .into_iter()
                .map(|w| edge_taper(w, radius, scale))
                .collect(),
        )
    }

    /// Descriptive label.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Frequency unit of the underlying sweep.
    #[must_use]
    pub fn frequency_unit(&self) -> FrequencyUnit {
        self.sweep.unit()
    }
}

impl fmt::Display for Horn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.unit;
        writeln!(f, "Horn: {}", self.comment)?;
        writeln!(f, "\tslen = {:5.2} {u}", u.from_si(self.slant_length))?;
        writeln!(f, "\tarad = {:5.2} {u}", u.from_si(self.aperture_radius))?;
        write!(f, "\thf   = {:5.2}", self.horn_factor)
    }
}
