//! Complete quasi-optical systems: a transmit horn, a chain of elements and a receive horn.

use std::fmt;

use log::{debug, info};

use crate::errors::{positive, OpticsError};
use crate::math::{argmax, CScalar, Scalar};
use crate::sweep::{arange, FrequencySweep};
use crate::units::FrequencyUnit;

use super::beam::{
    aperture_for_taper, coupling_to_horn, edge_taper, radius_from_q, transform_all, waist_from_q,
    waists_from_q, TaperScale,
};
use super::element::{compose_all, Element};
use super::horn::Horn;
use super::matrix::AbcdMatrix;

/// Options for [`System::new`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemOptions {
    /// Descriptive label.
    pub comment: String,
    /// Log a summary after construction.
    pub verbose: bool,
}

impl SystemOptions {
    /// Sets the descriptive label.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Enables or disables the post-construction summary.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Beam state just after an object element (mirror, lens or window).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBeam {
    /// Position of the element in the system's element list.
    pub index: usize,
    /// Element label.
    pub comment: String,
    /// Distance from the transmit horn aperture (m).
    pub position: Scalar,
    /// Element aperture radius (m), if any.
    pub radius: Option<Scalar>,
    /// Beam radius at the element (m), one per sample.
    pub waist: Vec<Scalar>,
}

impl ObjectBeam {
    /// Edge taper of the element's aperture, one per sample; `None` without a radius.
    #[must_use]
    pub fn edge_taper(&self, scale: TaperScale) -> Option<Vec<Scalar>> {
        let radius = self.radius?;
        Some(self.waist.iter().map(|&w| edge_taper(w, radius, scale)).collect())
    }

    /// Aperture radius (m) needed for an edge taper of `taper_db`, one per sample.
    #[must_use]
    pub fn required_aperture(&self, taper_db: Scalar) -> Vec<Scalar> {
        self.waist.iter().map(|&w| aperture_for_taper(w, taper_db)).collect()
    }
}

/// A labelled per-sample series tied to one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSeries {
    /// Position of the element in the system's element list.
    pub index: usize,
    /// Element label.
    pub comment: String,
    /// One value per frequency sample.
    pub values: Vec<Scalar>,
}

/// One point of a beam-radius profile along the optical axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance from the transmit horn aperture (m).
    pub distance: Scalar,
    /// Beam radius (m).
    pub waist: Scalar,
}

/// A transmit horn, the elements its beam passes through, and a receive horn.
#[derive(Debug, Clone)]
pub struct System {
    horn_tx: Horn,
    horn_rx: Horn,
    elements: Vec<Element>,
    matrix: AbcdMatrix,
    total_length: Scalar,
    q_out: Vec<CScalar>,
    waist_out: Vec<Scalar>,
    radius_out: Vec<Scalar>,
    coupling: Vec<Scalar>,
    comment: String,
}

impl System {
    /// Cascades `elements` (first element nearest the transmit horn) and evaluates the
    /// output beam and its coupling to the receive horn.
    ///
    /// Without `horn_rx`, the receive horn is a copy of `horn_tx`.
    pub fn new(
        horn_tx: Horn,
        elements: Vec<Element>,
        horn_rx: Option<Horn>,
        options: &SystemOptions,
    ) -> Result<Self, OpticsError> {
        let horn_rx = horn_rx.unwrap_or_else(|| horn_tx.copy_with("copy", false));
        if horn_rx.sweep() != horn_tx.sweep() {
            return Err(OpticsError::FrequencyMismatch {
                transmit: horn_tx.sweep().len(),
                receive: horn_rx.sweep().len(),
            });
        }

        let cascade = compose_all(&elements);
        let matrix = *cascade.matrix();
        let wavelengths = horn_tx.sweep().wavelengths();
        let q_out = transform_all(&matrix, horn_tx.beam_parameters());
        let waist_out = waists_from_q(&q_out, wavelengths);
        let radius_out = q_out.iter().map(|&q| radius_from_q(q)).collect();
        let coupling = coupling_to_horn(&q_out, &horn_rx);
        debug!(
            "Cascaded {} elements over {:.4} m: {matrix}",
            elements.len(),
            cascade.length()
        );

        let system = Self {
            horn_tx,
            horn_rx,
            elements,
            matrix,
            total_length: cascade.length(),
            q_out,
            waist_out,
            radius_out,
            coupling,
            comment: options.comment.clone(),
        };
        if options.verbose {
            info!("{system}");
        }
        Ok(system)
    }

    /// Coupling between the output beam and the receive horn, one per sample.
    #[must_use]
    pub fn coupling(&self) -> &[Scalar] {
        &self.coupling
    }

    /// Coupling in decibels (`10 log10`), one per sample.
    #[must_use]
    pub fn coupling_db(&self) -> Vec<Scalar> {
        self.coupling.iter().map(|c| 10.0 * c.log10()).collect()
    }

    fn best_index(&self) -> usize {
        argmax(&self.coupling).unwrap_or(0)
    }

    /// Highest coupling across the sweep.
    #[must_use]
    pub fn best_coupling(&self) -> Scalar {
        self.coupling[self.best_index()]
    }

    /// Frequency (Hz) of the highest coupling; the lowest such frequency on ties.
    #[must_use]
    pub fn best_coupling_frequency(&self) -> Scalar {
        self.sweep().frequencies()[self.best_index()]
    }

    /// Logs the best coupling and where it occurs, with the frequency in `unit`.
    pub fn log_best_coupling(&self, unit: &str) -> Result<(), OpticsError> {
        let unit = FrequencyUnit::parse(unit)?;
        info!(
            "Best coupling: {:.1} % at {:.1} {unit}",
            self.best_coupling() * 100.0,
            unit.from_si(self.best_coupling_frequency())
        );
        Ok(())
    }

    /// Beam state after every object element, in system order.
    #[must_use]
    pub fn object_beams(&self) -> Vec<ObjectBeam> {
        let q_in = self.horn_tx.beam_parameters();
        let wavelengths = self.sweep().wavelengths();
        let mut partial = AbcdMatrix::identity();
        let mut position = 0.0;
        let mut beams = Vec::new();
        for (index, element) in self.elements.iter().enumerate() {
            partial = partial.cascade(element.matrix());
            position += element.length();
            if element.is_object() {
                let q = transform_all(&partial, q_in);
                beams.push(ObjectBeam {
                    index,
                    comment: element.comment().to_string(),
                    position,
                    radius: element.radius(),
                    waist: waists_from_q(&q, wavelengths),
                });
            }
        }
        beams
    }

    /// Beam radius (m) at every object element.
    #[must_use]
    pub fn object_waists(&self) -> Vec<ElementSeries> {
        self.object_beams()
            .into_iter()
            .map(|beam| ElementSeries {
                index: beam.index,
                comment: beam.comment,
                values: beam.waist,
            })
            .collect()
    }

    /// Edge taper at every object element that has an aperture radius.
    #[must_use]
    pub fn edge_tapers(&self, scale: TaperScale) -> Vec<ElementSeries> {
        self.object_beams()
            .into_iter()
            .filter_map(|beam| {
                let values = beam.edge_taper(scale)?;
                Some(ElementSeries {
                    index: beam.index,
                    comment: beam.comment,
                    values,
                })
            })
            .collect()
    }

    /// Aperture radius (m) each object element needs for an edge taper of `taper_db`.
    #[must_use]
    pub fn required_apertures(&self, taper_db: Scalar) -> Vec<ElementSeries> {
        self.object_beams()
            .into_iter()
            .map(|beam| ElementSeries {
                index: beam.index,
                values: beam.required_aperture(taper_db),
                comment: beam.comment,
            })
            .collect()
    }

    /// Beam radius along the axis for one frequency sample.
    ///
    /// Propagation elements are sampled every `step` meters; the last point is the
    /// output plane. Distances are measured from the transmit horn aperture.
    pub fn waist_profile(
        &self,
        sample: usize,
        step: Scalar,
    ) -> Result<Vec<ProfilePoint>, OpticsError> {
        if sample >= self.sweep().len() {
            return Err(OpticsError::Configuration(format!(
                "sample index {sample} out of range for {} frequencies",
                self.sweep().len()
            )));
        }
        let step = positive("profile step", step)?;
        let q_in = self.horn_tx.beam_parameters()[sample];
        let wavelength = self.sweep().wavelengths()[sample];

        let mut profile = Vec::new();
        let mut partial = AbcdMatrix::identity();
        let mut offset = 0.0;
        for element in &self.elements {
            if element.is_propagation() && element.length() > 0.0 {
                // Optical path per unit of physical length (the refractive index).
                let index = element.matrix().b() / element.length();
                for d in arange(0.0, element.length(), step) {
                    let q = partial.cascade(&AbcdMatrix::propagation(d * index)).transform(q_in);
                    profile.push(ProfilePoint {
                        distance: offset + d,
                        waist: waist_from_q(q, wavelength),
                    });
                }
            }
            offset += element.length();
            partial = partial.cascade(element.matrix());
        }
        profile.push(ProfilePoint {
            distance: offset,
            waist: waist_from_q(partial.transform(q_in), wavelength),
        });
        Ok(profile)
    }

    /// Cascaded ABCD matrix of all elements.
    #[must_use]
    pub fn matrix(&self) -> &AbcdMatrix {
        &self.matrix
    }

    /// Frequency sweep shared by both horns.
    #[must_use]
    pub fn sweep(&self) -> &FrequencySweep {
        self.horn_tx.sweep()
    }

    /// Elements in propagation order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Transmitting horn.
    #[must_use]
    pub fn transmit_horn(&self) -> &Horn {
        &self.horn_tx
    }

    /// Receiving horn.
    #[must_use]
    pub fn receive_horn(&self) -> &Horn {
        &self.horn_rx
    }

    /// Beam parameter leaving the last element, one per sample.
    #[must_use]
    pub fn output_beam_parameters(&self) -> &[CScalar] {
        &self.q_out
    }

    /// Beam radius (m) leaving the last element, one per sample.
    #[must_use]
    pub fn output_waist(&self) -> &[Scalar] {
        &self.waist_out
    }

    /// Wavefront radius of curvature (m) leaving the last element, one per sample.
    #[must_use]
    pub fn output_radius(&self) -> &[Scalar] {
        &self.radius_out
    }

    /// Summed physical length of all elements (m).
    #[must_use]
    pub fn total_length(&self) -> Scalar {
        self.total_length
    }

    /// Descriptive label.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System: {}", self.comment)?;
        write!(f, "\t{}", self.matrix)
    }
}
