//! Convenience re-exports for building quasi-optical systems.

pub use crate::constants::*;
pub use crate::errors::OpticsError;
pub use crate::math::{argmax, argmin, CScalar, Scalar, R2x2};
pub use crate::optics::{
    aperture_for_taper, compose, compose_all, coupling, edge_taper, q_from_waist, radius_from_q,
    waist_from_q, AbcdMatrix, Category, Element, ElementKind, ElementOptions, ElementSeries, Horn,
    HornBeam, ObjectBeam, ProfilePoint, System, SystemOptions, TaperScale, DEFAULT_HORN_FACTOR,
};
pub use crate::sweep::{arange, linspace, FrequencySweep, SweepConfig};
pub use crate::units::{
    frequency_multiplier, frequency_unit_names, length_multiplier, length_unit_names,
    FrequencyUnit, LengthUnit,
};
