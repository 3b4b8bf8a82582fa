//! Gaussian beam optics: ABCD elements, horn antennas and complete systems.

/// ABCD ray transfer matrices.
pub mod matrix;
/// Beam parameter transforms, edge taper and horn coupling.
pub mod beam;
/// Optical elements and their composition.
pub mod element;
/// Horn antennas as Gaussian beam launchers.
pub mod horn;
/// Horn-to-horn systems and their reports.
pub mod system;

pub use beam::{
    aperture_for_taper, coupling, edge_taper, q_from_waist, radius_from_q, waist_from_q, TaperScale,
};
pub use element::{compose, compose_all, Category, Element, ElementKind, ElementOptions};
pub use horn::{horn_beam, Horn, HornBeam, DEFAULT_HORN_FACTOR};
pub use matrix::AbcdMatrix;
pub use system::{ElementSeries, ObjectBeam, ProfilePoint, System, SystemOptions};
