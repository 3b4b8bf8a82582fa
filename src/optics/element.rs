//! Quasi-optical elements: propagation gaps, focusing objects and windows.

use std::fmt;

use log::info;

use crate::errors::{finite, nonzero, positive, OpticsError};
use crate::math::Scalar;
use crate::units::LengthUnit;

use super::matrix::AbcdMatrix;

/// Role an element plays in a system.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Moves the beam along the axis (free space, dielectric slabs).
    Propagation,
    /// Sits at a single plane: focusing optics and apertures.
    Object,
    /// Anything else, e.g. a composite of several elements.
    Generic,
}

/// Element variant with its physical parameters in SI units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementKind {
    /// Free-space gap of length `distance` (m).
    FreeSpace {
        /// Gap length (m).
        distance: Scalar,
    },
    /// Dielectric slab of `thickness` (m) and refractive `index`.
    Dielectric {
        /// Slab thickness (m).
        thickness: Scalar,
        /// Refractive index.
        index: Scalar,
    },
    /// Parabolic mirror.
    Mirror {
        /// Focal length (m).
        focal_length: Scalar,
    },
    /// Thin lens.
    ThinLens {
        /// Focal length (m).
        focal_length: Scalar,
    },
    /// Spherical mirror, focal length `R / 2`.
    SphericalMirror {
        /// Radius of curvature (m).
        radius_of_curvature: Scalar,
    },
    /// Ellipsoidal mirror imaging focus `d1` onto focus `d2`.
    EllipsoidalMirror {
        /// Distance to the input focus (m).
        d1: Scalar,
        /// Distance to the output focus (m).
        d2: Scalar,
    },
    /// Aperture with no beam transformation.
    Window,
    /// Product of other elements.
    Composite,
}

impl ElementKind {
    /// Category implied by the variant.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::FreeSpace { .. } | Self::Dielectric { .. } => Category::Propagation,
            Self::Mirror { .. }
            | Self::ThinLens { .. }
            | Self::SphericalMirror { .. }
            | Self::EllipsoidalMirror { .. }
            | Self::Window => Category::Object,
            Self::Composite => Category::Generic,
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::FreeSpace { .. } => "Freespace",
            Self::Dielectric { .. } => "Dielectric",
            Self::Mirror { .. } => "Mirror",
            Self::ThinLens { .. } => "Thin lens",
            Self::SphericalMirror { .. } => "Spherical mirror",
            Self::EllipsoidalMirror { .. } => "Ellipsoidal mirror",
            Self::Window => "Window",
            Self::Composite => "Composite",
        }
    }

    /// Focal length (m) for focusing variants.
    #[must_use]
    pub fn focal_length(&self) -> Option<Scalar> {
        match *self {
            Self::Mirror { focal_length } | Self::ThinLens { focal_length } => Some(focal_length),
            Self::SphericalMirror { radius_of_curvature } => Some(radius_of_curvature / 2.0),
            Self::EllipsoidalMirror { d1, d2 } => Some(d1 * d2 / (d1 + d2)),
            _ => None,
        }
    }

    /// Physical length along the axis (m); zero for objects.
    #[must_use]
    pub fn length(&self) -> Scalar {
        match *self {
            Self::FreeSpace { distance } => distance,
            Self::Dielectric { thickness, .. } => thickness,
            _ => 0.0,
        }
    }

    fn matrix(&self) -> AbcdMatrix {
        match *self {
            Self::FreeSpace { distance } => AbcdMatrix::propagation(distance),
            Self::Dielectric { thickness, index } => AbcdMatrix::propagation(thickness * index),
            Self::Window | Self::Composite => AbcdMatrix::identity(),
            _ => self
                .focal_length()
                .map_or_else(AbcdMatrix::identity, AbcdMatrix::thin_lens),
        }
    }
}

/// Options shared by every element and horn constructor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ElementOptions {
    /// Unit of every length-valued argument, including `radius`.
    pub units: String,
    /// Descriptive label.
    pub comment: String,
    /// Aperture radius used for edge-taper analysis.
    pub radius: Option<Scalar>,
    /// Log a summary after construction.
    pub verbose: bool,
}

impl Default for ElementOptions {
    fn default() -> Self {
        Self {
            units: String::from("mm"),
            comment: String::new(),
            radius: None,
            verbose: false,
        }
    }
}

impl ElementOptions {
    /// Default options: millimetres, no label, no aperture, quiet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length unit.
    #[must_use]
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Sets the descriptive label.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets the aperture radius (in `units`).
    #[must_use]
    pub fn radius(mut self, radius: Scalar) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Enables or disables the post-construction summary.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub(crate) fn length_unit(&self) -> Result<LengthUnit, OpticsError> {
        LengthUnit::parse(&self.units)
    }

    pub(crate) fn radius_si(&self, unit: LengthUnit) -> Result<Option<Scalar>, OpticsError> {
        self.radius
            .map(|r| positive("aperture radius", unit.to_si(r)))
            .transpose()
    }
}

/// A single quasi-optical element.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    matrix: AbcdMatrix,
    category: Category,
    length: Scalar,
    radius: Option<Scalar>,
    comment: String,
    unit: LengthUnit,
}

impl Element {
    /// Free-space propagation over `distance`.
    pub fn free_space(distance: Scalar, options: &ElementOptions) -> Result<Self, OpticsError> {
        let unit = options.length_unit()?;
        let distance = finite("distance", unit.to_si(distance))?;
        Self::assemble(ElementKind::FreeSpace { distance }, unit, options)
    }

    /// Propagation through a dielectric slab of refractive index `index`.
    pub fn dielectric(
        thickness: Scalar,
        index: Scalar,
        options: &ElementOptions,
    ) -> Result<Self, OpticsError> {
        let unit = options.length_unit()?;
        let thickness = finite("thickness", unit.to_si(thickness))?;
        let index = positive("refractive index", index)?;
        Self::assemble(ElementKind::Dielectric { thickness, index }, unit, options)
    }

    /// Reflection off a parabolic mirror.
    pub fn mirror(focal_length: Scalar, options: &ElementOptions) -> Result<Self, OpticsError> {
        let unit = options.length_unit()?;
        let focal_length = nonzero("focal length", unit.to_si(focal_length))?;
        Self::assemble(ElementKind::Mirror { focal_length }, unit, options)
    }

    /// Transmission through a thin lens.
    pub fn thin_lens(focal_length: Scalar, options: &ElementOptions) -> Result<Self, OpticsError> {
        let unit = options.length_unit()?;
        let focal_length = nonzero("focal length", unit.to_si(focal_length))?;
        Self::assemble(ElementKind::ThinLens { focal_length }, unit, options)
    }

    /// Reflection off a spherical mirror with the given radius of curvature.
    pub fn spherical_mirror(
        radius_of_curvature: Scalar,
        options: &ElementOptions,
    ) -> Result<Self, OpticsError> {
        let unit = options.length_unit()?;
        let radius_of_curvature = nonzero("radius of curvature", unit.to_si(radius_of_curvature))?;
        Self::assemble(ElementKind::SphericalMirror { radius_of_curvature }, unit, options)
    }

    /// Reflection off an ellipsoidal mirror with focal distances `d1` and `d2`.
    pub fn ellipsoidal_mirror(
        d1: Scalar,
        d2: Scalar,
        options: &ElementOptions,
    ) -> Result<Self, OpticsError> {
        let unit = options.length_unit()?;
        let d1 = finite("d1", unit.to_si(d1))?;
        let d2 = finite("d2", unit.to_si(d2))?;
        nonzero("d1 + d2", d1 + d2)?;
        nonzero("focal length", d1 * d2 / (d1 + d2))?;
        Self::assemble(ElementKind::EllipsoidalMirror { d1, d2 }, unit, options)
    }

    /// Aperture that leaves the beam untouched.
    pub fn window(options: &ElementOptions) -> Result<Self, OpticsError> {
        let unit = options.length_unit()?;
        Self::assemble(ElementKind::Window, unit, options)
    }

    /// Identity element; the neutral value of [`compose`].
    #[must_use]
    pub fn identity() -> Self {
        Self {
            kind: ElementKind::Composite,
            matrix: AbcdMatrix::identity(),
            category: Category::Generic,
            length: 0.0,
            radius: None,
            comment: String::from("Composite System"),
            unit: LengthUnit::default(),
        }
    }

    fn assemble(
        kind: ElementKind,
        unit: LengthUnit,
        options: &ElementOptions,
    ) -> Result<Self, OpticsError> {
        let element = Self {
            kind,
            matrix: kind.matrix(),
            category: kind.category(),
            length: kind.length(),
            radius: options.radius_si(unit)?,
            comment: options.comment.clone(),
            unit,
        };
        if options.verbose {
            info!("{element}");
        }
        Ok(element)
    }

    /// Variant and physical parameters.
    #[must_use]
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// ABCD matrix.
    #[must_use]
    pub fn matrix(&self) -> &AbcdMatrix {
        &self.matrix
    }

    /// Role of the element in a system.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// True for free space and dielectric slabs.
    #[must_use]
    pub fn is_propagation(&self) -> bool {
        self.category == Category::Propagation
    }

    /// True for mirrors, lenses and windows.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.category == Category::Object
    }

    /// Physical length along the axis (m).
    #[must_use]
    pub fn length(&self) -> Scalar {
        self.length
    }

    /// Aperture radius (m), if one was given.
    #[must_use]
    pub fn radius(&self) -> Option<Scalar> {
        self.radius
    }

    /// Descriptive label.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Unit used for display.
    #[must_use]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}

/// Composes two elements: `first` acts on the beam, then `second`.
///
/// The resulting matrix is `second × first`; lengths add.
#[must_use]
pub fn compose(first: &Element, second: &Element) -> Element {
    Element {
        kind: ElementKind::Composite,
        matrix: first.matrix.cascade(&second.matrix),
        category: Category::Generic,
        length: first.length + second.length,
        radius: None,
        comment: String::from("Composite System"),
        unit: first.unit,
    }
}

/// Composes a sequence left to right. Returns [`Element::identity`] for empty.
#[must_use]
pub fn compose_all<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Element {
    let mut iter = elements.into_iter();
    let Some(first) = iter.next() else {
        return Element::identity();
    };
    iter.fold(compose(&Element::identity(), first), |acc, e| compose(&acc, e))
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.unit;
        write!(f, "{}: {}", self.kind.name(), self.comment)?;
        match self.kind {
            ElementKind::FreeSpace { distance } => {
                write!(f, "\n\td = {:.1} {u}", u.from_si(distance))?;
            }
            ElementKind::Dielectric { thickness, index } => {
                write!(f, "\n\td = {:.1} {u}, n = {index:.1}", u.from_si(thickness))?;
            }
            ElementKind::SphericalMirror { radius_of_curvature } => {
                write!(f, "\n\tR = {:.1} {u}", u.from_si(radius_of_curvature))?;
            }
            ElementKind::EllipsoidalMirror { d1, d2 } => {
                write!(f, "\n\td1 = {:.1} {u}, d2 = {:.1} {u}", u.from_si(d1), u.from_si(d2))?;
            }
            ElementKind::Mirror { focal_length } | ElementKind::ThinLens { focal_length } => {
                write!(f, "\n\tf = {:.1} {u}", u.from_si(focal_length))?;
            }
            ElementKind::Window => {}
            ElementKind::Composite => write!(f, "\n\t{}", self.matrix)?,
        }
        if let Some(radius) = self.radius {
            write!(f, "\n\taperture radius = {:.1} {u}", u.from_si(radius))?;
        }
        Ok(())
    }
}
