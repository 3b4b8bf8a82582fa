//! ABCD ray transfer matrices and the Gaussian beam transform.

use std::fmt;

use crate::math::{CScalar, R2x2, Scalar};

/// 2×2 ABCD matrix describing how an optical element transforms a Gaussian beam.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbcdMatrix(R2x2);

impl AbcdMatrix {
    /// Identity (no transformation): [[1, 0], [0, 1]].
    #[must_use]
    pub fn identity() -> Self {
        Self(R2x2::identity())
    }

    /// Constructs a matrix from explicit ABCD elements.
    #[must_use]
    pub fn from_abcd(a: Scalar, b: Scalar, c: Scalar, d: Scalar) -> Self {
        Self(R2x2::new(a, b, c, d))
    }

    /// Propagation over an optical path length `d` (m): [[1, d], [0, 1]].
    #[must_use]
    pub fn propagation(d: Scalar) -> Self {
        Self::from_abcd(1.0, d, 0.0, 1.0)
    }

    /// Thin focusing element of focal length `f` (m): [[1, 0], [-1/f, 1]].
    #[must_use]
    pub fn thin_lens(f: Scalar) -> Self {
        Self::from_abcd(1.0, 0.0, -1.0 / f, 1.0)
    }

    /// A element.
    #[must_use]
    pub fn a(&self) -> Scalar {
        self.0[(0, 0)]
    }

    /// B element.
    #[must_use]
    pub fn b(&self) -> Scalar {
        self.0[(0, 1)]
    }

    /// C element.
    #[must_use]
    pub fn c(&self) -> Scalar {
        self.0[(1, 0)]
    }

    /// D element.
    #[must_use]
    pub fn d(&self) -> Scalar {
        self.0[(1, 1)]
    }

    /// The underlying `nalgebra` matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &R2x2 {
        &self.0
    }

    /// ABCD determinant `ad - bc`; 1 for every lossless element in a uniform medium.
    #[must_use]
    pub fn determinant(&self) -> Scalar {
        self.a() * self.d() - self.b() * self.c()
    }

    /// Cascades this matrix with `next` (i.e., self followed by next).
    ///
    /// The beam meets `self` first, so the product is `next × self`.
    #[must_use]
    pub fn cascade(&self, next: &AbcdMatrix) -> AbcdMatrix {
        Self(next.0 * self.0)
    }

    /// Cascades a sequence from first to last. Returns identity for empty.
    #[must_use]
    pub fn cascade_all<'a>(list: impl IntoIterator<Item = &'a AbcdMatrix>) -> AbcdMatrix {
        let mut acc = AbcdMatrix::identity();
        for m in list {
            acc = acc.cascade(m);
        }
        acc
    }

    /// Transforms a beam parameter: `q_out = (A q + B) / (C q + D)`.
    #[must_use]
    pub fn transform(&self, q: CScalar) -> CScalar {
        (q * self.a() + self.b()) / (q * self.c() + self.d())
    }
}

impl Default for AbcdMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<R2x2> for AbcdMatrix {
    fn from(m: R2x2) -> Self {
        Self(m)
    }
}

impl fmt::Display for AbcdMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{:.6e}, {:.6e}], [{:.6e}, {:.6e}]]",
            self.a(),
            self.b(),
            self.c(),
            self.d()
        )
    }
}
