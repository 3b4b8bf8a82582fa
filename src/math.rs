//! Shared numerical primitives anchored on `nalgebra` and `num-complex`.

use nalgebra::Matrix2;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for beam parameters.
pub type CScalar = num_complex::Complex<Scalar>;
/// Convenient alias for two-by-two real matrices (ABCD ray transfer matrices).
pub type R2x2 = Matrix2<Scalar>;

/// Index of the first maximum of `values`, or `None` when empty.
///
/// NaN entries are skipped; an all-NaN slice reports index 0.
#[must_use]
pub fn argmax(values: &[Scalar]) -> Option<usize> {
    first_extremum(values, |v, best| v > best)
}

/// Index of the first minimum of `values`, or `None` when empty.
///
/// NaN entries are skipped; an all-NaN slice reports index 0.
#[must_use]
pub fn argmin(values: &[Scalar]) -> Option<usize> {
    first_extremum(values, |v, best| v < best)
}

fn first_extremum(values: &[Scalar], better: impl Fn(Scalar, Scalar) -> bool) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let mut best: Option<(usize, Scalar)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if !better(v, b) => {}
            _ => best = Some((i, v)),
        }
    }
    Some(best.map_or(0, |(i, _)| i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_first_occurrence() {
        assert_eq!(argmax(&[1.0, 3.0, 2.0, 3.0]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn argmin_prefers_first_occurrence() {
        assert_eq!(argmin(&[2.0, 0.5, 0.5, 1.0]), Some(1));
    }

    #[test]
    fn nan_does_not_win() {
        assert_eq!(argmax(&[Scalar::NAN, 1.0, 0.5]), Some(1));
        assert_eq!(argmin(&[0.5, Scalar::NAN]), Some(0));
        assert_eq!(argmax(&[Scalar::NAN, Scalar::NAN]), Some(0));
    }
}
