//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpticsError {
    /// Raised when a unit name is not recognized.
    #[error("unrecognized {kind} unit '{unit}'")]
    InvalidUnit {
        /// The string that failed to parse.
        unit: String,
        /// Quantity the unit was meant for (`"distance"` or `"frequency"`).
        kind: &'static str,
    },
    /// Raised when construction parameters are ambiguous, insufficient or out of range.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Raised when the transmit and receive horns use different frequency sweeps.
    #[error(
        "horn frequencies must match: transmit sweep has {transmit} samples, receive sweep has {receive}"
    )]
    FrequencyMismatch {
        /// Sample count of the transmit horn's sweep.
        transmit: usize,
        /// Sample count of the receive horn's sweep.
        receive: usize,
    },
    /// Raised when a physical parameter is non-finite or non-physical.
    #[error("invalid value for {name}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value received (in SI units when already converted).
        value: Scalar,
    },
}

/// Checks that `value` is finite, reporting it under `name` otherwise.
pub(crate) fn finite(name: &'static str, value: Scalar) -> Result<Scalar, OpticsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OpticsError::InvalidParameter { name, value })
    }
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: Scalar) -> Result<Scalar, OpticsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(OpticsError::InvalidParameter { name, value })
    }
}

/// Checks that `value` is finite and non-zero.
pub(crate) fn nonzero(name: &'static str, value: Scalar) -> Result<Scalar, OpticsError> {
    if value.is_finite() && value != 0.0 {
        Ok(value)
    } else {
        Err(OpticsError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validators_reject_bad_values() {
        assert!(finite("d", Scalar::NAN).is_err());
        assert!(finite("d", -1.0).is_ok());
        assert!(positive("n", 0.0).is_err());
        assert!(positive("n", Scalar::INFINITY).is_err());
        assert!(nonzero("f", 0.0).is_err());
        assert_eq!(nonzero("f", -2.0), Ok(-2.0));
    }

    #[test]
    fn messages_name_the_problem() {
        let err = OpticsError::InvalidUnit {
            unit: "furlong".into(),
            kind: "distance",
        };
        assert_eq!(err.to_string(), "unrecognized distance unit 'furlong'");
        let err = OpticsError::FrequencyMismatch {
            transmit: 101,
            receive: 11,
        };
        assert!(err.to_string().contains("101"));
    }
}
