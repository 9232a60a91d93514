//! Error types produced while deriving plasticity curves or writing material cards.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a hardening curve cannot be derived.
///
/// There is no recoverable path: a failed derivation means the configured constants do
/// not describe a ductile metal the hardening law can fit.
///
/// # Examples
///
/// ```
/// use shearbolt::{generate, CurveError, DomainViolation, MaterialConstants};
///
/// let constants = MaterialConstants::new(200_000.0, 343.0, 343.0, 10.7, 100.0);
/// let error = generate(&constants).expect_err("equal strengths rejected");
/// assert!(matches!(
///     error,
///     CurveError::InvalidMaterialDomain(DomainViolation::UltimateNotAboveYield { .. })
/// ));
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum CurveError {
    /// Returned when the constants fall outside the domain of the hardening law.
    #[error("invalid material domain: {0}")]
    InvalidMaterialDomain(#[source] DomainViolation),
}

/// Reason a set of material constants was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DomainViolation {
    /// Returned when an input constant is zero, negative or not finite.
    #[error("{quantity} must be positive and finite (received {value})")]
    NonPositiveConstant {
        /// Name of the offending constant.
        quantity: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when the ultimate strength does not exceed the yield strength.
    #[error("ultimate strength {ultimate} must exceed yield strength {yield_strength}")]
    UltimateNotAboveYield {
        /// Yield strength in MPa.
        yield_strength: f64,
        /// Ultimate strength in MPa.
        ultimate: f64,
    },
    /// Returned when the uniform strain at rupture is zero or negative.
    #[error("uniform strain at rupture must be positive (received {uniform_strain})")]
    NonPositiveUniformStrain {
        /// Uniform strain as a fraction.
        uniform_strain: f64,
    },
    /// Returned when the fitted hardening exponent is not strictly positive and finite.
    #[error("hardening exponent must be positive and finite (received {exponent})")]
    InvalidHardeningExponent {
        /// Fitted exponent.
        exponent: f64,
    },
    /// Returned when an intermediate quantity evaluates to NaN or infinity.
    #[error("{quantity} at point {point} is not finite")]
    NonFinite {
        /// Name of the quantity that overflowed.
        quantity: &'static str,
        /// One-based index of the curve point.
        point: usize,
    },
    /// Returned when true stress decreases between consecutive points.
    #[error("true stress decreases at point {point} ({previous} > {current})")]
    DecreasingTrueStress {
        /// One-based index of the point with the lower stress.
        point: usize,
        /// True stress at the preceding point.
        previous: f64,
        /// True stress at `point`.
        current: f64,
    },
}

impl From<DomainViolation> for CurveError {
    fn from(value: DomainViolation) -> Self {
        Self::InvalidMaterialDomain(value)
    }
}

/// Error returned when a material definition cannot be rendered as solver cards.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CardError {
    /// Returned when the material name is empty or contains a separator.
    #[error("material name {0:?} is not a valid keyword parameter")]
    InvalidName(String),
    /// Returned when the density is zero, negative or not finite.
    #[error("material {name:?} has non-positive density {density}")]
    NonPositiveDensity {
        /// Material name.
        name: String,
        /// Rejected density.
        density: f64,
    },
    /// Returned when the elastic modulus is zero, negative or not finite.
    #[error("material {name:?} has non-positive elastic modulus {elastic_modulus}")]
    NonPositiveElasticModulus {
        /// Material name.
        name: String,
        /// Rejected modulus in MPa.
        elastic_modulus: f64,
    },
    /// Returned when Poisson's ratio is outside the open interval (-1, 0.5).
    #[error("material {name:?} has Poisson's ratio {poisson_ratio} outside (-1, 0.5)")]
    PoissonRatioOutOfRange {
        /// Material name.
        name: String,
        /// Rejected ratio.
        poisson_ratio: f64,
    },
    /// Returned when the plastic onset point is outside the curve.
    #[error("plastic onset point {onset} is outside 1..={points}")]
    OnsetOutOfRange {
        /// Requested one-based onset point.
        onset: usize,
        /// Number of points available.
        points: usize,
    },
}

/// Error returned when a model configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the configuration file cannot be read.
    #[error("failed to read configuration {path:?}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the configuration file is not valid JSON for a model.
    #[error("failed to parse configuration {path:?}")]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// Returned when the plate constants cannot produce a hardening curve.
    #[error("plate material is invalid")]
    Curve(#[from] CurveError),
    /// Returned when a material definition is rejected.
    #[error("material definition is invalid")]
    Card(#[from] CardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_violation_converts_into_curve_error() {
        let violation = DomainViolation::NonPositiveUniformStrain {
            uniform_strain: -0.01,
        };
        let error: CurveError = violation.into();
        assert_eq!(error, CurveError::InvalidMaterialDomain(violation));
        assert!(error.to_string().starts_with("invalid material domain"));
    }

    #[test]
    fn messages_name_the_offending_quantity() {
        let error = DomainViolation::NonFinite {
            quantity: "engineering strain",
            point: 1,
        };
        assert_eq!(error.to_string(), "engineering strain at point 1 is not finite");
    }
}
