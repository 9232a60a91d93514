//! Hollomon-type hardening fit and the stress-strain ladder built from it.
//!
//! The exponent `n` is fitted so that a Ramberg-Osgood curve
//! `ε = σ/E + 0.002 (σ/Fty)^n` passes through the 0.2 % proof point and through the
//! ultimate strength at the uniform strain. See
//! <https://en.wikipedia.org/wiki/Ramberg%E2%80%93Osgood_relationship>.

use serde::Serialize;
use tracing::debug;

use crate::errors::{CurveError, DomainViolation};
use crate::material::MaterialConstants;

/// Number of breakpoints on every hardening curve.
pub const CURVE_POINTS: usize = 20;

/// Plastic strain at the proof stress.
const PROOF_OFFSET: f64 = 0.002;

/// One breakpoint on the hardening curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StressStrainPoint {
    /// Nominal stress in MPa.
    pub engineering_stress: f64,
    /// Nominal strain as a fraction.
    pub engineering_strain: f64,
    /// Cauchy stress in MPa.
    pub true_stress: f64,
    /// Logarithmic strain less the elastic part.
    pub true_plastic_strain: f64,
}

/// Increment rule for one band of the stress ladder.
#[derive(Clone, Copy, Debug)]
enum StressStep {
    /// `k * Fty / divisor`
    YieldOver(f64),
    /// `k * Fty * factor`
    YieldTimes(f64),
    /// `k * factor * (Ftu - Fty)`
    HardeningRangeTimes(f64),
}

impl StressStep {
    /// Offset of step `k` from the start of the band.
    fn offset(self, k: f64, constants: &MaterialConstants) -> f64 {
        let fty = constants.yield_strength;
        let ftu = constants.ultimate_strength;
        match self {
            Self::YieldOver(divisor) => k * fty / divisor,
            Self::YieldTimes(factor) => k * fty * factor,
            Self::HardeningRangeTimes(factor) => k * factor * (ftu - fty),
        }
    }
}

/// A run of equally spaced stresses measured from the last stress of the previous band.
#[derive(Clone, Copy, Debug)]
struct StressBand {
    /// First step multiplier in the band.
    first: u32,
    /// Last step multiplier in the band (inclusive).
    last: u32,
    /// Increment rule.
    step: StressStep,
}

/// Coarse steps through the elastic range, fine steps up to yield, then ten equal steps
/// from yield to ultimate. Point 20 repeats the last stress and is appended separately.
const LADDER: [StressBand; 3] = [
    StressBand {
        first: 0,
        last: 4,
        step: StressStep::YieldOver(5.0),
    },
    StressBand {
        first: 1,
        last: 4,
        step: StressStep::YieldTimes(0.05),
    },
    StressBand {
        first: 1,
        last: 10,
        step: StressStep::HardeningRangeTimes(0.1),
    },
];

/// Uniform strain at rupture as a fraction: elongation at rupture less the elastic
/// strain at the ultimate strength.
///
/// # Examples
/// ```
/// use approx::assert_relative_eq;
/// use shearbolt::{uniform_strain, MaterialConstants};
///
/// let strain = uniform_strain(&MaterialConstants::default());
/// assert_relative_eq!(strain, 0.104_845, epsilon = 1.0e-12);
/// ```
#[must_use]
pub fn uniform_strain(constants: &MaterialConstants) -> f64 {
    constants.rupture_strain / 100.0 - constants.ultimate_strength / constants.elastic_modulus
}

/// Fit the strain-hardening exponent `n`.
///
/// # Errors
///
/// Returns [`CurveError::InvalidMaterialDomain`] when the constants are invalid, the
/// uniform strain is not positive, or the fitted exponent is not positive and finite.
///
/// # Examples
/// ```
/// use approx::assert_relative_eq;
/// use shearbolt::{hardening_exponent, MaterialConstants};
///
/// let n = hardening_exponent(&MaterialConstants::default()).expect("valid steel");
/// assert_relative_eq!(n, 17.336_792_855_669, epsilon = 1.0e-9);
/// ```
pub fn hardening_exponent(constants: &MaterialConstants) -> Result<f64, CurveError> {
    constants.validate()?;
    let uniform_strain = uniform_strain(constants);
    if uniform_strain.is_nan() || uniform_strain <= 0.0 {
        return Err(DomainViolation::NonPositiveUniformStrain { uniform_strain }.into());
    }
    // Both terms in percent.
    let offset_ratio = 100.0 * uniform_strain / 0.2;
    let strength_ratio = constants.ultimate_strength / constants.yield_strength;
    let exponent = offset_ratio.ln() / strength_ratio.ln();
    if !(exponent.is_finite() && exponent > 0.0) {
        return Err(DomainViolation::InvalidHardeningExponent { exponent }.into());
    }
    Ok(exponent)
}

/// Engineering stresses for all [`CURVE_POINTS`] breakpoints.
fn engineering_stresses(constants: &MaterialConstants) -> Vec<f64> {
    let mut stresses = Vec::with_capacity(CURVE_POINTS);
    for band in LADDER {
        let base = stresses.last().copied().unwrap_or(0.0);
        for k in band.first..=band.last {
            stresses.push(base + band.step.offset(f64::from(k), constants));
        }
    }
    if let Some(&last) = stresses.last() {
        stresses.push(last);
    }
    stresses
}

/// Return `value` or a [`DomainViolation::NonFinite`] naming the quantity and point.
fn finite(value: f64, quantity: &'static str, point: usize) -> Result<f64, DomainViolation> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainViolation::NonFinite { quantity, point })
    }
}

/// The fitted curve: exponent plus [`CURVE_POINTS`] breakpoints in index order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HardeningCurve {
    /// Strain-hardening exponent `n`.
    hardening_exponent: f64,
    /// Breakpoints, point 1 first.
    points: Vec<StressStrainPoint>,
}

impl HardeningCurve {
    /// Fit the hardening law and evaluate every breakpoint.
    ///
    /// Points 1 to 19 follow the Ramberg-Osgood law. Point 20 keeps the ultimate stress
    /// but takes its strain from the ultimate compressive strain, marking rupture.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidMaterialDomain`] when the exponent cannot be fitted,
    /// any intermediate is not finite, or true stress decreases between points.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{HardeningCurve, MaterialConstants, CURVE_POINTS};
    ///
    /// let curve = HardeningCurve::fit(&MaterialConstants::default()).expect("valid steel");
    /// assert_eq!(curve.points().len(), CURVE_POINTS);
    /// assert!(curve.hardening_exponent() > 0.0);
    /// ```
    pub fn fit(constants: &MaterialConstants) -> Result<Self, CurveError> {
        let n = hardening_exponent(constants)?;
        let e = constants.elastic_modulus;
        let fty = constants.yield_strength;
        let rupture_strain = constants.ultimate_compressive_strain / 100.0;

        let mut points: Vec<StressStrainPoint> = Vec::with_capacity(CURVE_POINTS);
        for (idx, stress) in engineering_stresses(constants).into_iter().enumerate() {
            let point = idx + 1;
            let strain = if point == CURVE_POINTS {
                rupture_strain
            } else {
                stress / e + PROOF_OFFSET * (stress / fty).powf(n)
            };
            let strain = finite(strain, "engineering strain", point)?;
            let true_stress = finite(stress * (1.0 + strain), "true stress", point)?;
            // Plastic flow is measured from the first tabulated stress.
            let true_plastic_strain = if point == 1 {
                0.0
            } else {
                finite(
                    (1.0 + strain).ln() - true_stress / e,
                    "true plastic strain",
                    point,
                )?
            };
            if let Some(previous) = points.last() {
                if true_stress < previous.true_stress {
                    return Err(DomainViolation::DecreasingTrueStress {
                        point,
                        previous: previous.true_stress,
                        current: true_stress,
                    }
                    .into());
                }
            }
            points.push(StressStrainPoint {
                engineering_stress: stress,
                engineering_strain: strain,
                true_stress,
                true_plastic_strain,
            });
        }
        debug!(
            hardening_exponent = n,
            points = points.len(),
            "fitted hardening curve"
        );
        Ok(Self {
            hardening_exponent: n,
            points,
        })
    }

    /// Return the strain-hardening exponent.
    #[must_use]
    pub fn hardening_exponent(&self) -> f64 {
        self.hardening_exponent
    }

    /// Return the breakpoints, point 1 first.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{HardeningCurve, MaterialConstants};
    ///
    /// let curve = HardeningCurve::fit(&MaterialConstants::default()).expect("valid steel");
    /// assert_eq!(curve.points()[0].engineering_stress, 0.0);
    /// ```
    #[must_use]
    pub fn points(&self) -> &[StressStrainPoint] {
        &self.points
    }

    /// Retrieve a breakpoint by its one-based index.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{HardeningCurve, MaterialConstants};
    ///
    /// let curve = HardeningCurve::fit(&MaterialConstants::default()).expect("valid steel");
    /// assert_eq!(curve.point(20).map(|p| p.engineering_strain), Some(1.0));
    /// assert!(curve.point(0).is_none());
    /// ```
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&StressStrainPoint> {
        index.checked_sub(1).and_then(|idx| self.points.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn ladder_uses_three_step_policies() {
        let constants = MaterialConstants::default();
        let stresses = engineering_stresses(&constants);
        assert_eq!(stresses.len(), CURVE_POINTS);

        let expected_elastic = [0.0, 68.6, 137.2, 205.8, 274.4];
        for (actual, expected) in stresses[..5].iter().zip(expected_elastic) {
            assert_relative_eq!(*actual, expected, epsilon = 1.0e-12);
        }
        assert_relative_eq!(stresses[5] - stresses[4], 343.0 * 0.05, epsilon = 1.0e-9);
        assert_relative_eq!(stresses[8], 343.0, epsilon = 1.0e-12);
        assert_relative_eq!(stresses[9] - stresses[8], 8.8, epsilon = 1.0e-9);
        assert_relative_eq!(stresses[18], 431.0, epsilon = 1.0e-9);
        assert_eq!(stresses[19], stresses[18]);
    }

    #[test]
    fn uniform_strain_subtracts_elastic_part() {
        let strain = uniform_strain(&MaterialConstants::default());
        assert_relative_eq!(strain, 0.107 - 431.0 / 200_000.0, epsilon = 1.0e-15);
    }

    #[test]
    fn point_19_reaches_the_uniform_strain() {
        let constants = MaterialConstants::default();
        let curve = HardeningCurve::fit(&constants).expect("valid steel");
        let ultimate = curve.point(19).expect("point 19 present");
        assert_relative_eq!(
            ultimate.engineering_strain,
            constants.rupture_strain / 100.0,
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn point_accessor_is_one_based() {
        let curve = HardeningCurve::fit(&MaterialConstants::default()).expect("valid steel");
        assert!(curve.point(0).is_none());
        assert_eq!(curve.point(1), curve.points().first());
        assert_eq!(curve.point(20), curve.points().last());
        assert!(curve.point(21).is_none());
    }

    #[test]
    fn small_rupture_strain_is_rejected() {
        let constants = MaterialConstants::new(200_000.0, 343.0, 431.0, 0.2, 100.0);
        let error = hardening_exponent(&constants).expect_err("no uniform strain left");
        assert!(matches!(
            error,
            CurveError::InvalidMaterialDomain(DomainViolation::NonPositiveUniformStrain { .. })
        ));
    }

    #[test]
    fn uniform_strain_below_offset_gives_invalid_exponent() {
        // 0.3 % rupture strain leaves 0.0845 % uniform strain, under the 0.2 % offset.
        let constants = MaterialConstants::new(200_000.0, 343.0, 431.0, 0.3, 100.0);
        let error = HardeningCurve::fit(&constants).expect_err("negative exponent");
        assert!(matches!(
            error,
            CurveError::InvalidMaterialDomain(DomainViolation::InvalidHardeningExponent { .. })
        ));
    }

    #[test]
    fn short_rupture_point_breaks_monotonicity() {
        // 5 % ultimate compressive strain is below the 10.7 % strain at point 19.
        let constants = MaterialConstants::new(200_000.0, 343.0, 431.0, 10.7, 5.0);
        let error = HardeningCurve::fit(&constants).expect_err("stress drops at point 20");
        assert!(matches!(
            error,
            CurveError::InvalidMaterialDomain(DomainViolation::DecreasingTrueStress {
                point: 20,
                ..
            })
        ));
    }
}
