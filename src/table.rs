//! Rounded `(true stress, true plastic strain)` rows handed to the solver.

use std::fmt;

use serde::Serialize;

use crate::errors::CardError;
use crate::hardening::{HardeningCurve, StressStrainPoint};

/// Decimal places kept for true stress.
pub const STRESS_DECIMALS: usize = 6;

/// Decimal places kept for true plastic strain.
pub const STRAIN_DECIMALS: usize = 9;

/// Round to `places` decimals, choosing the decimal nearest the exact binary value.
///
/// Float formatting is correctly rounded, so going through text matches the reference
/// tables digit for digit where `(x * 10^p).round() / 10^p` can be off by one ulp.
fn round_decimal(value: f64, places: usize) -> f64 {
    // Formatting a finite f64 always produces a parseable literal.
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// One row of an isotropic hardening table.
///
/// Displays as the `stress, strain` data line of a `*Plastic` card.
///
/// # Examples
/// ```
/// use shearbolt::PlasticityRow;
///
/// let row = PlasticityRow { true_stress: 344.274245, true_plastic_strain: 0.001986745 };
/// assert_eq!(row.to_string(), "344.274245, 0.001986745");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlasticityRow {
    /// True stress in MPa.
    pub true_stress: f64,
    /// True plastic strain.
    pub true_plastic_strain: f64,
}

impl PlasticityRow {
    /// Round a curve point to the table precision.
    fn from_point(point: &StressStrainPoint) -> Self {
        Self {
            true_stress: round_decimal(point.true_stress, STRESS_DECIMALS),
            true_plastic_strain: round_decimal(point.true_plastic_strain, STRAIN_DECIMALS),
        }
    }
}

impl fmt::Display for PlasticityRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.true_stress, self.true_plastic_strain)
    }
}

/// Ordered hardening table whose first row starts plastic flow at zero plastic strain.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlasticityTable {
    /// Rows in increasing true stress.
    rows: Vec<PlasticityRow>,
}

impl PlasticityTable {
    /// Tabulate every point of a fitted curve.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{HardeningCurve, MaterialConstants, PlasticityTable};
    ///
    /// let curve = HardeningCurve::fit(&MaterialConstants::default()).expect("valid steel");
    /// let table = PlasticityTable::from_curve(&curve);
    /// assert_eq!(table.len(), 20);
    /// assert_eq!(table.rows()[0].true_plastic_strain, 0.0);
    /// ```
    #[must_use]
    pub fn from_curve(curve: &HardeningCurve) -> Self {
        Self {
            rows: curve.points().iter().map(PlasticityRow::from_point).collect(),
        }
    }

    /// Tabulate points `onset..=20`, treating `onset` as the start of plastic flow.
    ///
    /// The first retained row is pinned to zero plastic strain.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::OnsetOutOfRange`] when `onset` is not a point on the curve.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{CardError, HardeningCurve, MaterialConstants, PlasticityTable};
    ///
    /// let curve = HardeningCurve::fit(&MaterialConstants::default()).expect("valid steel");
    /// let table = PlasticityTable::from_onset(&curve, 8).expect("point 8 exists");
    /// assert_eq!(table.len(), 13);
    /// assert_eq!(table.rows()[0].true_plastic_strain, 0.0);
    ///
    /// let error = PlasticityTable::from_onset(&curve, 21).expect_err("past the last point");
    /// assert_eq!(error, CardError::OnsetOutOfRange { onset: 21, points: 20 });
    /// ```
    pub fn from_onset(curve: &HardeningCurve, onset: usize) -> Result<Self, CardError> {
        let points = curve.points();
        if onset == 0 || onset > points.len() {
            return Err(CardError::OnsetOutOfRange {
                onset,
                points: points.len(),
            });
        }
        let mut rows: Vec<PlasticityRow> = points[onset - 1..]
            .iter()
            .map(PlasticityRow::from_point)
            .collect();
        if let Some(first) = rows.first_mut() {
            first.true_plastic_strain = 0.0;
        }
        Ok(Self { rows })
    }

    /// Return the rows in order.
    #[must_use]
    pub fn rows(&self) -> &[PlasticityRow] {
        &self.rows
    }

    /// Return the number of rows.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{generate, MaterialConstants};
    ///
    /// let curves = generate(&MaterialConstants::default()).expect("valid steel");
    /// assert_eq!(curves.plasticity.len(), curves.plasticity.rows().len());
    /// assert!(!curves.plasticity.is_empty());
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return `true` when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return the rows as `(true stress, true plastic strain)` pairs.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{generate, MaterialConstants};
    ///
    /// let curves = generate(&MaterialConstants::default()).expect("valid steel");
    /// let pairs = curves.plasticity.pairs();
    /// assert_eq!(pairs[0], (0.0, 0.0));
    /// assert_eq!(pairs.len(), 20);
    /// assert!(pairs[19].0 > pairs[18].0);
    /// ```
    #[must_use]
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|row| (row.true_stress, row.true_plastic_strain))
            .collect()
    }
}
