//! Calibrated damage initiation tables for the connection plate.
//!
//! These are fixed calibration data. They do not depend on the tensile constants and
//! are passed to the solver exactly as listed.

use serde::Serialize;

/// One row of a ductile damage initiation table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DuctileDamageRow {
    /// Equivalent plastic strain at damage onset.
    pub fracture_strain: f64,
    /// Stress triaxiality.
    pub triaxiality: f64,
    /// Equivalent plastic strain rate.
    pub strain_rate: f64,
}

/// One row of a shear damage initiation table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShearDamageRow {
    /// Equivalent plastic strain at damage onset.
    pub fracture_strain: f64,
    /// Shear stress ratio.
    pub shear_stress_ratio: f64,
    /// Equivalent plastic strain rate.
    pub strain_rate: f64,
}

/// Fracture strain against stress triaxiality.
const DUCTILE_ROWS: [DuctileDamageRow; 4] = [
    ductile(4.0, -0.33, 0.0),
    ductile(2.4, 0.05, 0.0),
    ductile(1.6, 0.1, 0.0),
    ductile(0.402_277_608, 0.15, 0.0),
];

/// Pressure-sensitivity parameter of the shear criterion.
const SHEAR_KS: f64 = -0.2;

/// Fracture strain against shear stress ratio.
const SHEAR_ROWS: [ShearDamageRow; 5] = [
    shear(3.0, 1.65, 0.0),
    shear(0.901, 1.731, 0.0),
    shear(0.9, 1.732, 0.0),
    shear(0.901, 1.733, 0.0),
    shear(3.0, 1.8, 0.0),
];

/// Shorthand for a [`DuctileDamageRow`].
const fn ductile(fracture_strain: f64, triaxiality: f64, strain_rate: f64) -> DuctileDamageRow {
    DuctileDamageRow {
        fracture_strain,
        triaxiality,
        strain_rate,
    }
}

/// Shorthand for a [`ShearDamageRow`].
const fn shear(fracture_strain: f64, shear_stress_ratio: f64, strain_rate: f64) -> ShearDamageRow {
    ShearDamageRow {
        fracture_strain,
        shear_stress_ratio,
        strain_rate,
    }
}

/// Ductile damage onset as a function of stress triaxiality.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DamageInitiationTable {
    /// Rows in calibration order.
    rows: Vec<DuctileDamageRow>,
}

impl DamageInitiationTable {
    /// Return the calibrated plate table.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::DamageInitiationTable;
    ///
    /// let table = DamageInitiationTable::calibrated();
    /// assert_eq!(table.rows()[0].triaxiality, -0.33);
    /// ```
    #[must_use]
    pub fn calibrated() -> Self {
        Self {
            rows: DUCTILE_ROWS.to_vec(),
        }
    }

    /// Return the rows.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::DamageInitiationTable;
    ///
    /// let table = DamageInitiationTable::calibrated();
    /// assert_eq!(table.rows().len(), 4);
    /// assert!(table.rows().iter().all(|row| row.strain_rate == 0.0));
    /// ```
    #[must_use]
    pub fn rows(&self) -> &[DuctileDamageRow] {
        &self.rows
    }
}

/// Shear damage onset as a function of the shear stress ratio.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShearDamageInitiationTable {
    /// Pressure-sensitivity parameter `ks`.
    ks: f64,
    /// Rows in calibration order.
    rows: Vec<ShearDamageRow>,
}

impl ShearDamageInitiationTable {
    /// Return the calibrated plate table.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::ShearDamageInitiationTable;
    ///
    /// let table = ShearDamageInitiationTable::calibrated();
    /// assert_eq!(table.ks(), -0.2);
    /// assert_eq!(table.rows()[2].shear_stress_ratio, 1.732);
    /// ```
    #[must_use]
    pub fn calibrated() -> Self {
        Self {
            ks: SHEAR_KS,
            rows: SHEAR_ROWS.to_vec(),
        }
    }

    /// Return the pressure-sensitivity parameter.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::ShearDamageInitiationTable;
    ///
    /// assert!(ShearDamageInitiationTable::calibrated().ks() < 0.0);
    /// ```
    #[must_use]
    pub fn ks(&self) -> f64 {
        self.ks
    }

    /// Return the rows.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::ShearDamageInitiationTable;
    ///
    /// let table = ShearDamageInitiationTable::calibrated();
    /// let ratios: Vec<f64> = table.rows().iter().map(|row| row.shear_stress_ratio).collect();
    /// assert_eq!(ratios, [1.65, 1.731, 1.732, 1.733, 1.8]);
    /// ```
    #[must_use]
    pub fn rows(&self) -> &[ShearDamageRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ductile_table_matches_calibration() {
        let rows: Vec<(f64, f64, f64)> = DamageInitiationTable::calibrated()
            .rows()
            .iter()
            .map(|row| (row.fracture_strain, row.triaxiality, row.strain_rate))
            .collect();
        assert_eq!(
            rows,
            vec![
                (4.0, -0.33, 0.0),
                (2.4, 0.05, 0.0),
                (1.6, 0.1, 0.0),
                (0.402277608, 0.15, 0.0),
            ]
        );
    }

    #[test]
    fn shear_table_matches_calibration() {
        let table = ShearDamageInitiationTable::calibrated();
        assert_eq!(table.ks(), -0.2);
        let rows: Vec<(f64, f64, f64)> = table
            .rows()
            .iter()
            .map(|row| (row.fracture_strain, row.shear_stress_ratio, row.strain_rate))
            .collect();
        assert_eq!(
            rows,
            vec![
                (3.0, 1.65, 0.0),
                (0.901, 1.731, 0.0),
                (0.9, 1.732, 0.0),
                (0.901, 1.733, 0.0),
                (3.0, 1.8, 0.0),
            ]
        );
    }
}
