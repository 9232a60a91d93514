//! Entry point that turns tensile constants into every table the plate material needs.

use serde::Serialize;

use crate::damage::{DamageInitiationTable, ShearDamageInitiationTable};
use crate::errors::CurveError;
use crate::hardening::HardeningCurve;
use crate::material::MaterialConstants;
use crate::table::PlasticityTable;

/// Tables derived from one set of [`MaterialConstants`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialCurves {
    /// Constants the tables were derived from.
    pub constants: MaterialConstants,
    /// Fitted curve with unrounded breakpoints.
    pub curve: HardeningCurve,
    /// Rounded 20-row hardening table.
    pub plasticity: PlasticityTable,
    /// Ductile damage onset.
    pub ductile_damage: DamageInitiationTable,
    /// Shear damage onset.
    pub shear_damage: ShearDamageInitiationTable,
}

/// Derive the plasticity table and attach the calibrated damage tables.
///
/// # Errors
///
/// Returns [`CurveError::InvalidMaterialDomain`] when the constants cannot be fitted.
///
/// # Examples
/// ```
/// use shearbolt::{generate, MaterialConstants};
///
/// let curves = generate(&MaterialConstants::default()).expect("valid steel");
/// let last = curves.plasticity.rows()[19];
/// assert_eq!(last.true_stress, 862.0);
/// assert_eq!(last.true_plastic_strain, 0.688_837_181);
/// ```
pub fn generate(constants: &MaterialConstants) -> Result<MaterialCurves, CurveError> {
    let curve = HardeningCurve::fit(constants)?;
    let plasticity = PlasticityTable::from_curve(&curve);
    Ok(MaterialCurves {
        constants: *constants,
        curve,
        plasticity,
        ductile_damage: DamageInitiationTable::calibrated(),
        shear_damage: ShearDamageInitiationTable::calibrated(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_tables_ignore_constants() {
        let soft = MaterialConstants::new(70_000.0, 240.0, 260.0, 12.0, 60.0);
        let curves = generate(&soft).expect("valid aluminium");
        let reference = generate(&MaterialConstants::default()).expect("valid steel");
        assert_eq!(curves.ductile_damage, reference.ductile_damage);
        assert_eq!(curves.shear_damage, reference.shear_damage);
        assert_ne!(curves.plasticity, reference.plasticity);
    }

    #[test]
    fn invalid_constants_produce_no_tables() {
        let constants = MaterialConstants::new(200_000.0, 343.0, 300.0, 10.7, 100.0);
        assert!(generate(&constants).is_err());
    }
}
