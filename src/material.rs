//! Material constants and solver-facing material definitions.

use serde::{Deserialize, Serialize};

use crate::damage::{DamageInitiationTable, ShearDamageInitiationTable};
use crate::errors::{CardError, DomainViolation};
use crate::table::PlasticityTable;

/// Tensile characterization of a ductile metal.
///
/// Stresses are in MPa. Strains are in percent, as they appear on mill certificates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialConstants {
    /// Young's modulus `E`.
    pub elastic_modulus: f64,
    /// 0.2 % proof (yield) strength `Fty`.
    pub yield_strength: f64,
    /// Ultimate tensile strength `Ftu`.
    pub ultimate_strength: f64,
    /// Elongation at rupture `Sr` in percent.
    pub rupture_strain: f64,
    /// Ultimate compressive strain `Scu` in percent.
    pub ultimate_compressive_strain: f64,
}

impl MaterialConstants {
    /// Create a set of constants.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::MaterialConstants;
    ///
    /// let steel = MaterialConstants::new(200_000.0, 343.0, 431.0, 10.7, 100.0);
    /// assert_eq!(steel, MaterialConstants::default());
    /// ```
    #[must_use]
    pub const fn new(
        elastic_modulus: f64,
        yield_strength: f64,
        ultimate_strength: f64,
        rupture_strain: f64,
        ultimate_compressive_strain: f64,
    ) -> Self {
        Self {
            elastic_modulus,
            yield_strength,
            ultimate_strength,
            rupture_strain,
            ultimate_compressive_strain,
        }
    }

    /// Check that every constant is positive and finite and that `Ftu > Fty`.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainViolation`] found.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{DomainViolation, MaterialConstants};
    ///
    /// assert!(MaterialConstants::default().validate().is_ok());
    ///
    /// let flat = MaterialConstants::new(200_000.0, 343.0, 343.0, 10.7, 100.0);
    /// assert!(matches!(
    ///     flat.validate(),
    ///     Err(DomainViolation::UltimateNotAboveYield { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), DomainViolation> {
        let checks = [
            ("elastic modulus", self.elastic_modulus),
            ("yield strength", self.yield_strength),
            ("ultimate strength", self.ultimate_strength),
            ("rupture strain", self.rupture_strain),
            ("ultimate compressive strain", self.ultimate_compressive_strain),
        ];
        for (quantity, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(DomainViolation::NonPositiveConstant { quantity, value });
            }
        }
        if self.ultimate_strength <= self.yield_strength {
            return Err(DomainViolation::UltimateNotAboveYield {
                yield_strength: self.yield_strength,
                ultimate: self.ultimate_strength,
            });
        }
        Ok(())
    }
}

impl Default for MaterialConstants {
    /// Structural steel plate used by the reference connection tests.
    fn default() -> Self {
        Self::new(200_000.0, 343.0, 431.0, 10.7, 100.0)
    }
}

/// Isotropic linear elastic pair passed through to the solver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElasticProperties {
    /// Young's modulus in MPa.
    pub elastic_modulus: f64,
    /// Poisson's ratio.
    pub poisson_ratio: f64,
}

impl ElasticProperties {
    /// Create an elastic pair.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::ElasticProperties;
    ///
    /// let steel = ElasticProperties::new(200_000.0, 0.3);
    /// assert_eq!(steel.poisson_ratio, 0.3);
    /// ```
    #[must_use]
    pub const fn new(elastic_modulus: f64, poisson_ratio: f64) -> Self {
        Self {
            elastic_modulus,
            poisson_ratio,
        }
    }
}

/// Everything the solver needs to define one named material.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialDefinition {
    /// Material name used by section assignments.
    pub name: String,
    /// Mass density in tonne/mm³.
    pub density: f64,
    /// Elastic constants.
    pub elastic: ElasticProperties,
    /// Isotropic hardening table, if the material yields.
    pub plasticity: Option<PlasticityTable>,
    /// Ductile damage onset, if modelled.
    pub ductile_damage: Option<DamageInitiationTable>,
    /// Shear damage onset, if modelled.
    pub shear_damage: Option<ShearDamageInitiationTable>,
}

impl MaterialDefinition {
    /// Define a purely elastic material such as the bolt.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{ElasticProperties, MaterialDefinition};
    ///
    /// let bolt = MaterialDefinition::elastic("Bolt", 7.8e-6, ElasticProperties::new(200_000.0, 0.3));
    /// assert!(bolt.plasticity.is_none());
    /// assert!(bolt.ductile_damage.is_none());
    /// ```
    #[must_use]
    pub fn elastic(name: impl Into<String>, density: f64, elastic: ElasticProperties) -> Self {
        Self {
            name: name.into(),
            density,
            elastic,
            plasticity: None,
            ductile_damage: None,
            shear_damage: None,
        }
    }

    /// Define an elastic-plastic plate material with both damage initiation criteria.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{generate, ElasticProperties, MaterialConstants, MaterialDefinition};
    ///
    /// let curves = generate(&MaterialConstants::default()).expect("valid steel");
    /// let plate = MaterialDefinition::ductile_plate(
    ///     "Plate",
    ///     7.8e-6,
    ///     ElasticProperties::new(200_000.0, 0.3),
    ///     curves.plasticity,
    /// );
    /// assert!(plate.shear_damage.is_some());
    /// ```
    #[must_use]
    pub fn ductile_plate(
        name: impl Into<String>,
        density: f64,
        elastic: ElasticProperties,
        plasticity: PlasticityTable,
    ) -> Self {
        Self {
            plasticity: Some(plasticity),
            ductile_damage: Some(DamageInitiationTable::calibrated()),
            shear_damage: Some(ShearDamageInitiationTable::calibrated()),
            ..Self::elastic(name, density, elastic)
        }
    }

    /// Check the scalar properties before the definition is handed to the solver.
    ///
    /// # Errors
    ///
    /// Returns [`CardError`] when the name cannot be used as a keyword parameter or a
    /// scalar property is out of range.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{CardError, ElasticProperties, MaterialDefinition};
    ///
    /// let elastic = ElasticProperties::new(200_000.0, 0.3);
    /// assert!(MaterialDefinition::elastic("Bolt", 7.8e-6, elastic).validate().is_ok());
    ///
    /// let unnamed = MaterialDefinition::elastic("Bolt, M16", 7.8e-6, elastic);
    /// assert!(matches!(unnamed.validate(), Err(CardError::InvalidName(_))));
    /// ```
    pub fn validate(&self) -> Result<(), CardError> {
        let name = self.name.trim();
        if name.is_empty() || name.contains(&[',', '\n', '\r'][..]) {
            return Err(CardError::InvalidName(self.name.clone()));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(CardError::NonPositiveDensity {
                name: self.name.clone(),
                density: self.density,
            });
        }
        let elastic_modulus = self.elastic.elastic_modulus;
        if !(elastic_modulus.is_finite() && elastic_modulus > 0.0) {
            return Err(CardError::NonPositiveElasticModulus {
                name: self.name.clone(),
                elastic_modulus,
            });
        }
        let poisson_ratio = self.elastic.poisson_ratio;
        if !(poisson_ratio > -1.0 && poisson_ratio < 0.5) {
            return Err(CardError::PoissonRatioOutOfRange {
                name: self.name.clone(),
                poisson_ratio,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_constants_are_valid() {
        MaterialConstants::default()
            .validate()
            .expect("reference steel accepted");
    }

    #[test]
    fn non_positive_constants_are_rejected() {
        let mut constants = MaterialConstants::default();
        constants.rupture_strain = 0.0;
        assert_eq!(
            constants.validate(),
            Err(DomainViolation::NonPositiveConstant {
                quantity: "rupture strain",
                value: 0.0,
            })
        );

        let mut constants = MaterialConstants::default();
        constants.elastic_modulus = f64::NAN;
        assert!(matches!(
            constants.validate(),
            Err(DomainViolation::NonPositiveConstant {
                quantity: "elastic modulus",
                ..
            })
        ));
    }

    #[test]
    fn ultimate_below_yield_is_rejected() {
        let constants = MaterialConstants::new(200_000.0, 431.0, 343.0, 10.7, 100.0);
        assert_eq!(
            constants.validate(),
            Err(DomainViolation::UltimateNotAboveYield {
                yield_strength: 431.0,
                ultimate: 343.0,
            })
        );
    }

    #[test]
    fn bolt_definition_has_no_inelastic_behaviour() {
        let bolt =
            MaterialDefinition::elastic("Bolt", 7.8e-6, ElasticProperties::new(200_000.0, 0.3));
        assert!(bolt.plasticity.is_none());
        assert!(bolt.ductile_damage.is_none());
        assert!(bolt.shear_damage.is_none());
        bolt.validate().expect("bolt definition accepted");
    }

    #[test]
    fn invalid_definitions_are_rejected() {
        let elastic = ElasticProperties::new(200_000.0, 0.3);

        let unnamed = MaterialDefinition::elastic("  ", 7.8e-6, elastic);
        assert_eq!(
            unnamed.validate(),
            Err(CardError::InvalidName("  ".to_string()))
        );

        let weightless = MaterialDefinition::elastic("Bolt", 0.0, elastic);
        assert!(matches!(
            weightless.validate(),
            Err(CardError::NonPositiveDensity { .. })
        ));

        let rubbery =
            MaterialDefinition::elastic("Bolt", 7.8e-6, ElasticProperties::new(200_000.0, 0.5));
        assert!(matches!(
            rubbery.validate(),
            Err(CardError::PoissonRatioOutOfRange { .. })
        ));
    }
}
