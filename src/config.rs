//! JSON model configuration for the plate and bolt materials.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;
use crate::generator::{generate, MaterialCurves};
use crate::material::{ElasticProperties, MaterialConstants, MaterialDefinition};
use crate::table::PlasticityTable;

/// Plate material: tensile constants plus the properties passed straight through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateConfig {
    /// Material name.
    pub name: String,
    /// Mass density in tonne/mm³.
    pub density: f64,
    /// Poisson's ratio.
    pub poisson_ratio: f64,
    /// Tensile constants that drive the hardening fit.
    pub constants: MaterialConstants,
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            name: "Plate".to_string(),
            density: 7.8e-6,
            poisson_ratio: 0.3,
            constants: MaterialConstants::default(),
        }
    }
}

/// Bolt material, modelled as linear elastic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoltConfig {
    /// Material name.
    pub name: String,
    /// Mass density in tonne/mm³.
    pub density: f64,
    /// Young's modulus in MPa.
    pub elastic_modulus: f64,
    /// Poisson's ratio.
    pub poisson_ratio: f64,
}

impl Default for BoltConfig {
    fn default() -> Self {
        Self {
            name: "Bolt".to_string(),
            density: 7.8e-6,
            elastic_modulus: 200_000.0,
            poisson_ratio: 0.3,
        }
    }
}

/// Everything needed to produce the material cards for one connection model.
///
/// Missing fields fall back to the reference connection.
///
/// # Examples
/// ```
/// use shearbolt::ModelConfig;
///
/// let config: ModelConfig = serde_json::from_str(r#"{ "job_name": "P2" }"#).expect("valid json");
/// assert_eq!(config.job_name, "P2");
/// assert_eq!(config.plate.name, "Plate");
/// assert_eq!(config.plastic_onset_point, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Job and model name.
    pub job_name: String,
    /// Plate material.
    pub plate: PlateConfig,
    /// Bolt material.
    pub bolt: BoltConfig,
    /// First curve point written to the `*Plastic` card (one-based).
    pub plastic_onset_point: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            job_name: "P1".to_string(),
            plate: PlateConfig::default(),
            bolt: BoltConfig::default(),
            plastic_onset_point: 1,
        }
    }
}

/// Definitions built from a [`ModelConfig`], ready for the card writer.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelMaterials {
    /// Derived plate curves.
    pub curves: MaterialCurves,
    /// Plate definition.
    pub plate: MaterialDefinition,
    /// Bolt definition.
    pub bolt: MaterialDefinition,
}

impl ModelMaterials {
    /// Return the definitions in deck order.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::ModelConfig;
    ///
    /// let materials = ModelConfig::default().materials().expect("reference model");
    /// let [plate, bolt] = materials.definitions();
    /// assert_eq!((plate.name.as_str(), bolt.name.as_str()), ("Plate", "Bolt"));
    /// ```
    #[must_use]
    pub fn definitions(&self) -> [MaterialDefinition; 2] {
        [self.plate.clone(), self.bolt.clone()]
    }
}

impl ModelConfig {
    /// Read a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not a valid configuration.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::{ConfigError, ModelConfig};
    ///
    /// let error = ModelConfig::from_path("does-not-exist.json").expect_err("no such file");
    /// assert!(matches!(error, ConfigError::Io { .. }));
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded model configuration");
        Ok(config)
    }

    /// Derive the plate curves and build both material definitions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Curve`] when the plate constants cannot be fitted and
    /// [`ConfigError::Card`] when the onset point or a scalar property is invalid.
    ///
    /// # Examples
    /// ```
    /// use shearbolt::ModelConfig;
    ///
    /// let config = ModelConfig { plastic_onset_point: 8, ..ModelConfig::default() };
    /// let materials = config.materials().expect("point 8 exists");
    /// assert_eq!(materials.plate.plasticity.map(|table| table.len()), Some(13));
    /// ```
    pub fn materials(&self) -> Result<ModelMaterials, ConfigError> {
        let curves = generate(&self.plate.constants)?;
        let plasticity = if self.plastic_onset_point == 1 {
            curves.plasticity.clone()
        } else {
            PlasticityTable::from_onset(&curves.curve, self.plastic_onset_point)?
        };
        let plate = MaterialDefinition::ductile_plate(
            self.plate.name.clone(),
            self.plate.density,
            ElasticProperties::new(
                self.plate.constants.elastic_modulus,
                self.plate.poisson_ratio,
            ),
            plasticity,
        );
        plate.validate()?;
        let bolt = MaterialDefinition::elastic(
            self.bolt.name.clone(),
            self.bolt.density,
            ElasticProperties::new(self.bolt.elastic_modulus, self.bolt.poisson_ratio),
        );
        bolt.validate()?;
        Ok(ModelMaterials {
            curves,
            plate,
            bolt,
        })
    }
}
