#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod cards;
mod config;
mod damage;
mod errors;
mod generator;
mod hardening;
mod material;
mod table;

pub use cards::write_material_cards;
pub use config::{BoltConfig, ModelConfig, ModelMaterials, PlateConfig};
pub use damage::{
    DamageInitiationTable, DuctileDamageRow, ShearDamageInitiationTable, ShearDamageRow,
};
pub use errors::{CardError, ConfigError, CurveError, DomainViolation};
pub use generator::{generate, MaterialCurves};
pub use hardening::{
    hardening_exponent, uniform_strain, HardeningCurve, StressStrainPoint, CURVE_POINTS,
};
pub use material::{ElasticProperties, MaterialConstants, MaterialDefinition};
pub use table::{PlasticityRow, PlasticityTable, STRAIN_DECIMALS, STRESS_DECIMALS};
