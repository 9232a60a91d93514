//! Keyword cards describing materials for the implicit solver's input deck.
//!
//! The output is a deck fragment meant to be pulled into a full model with `*Include`.

use std::fmt::Write;

use tracing::debug;

use crate::errors::CardError;
use crate::material::MaterialDefinition;

/// Append the cards for one material.
fn write_material(output: &mut String, material: &MaterialDefinition) {
    let name = material.name.trim();
    writeln!(output, "*Material, name={name}").expect("writing to string cannot fail");
    output.push_str("*Density\n");
    writeln!(output, "{},", material.density).expect("writing to string cannot fail");
    output.push_str("*Elastic\n");
    writeln!(
        output,
        "{}, {}",
        material.elastic.elastic_modulus, material.elastic.poisson_ratio
    )
    .expect("writing to string cannot fail");

    if let Some(plasticity) = &material.plasticity {
        output.push_str("*Plastic\n");
        for row in plasticity.rows() {
            writeln!(output, "{row}").expect("writing to string cannot fail");
        }
    }

    if let Some(ductile) = &material.ductile_damage {
        output.push_str("*Damage Initiation, criterion=DUCTILE\n");
        for row in ductile.rows() {
            writeln!(
                output,
                "{}, {}, {}",
                row.fracture_strain, row.triaxiality, row.strain_rate
            )
            .expect("writing to string cannot fail");
        }
    }

    if let Some(shear) = &material.shear_damage {
        writeln!(
            output,
            "*Damage Initiation, criterion=SHEAR, ks={}",
            shear.ks()
        )
        .expect("writing to string cannot fail");
        for row in shear.rows() {
            writeln!(
                output,
                "{}, {}, {}",
                row.fracture_strain, row.shear_stress_ratio, row.strain_rate
            )
            .expect("writing to string cannot fail");
        }
    }
}

/// Render material cards for every definition, separated by blank lines.
///
/// Every definition is validated before anything is written.
///
/// # Errors
///
/// Returns the first [`CardError`] raised by [`MaterialDefinition::validate`].
///
/// # Examples
/// ```
/// use shearbolt::{write_material_cards, ElasticProperties, MaterialDefinition};
///
/// let bolt = MaterialDefinition::elastic("Bolt", 7.8e-6, ElasticProperties::new(200_000.0, 0.3));
/// let cards = write_material_cards(&[bolt]).expect("valid bolt");
/// assert!(cards.starts_with("*Material, name=Bolt\n*Density\n"));
/// assert!(cards.contains("*Elastic\n200000, 0.3\n"));
/// ```
pub fn write_material_cards(materials: &[MaterialDefinition]) -> Result<String, CardError> {
    for material in materials {
        material.validate()?;
    }
    let mut output = String::new();
    for (idx, material) in materials.iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }
        write_material(&mut output, material);
    }
    debug!(materials = materials.len(), "rendered material cards");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::material::{ElasticProperties, MaterialConstants};

    fn plate() -> MaterialDefinition {
        let curves = generate(&MaterialConstants::default()).expect("valid steel");
        MaterialDefinition::ductile_plate(
            "Plate",
            7.8e-6,
            ElasticProperties::new(200_000.0, 0.3),
            curves.plasticity,
        )
    }

    #[test]
    fn plate_cards_contain_every_section_in_order() {
        let cards = write_material_cards(&[plate()]).expect("valid plate");
        let keywords: Vec<&str> = cards.lines().filter(|line| line.starts_with('*')).collect();
        assert_eq!(
            keywords,
            vec![
                "*Material, name=Plate",
                "*Density",
                "*Elastic",
                "*Plastic",
                "*Damage Initiation, criterion=DUCTILE",
                "*Damage Initiation, criterion=SHEAR, ks=-0.2",
            ]
        );
    }

    #[test]
    fn plastic_card_lists_all_rows() {
        let cards = write_material_cards(&[plate()]).expect("valid plate");
        let plastic: Vec<&str> = cards
            .lines()
            .skip_while(|line| *line != "*Plastic")
            .skip(1)
            .take_while(|line| !line.starts_with('*'))
            .collect();
        assert_eq!(plastic.len(), 20);
        assert_eq!(plastic[0], "0, 0");
        assert_eq!(plastic[8], "344.274245, 0.001986745");
        assert_eq!(plastic[19], "862, 0.688837181");
    }

    #[test]
    fn damage_cards_keep_literal_values() {
        let cards = write_material_cards(&[plate()]).expect("valid plate");
        assert!(cards.contains("0.402277608, 0.15, 0\n"));
        assert!(cards.contains("0.901, 1.733, 0\n"));
    }

    #[test]
    fn materials_are_separated_by_blank_line() {
        let bolt =
            MaterialDefinition::elastic("Bolt", 7.8e-6, ElasticProperties::new(200_000.0, 0.3));
        let cards = write_material_cards(&[plate(), bolt]).expect("valid materials");
        assert!(cards.contains("\n\n*Material, name=Bolt\n"));
    }

    #[test]
    fn nothing_is_written_for_invalid_material() {
        let bolt = MaterialDefinition::elastic("Bolt", -1.0, ElasticProperties::new(200_000.0, 0.3));
        let error = write_material_cards(&[plate(), bolt]).expect_err("negative density");
        assert!(matches!(error, CardError::NonPositiveDensity { .. }));
    }
}
