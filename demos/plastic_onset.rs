use shearbolt::{write_material_cards, ModelConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Start plastic flow at point 8 (95 % of yield) instead of the origin
    let config = ModelConfig {
        plastic_onset_point: 8,
        ..ModelConfig::default()
    };

    // Build the plate and bolt definitions and render their cards
    let materials = config.materials()?;
    print!("{}", write_material_cards(&materials.definitions())?);

    Ok(())
}
