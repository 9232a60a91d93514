mod cli;
mod report;

use clap::Parser;
use cli::{load_config, Cli, Command};
use report::render_curve;
use shearbolt::write_material_cards;
use std::error::Error;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Curve { config, json } => {
            // Fit the hardening law for the plate and tabulate the 20 breakpoints.
            let config = load_config(config.as_deref())?;
            let materials = config.materials()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&materials.curves)?);
            } else {
                println!("{}", render_curve(&materials.curves));
            }
        }
        Command::Cards { config, output } => {
            // Plate first, then bolt, the order the section assignments expect.
            let config = load_config(config.as_deref())?;
            let materials = config.materials()?;
            let cards = write_material_cards(&materials.definitions())?;
            let deck = format!("** Materials for job {}\n{cards}", config.job_name);
            match output {
                Some(path) => {
                    fs::write(&path, deck)?;
                    info!(path = %path.display(), "wrote material cards");
                }
                None => print!("{deck}"),
            }
        }
    }

    Ok(())
}

/// Log to stderr; `--verbose` wins over `RUST_LOG`, which wins over the `warn` default.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
