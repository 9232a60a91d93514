use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use shearbolt::{ConfigError, ModelConfig};

/// Derive plasticity tables and material cards for a double-shear bolted connection.
#[derive(Debug, Parser)]
#[command(name = "shearbolt", version)]
pub struct Cli {
    /// Print debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the fitted hardening curve.
    Curve {
        /// JSON model configuration; the reference plate is used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Emit the derived tables as JSON instead of a text report.
        #[arg(long)]
        json: bool,
    },
    /// Write *Material cards for the plate and bolt.
    Cards {
        /// JSON model configuration; the reference plate is used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Destination file; cards go to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load the configuration at `path`, or the reference model when there is none.
pub fn load_config(path: Option<&Path>) -> Result<ModelConfig, ConfigError> {
    match path {
        Some(path) => ModelConfig::from_path(path),
        None => Ok(ModelConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_cards_subcommand() {
        let cli = Cli::parse_from(["shearbolt", "cards", "--output", "plate.inp", "-v"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Cards { config, output } => {
                assert!(config.is_none());
                assert_eq!(output, Some(PathBuf::from("plate.inp")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn missing_config_uses_reference_model() {
        let config = load_config(None).expect("defaults available");
        assert_eq!(config, ModelConfig::default());
    }
}
