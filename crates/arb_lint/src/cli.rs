//! Command line arguments for `arb-lint`.
use std::path::PathBuf;

use anyhow::Context;
use arb_editor_service::EditorConfig;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Check ARB message files for malformed messages and mismatched metadata.
#[derive(Parser, Debug)]
#[command(name = "arb-lint", version, about)]
pub struct Cli {
    /// ARB files, or directories to search for `.arb` files.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// JSON file containing editor settings (`escapeCharacter`, `reportMissingMetadata`).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Apply every available quick fix and write the results back to disk.
    #[arg(long)]
    pub fix: bool,

    /// Override the character used to escape braces in messages.
    #[arg(long, value_name = "CHAR")]
    pub escape_character: Option<char>,

    /// Don't report messages without metadata in reference files.
    #[arg(long)]
    pub no_missing_metadata: bool,
}

impl Cli {
    /// Settings from the `--config` file, if any, with command line overrides applied on top.
    pub fn editor_config(&self) -> anyhow::Result<EditorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                EditorConfig::from_json(&content)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => EditorConfig::default(),
        };
        if let Some(escape_character) = self.escape_character {
            config.escape_character = escape_character;
        }
        if self.no_missing_metadata {
            config.report_missing_metadata = false;
        }
        Ok(config)
    }
}
