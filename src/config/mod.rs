pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-snap")]
#[command(about = "A small snapshot tool for text artifacts")]
pub struct CliConfig {
    #[arg(long, help = "Input file to read (stdin when omitted)")]
    pub input: Option<String>,

    #[arg(long, help = "Round floating point numbers to this many significant digits")]
    pub digits: Option<usize>,

    #[arg(long, default_value = "__snapshots__")]
    pub snapshot_dir: String,

    #[arg(long, help = "Compare the input against this named snapshot instead of printing")]
    pub check: Option<String>,

    #[arg(long, help = "Update snapshots with the current input")]
    pub update: bool,

    #[arg(long, help = "Load settings from a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn snapshot_dir(&self) -> &str {
        &self.snapshot_dir
    }

    fn digits(&self) -> Option<usize> {
        self.digits
    }

    fn update_snapshots(&self) -> bool {
        self.update
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("snapshot_dir", &self.snapshot_dir)?;

        if let Some(digits) = self.digits {
            validation::validate_positive_number("digits", digits, 1)?;
        }

        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
        }

        if let Some(check) = &self.check {
            validation::validate_non_empty_string("check", check)?;
        }

        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }

        Ok(())
    }
}
