pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;

pub use core::rounder::{round_floats, NumericRounder};
pub use core::session::{compare_or_create, SnapshotSession, TestSnapshots};
pub use domain::model::{DiffReport, SnapshotOutcome};
pub use utils::error::{Result, SnapError};
