pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, RunConfig};

pub use crate::core::{
    cube::{check, is_cube_plus_one},
    engine::{ReportEngine, RunSummary},
    lucas::{lucas, LucasSequence, MAX_INDEX},
    report::SequenceReport,
};
pub use crate::domain::model::{CubeCheck, OutputFormat, ReportEntry, SequenceEntry};
pub use crate::utils::error::{LucasError, Result};
