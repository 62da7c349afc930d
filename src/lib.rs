pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::scenario_config::ScenarioConfig;
pub use crate::core::runner::ScenarioRunner;
pub use domain::property::{Property, ValueSource};
pub use domain::scenario::{Scenario, ScenarioReport, Step};
pub use utils::error::{PropertyError, Result};
