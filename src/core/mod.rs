pub mod runner;

pub use crate::domain::property::{Property, ValueSource};
pub use crate::domain::scenario::{Scenario, ScenarioReport, Step};
pub use crate::utils::error::Result;
