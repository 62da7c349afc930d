use crate::domain::property::ValueSource;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROPERTY_NAME: &str = "property";

/// One action applied to the scenario's property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Convention(String),
    Set(String),
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub property: String,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// The `conventions` walkthrough from the property documentation.
    pub fn documented() -> Self {
        Self {
            name: "conventions".to_string(),
            description: Some("A convention is used until a value is set".to_string()),
            property: DEFAULT_PROPERTY_NAME.to_string(),
            steps: vec![
                Step::Convention("convention 1".to_string()),
                Step::Print,
                Step::Convention("convention 2".to_string()),
                Step::Print,
                Step::Set("value".to_string()),
                Step::Convention("ignored convention".to_string()),
                Step::Print,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub description: Option<String>,
    pub lines: Vec<String>,
    pub source: ValueSource,
}
