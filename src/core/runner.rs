use crate::domain::property::Property;
use crate::domain::scenario::{Scenario, ScenarioReport, Step};
use crate::utils::error::Result;

pub struct ScenarioRunner {
    scenario: Scenario,
}

impl ScenarioRunner {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// 依序套用每個步驟，並收集每次 `print` 的輸出行
    pub fn run(&self) -> Result<ScenarioReport> {
        tracing::info!(
            "▶️ Running scenario '{}' ({} steps)",
            self.scenario.name,
            self.scenario.steps.len()
        );

        if let Some(description) = &self.scenario.description {
            tracing::debug!("📝 {}", description);
        }

        let mut property = Property::named(self.scenario.property.clone());
        let mut lines = Vec::new();

        for (index, step) in self.scenario.steps.iter().enumerate() {
            match step {
                Step::Convention(value) => {
                    property.convention(value.clone());
                    tracing::debug!(
                        step = index,
                        source = %property.value_source(),
                        "convention set to {:?}",
                        value
                    );
                }
                Step::Set(value) => {
                    property.set(value.clone());
                    tracing::debug!(step = index, "value set to {:?}", value);
                }
                Step::Print => {
                    let value = property.get()?;
                    tracing::debug!(
                        step = index,
                        source = %property.value_source(),
                        "read {:?}",
                        value
                    );
                    lines.push(format!("value = {}", value));
                }
            }
        }

        tracing::info!(
            "✅ Scenario '{}' printed {} lines",
            self.scenario.name,
            lines.len()
        );

        Ok(ScenarioReport {
            scenario: self.scenario.name.clone(),
            description: self.scenario.description.clone(),
            lines,
            source: property.value_source(),
        })
    }
}
