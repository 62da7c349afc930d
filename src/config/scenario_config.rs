use crate::domain::scenario::{Scenario, Step, DEFAULT_PROPERTY_NAME};
use crate::utils::error::{PropertyError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioInfo,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub description: Option<String>,
    pub property: Option<String>, // 錯誤訊息中使用的屬性名稱
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    Convention,
    Set,
    Print,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    pub action: StepAction,
    pub value: Option<String>,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入情境配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_str(&content)
    }

    /// 從 TOML 字串解析情境配置，解析後才替換字串欄位中的環境變數
    pub fn from_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| PropertyError::ConfigError {
            message: format!("Scenario TOML parsing error: {}", e),
        })?;

        config.substitute_env_vars()?;
        Ok(config)
    }

    /// 替換 `${VAR}` 環境變數，未定義的變數保持原樣
    fn substitute_env_vars(&mut self) -> Result<()> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PropertyError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let expand = |text: &mut String| {
            let expanded = re
                .replace_all(text.as_str(), |caps: &regex::Captures| {
                    let var_name = &caps[1];
                    std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
                })
                .into_owned();
            *text = expanded;
        };

        expand(&mut self.scenario.name);
        if let Some(description) = self.scenario.description.as_mut() {
            expand(description);
        }
        if let Some(property) = self.scenario.property.as_mut() {
            expand(property);
        }
        for step in &mut self.steps {
            if let Some(value) = step.value.as_mut() {
                expand(value);
            }
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("scenario.name", &self.scenario.name)?;

        if let Some(property) = &self.scenario.property {
            validation::validate_non_empty_string("scenario.property", property)?;
        }

        validation::validate_non_empty_list("steps", &self.steps)?;

        for (index, step) in self.steps.iter().enumerate() {
            let field = format!("steps[{}].value", index);
            match step.action {
                StepAction::Convention | StepAction::Set => {
                    validation::validate_required_field(&field, &step.value)?;
                }
                StepAction::Print => validation::validate_absent_field(&field, &step.value)?,
            }
        }

        Ok(())
    }

    /// 驗證後轉換為可執行的情境
    pub fn into_scenario(self) -> Result<Scenario> {
        self.validate()?;

        let steps = self
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, step)| match (step.action, step.value) {
                (StepAction::Convention, Some(value)) => Ok(Step::Convention(value)),
                (StepAction::Set, Some(value)) => Ok(Step::Set(value)),
                (StepAction::Print, _) => Ok(Step::Print),
                (StepAction::Convention | StepAction::Set, None) => {
                    Err(PropertyError::ConfigValidationError {
                        field: format!("steps[{}].value", index),
                        message: "Value is required".to_string(),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Scenario {
            name: self.scenario.name,
            description: self.scenario.description,
            property: self
                .scenario
                .property
                .unwrap_or_else(|| DEFAULT_PROPERTY_NAME.to_string()),
            steps,
        })
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        self.validate()
    }
}
