use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::types::{FinancialGoals, ScenarioRecord};
use crate::error::ReportError;

const GOALS_KEY: &str = "financial_goals";

pub fn load_scenario(path: &Path) -> Result<ScenarioRecord, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let record = ScenarioRecord::from_json_str(&text)?;
    log::info!("loaded scenario from {}", path.display());
    Ok(record)
}

impl ScenarioRecord {
    pub fn from_json_str(text: &str) -> Result<Self, ReportError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Builds a record from parsed JSON, checking fields in declaration order and
    /// reporting the first one that is absent or not a finite number.
    ///
    /// Keys the report does not use are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ReportError> {
        let root = value
            .as_object()
            .ok_or_else(|| ReportError::malformed("(root)", describe(value)))?;

        let invest_period = number(root, "", "invest_period")?;
        let retire_period = number(root, "", "retire_period")?;
        let expected_return = number(root, "", "expected_return")?;
        let inflation_rate = number(root, "", "inflation_rate")?;
        let pre_tax = number(root, "", "pre_tax")?;
        let post_tax = number(root, "", "post_tax")?;
        let retirement = number(root, "", "retirement")?;

        let goals = match root.get(GOALS_KEY) {
            None => return Err(ReportError::missing(GOALS_KEY)),
            Some(Value::Object(goals)) => goals,
            Some(other) => return Err(ReportError::malformed(GOALS_KEY, describe(other))),
        };
        let prefix = format!("{GOALS_KEY}.");
        let financial_goals = FinancialGoals {
            supplemented: number(goals, &prefix, "supplemented")?,
            nobility: number(goals, &prefix, "nobility")?,
        };

        Ok(Self {
            invest_period,
            retire_period,
            expected_return,
            inflation_rate,
            pre_tax,
            post_tax,
            retirement,
            financial_goals,
        })
    }

    pub fn field(&self, name: &str) -> Option<f64> {
        let value = match name {
            "invest_period" => self.invest_period,
            "retire_period" => self.retire_period,
            "expected_return" => self.expected_return,
            "inflation_rate" => self.inflation_rate,
            "pre_tax" => self.pre_tax,
            "post_tax" => self.post_tax,
            "retirement" => self.retirement,
            "financial_goals.supplemented" => self.financial_goals.supplemented,
            "financial_goals.nobility" => self.financial_goals.nobility,
            _ => return None,
        };
        Some(value)
    }
}

fn number(obj: &Map<String, Value>, prefix: &str, key: &str) -> Result<f64, ReportError> {
    let Some(value) = obj.get(key) else {
        return Err(ReportError::missing(format!("{prefix}{key}")));
    };
    match value.as_f64() {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ReportError::malformed(format!("{prefix}{key}"), describe(value))),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
