use std::path::PathBuf;

use serde::Deserialize;

/// Financial assumptions and derived figures for one report.
///
/// Percentages are stored as given (`7.0` means 7%), currency amounts are annual
/// 2024 dollars.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRecord {
    pub invest_period: f64,
    pub retire_period: f64,
    pub expected_return: f64,
    pub inflation_rate: f64,
    pub pre_tax: f64,
    pub post_tax: f64,
    pub retirement: f64,
    pub financial_goals: FinancialGoals,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialGoals {
    pub supplemented: f64,
    pub nobility: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FigureKind {
    RequiredPrincipal,
    YearlyContribution,
}

impl FigureKind {
    pub fn name(self) -> &'static str {
        match self {
            FigureKind::RequiredPrincipal => "required_principal",
            FigureKind::YearlyContribution => "yearly_contribution",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureRef {
    pub kind: FigureKind,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub show_captions: bool,
    pub currency_symbol: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_captions: false,
            currency_symbol: "$".to_string(),
        }
    }
}
