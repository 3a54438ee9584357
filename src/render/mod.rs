mod markdown;
mod typst;

use std::path::Path;

use crate::core::Document;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Typst,
    Markdown,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown") => {
                OutputFormat::Markdown
            }
            _ => OutputFormat::Typst,
        }
    }
}

pub fn render(doc: &Document, format: OutputFormat) -> String {
    let mut out = match format {
        OutputFormat::Typst => typst::render(doc),
        OutputFormat::Markdown => markdown::render(doc),
    };
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::{FigureSet, FinancialGoals, ReportConfig, ScenarioRecord, compile};

    pub fn example_document(config: &ReportConfig) -> crate::core::Document {
        let record = ScenarioRecord {
            invest_period: 30.0,
            retire_period: 25.0,
            expected_return: 7.0,
            inflation_rate: 3.0,
            pre_tax: 90_000.0,
            post_tax: 70_000.0,
            retirement: 60_000.0,
            financial_goals: FinancialGoals {
                supplemented: 50.0,
                nobility: 2.0,
            },
        };
        let figures = FigureSet::new("figs/required_principal.png", "figs/yearly_contribution.png");
        compile(&record, &figures, config)
    }
}
