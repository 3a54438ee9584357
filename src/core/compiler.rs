use std::fs::File;
use std::path::{Component, Path, PathBuf};

use super::content;
use super::document::{Block, Column, Document, Entry, Figure};
use super::format;
use super::types::{FigureKind, FigureRef, ReportConfig, ScenarioRecord};
use crate::error::ReportError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureSet {
    pub required_principal: FigureRef,
    pub yearly_contribution: FigureRef,
}

impl FigureSet {
    pub fn new(required_principal: impl Into<PathBuf>, yearly_contribution: impl Into<PathBuf>) -> Self {
        Self {
            required_principal: FigureRef {
                kind: FigureKind::RequiredPrincipal,
                path: required_principal.into(),
            },
            yearly_contribution: FigureRef {
                kind: FigureKind::YearlyContribution,
                path: yearly_contribution.into(),
            },
        }
    }

    pub fn ordered(&self) -> [&FigureRef; 2] {
        [&self.required_principal, &self.yearly_contribution]
    }

    /// Checks that every asset is a readable regular file, in report order.
    pub fn resolve(&self) -> Result<(), ReportError> {
        for figure in self.ordered() {
            let missing = |source| ReportError::MissingAsset {
                name: figure.kind.name(),
                path: figure.path.clone(),
                source,
            };
            let file = File::open(&figure.path).map_err(missing)?;
            let meta = file.metadata().map_err(missing)?;
            if !meta.is_file() {
                return Err(missing(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "not a regular file",
                )));
            }
            log::debug!("resolved {} at {}", figure.kind.name(), figure.path.display());
        }
        Ok(())
    }

    /// Rewrites the paths so they resolve from `dir`, the directory the report is
    /// written to. Typst and Markdown both look images up relative to the document.
    pub fn relative_to(&self, dir: &Path) -> Result<FigureSet, ReportError> {
        let base = dir.canonicalize().map_err(|source| ReportError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
        let rebase = |figure: &FigureRef| -> Result<FigureRef, ReportError> {
            let target = figure
                .path
                .canonicalize()
                .map_err(|source| ReportError::MissingAsset {
                    name: figure.kind.name(),
                    path: figure.path.clone(),
                    source,
                })?;
            Ok(FigureRef {
                kind: figure.kind,
                path: relative_path(&base, &target),
            })
        };
        Ok(FigureSet {
            required_principal: rebase(&self.required_principal)?,
            yearly_contribution: rebase(&self.yearly_contribution)?,
        })
    }
}

/// Path to `target` as seen from `base`. Both must be absolute; without a shared
/// root `target` is returned as is.
fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base: Vec<Component> = base.components().collect();
    let target_parts: Vec<Component> = target.components().collect();
    let common = base
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return target.to_path_buf();
    }

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part);
    }
    relative
}

/// Assembles the report. Pure: identical inputs give identical documents.
///
/// Assets are not touched here; call [`FigureSet::resolve`] first, or use
/// [`compile_checked`].
pub fn compile(record: &ScenarioRecord, figures: &FigureSet, config: &ReportConfig) -> Document {
    let mut blocks = Vec::with_capacity(8);

    blocks.push(Block::Heading(content::ASSUMPTIONS_HEADING.to_string()));
    blocks.push(assumptions(record, &config.currency_symbol));

    blocks.push(Block::Heading(content::GOALS_HEADING.to_string()));
    blocks.push(financial_goals(record));

    blocks.push(Block::Heading(content::ACCOUNTS_HEADING.to_string()));
    blocks.push(account_types());

    for figure in figures.ordered() {
        blocks.push(Block::Figure(Figure {
            path: figure.path.clone(),
            title: figure_title(figure.kind).to_string(),
            show_caption: config.show_captions,
        }));
    }

    Document {
        title: content::TITLE.to_string(),
        blocks,
    }
}

pub fn compile_checked(
    record: &ScenarioRecord,
    figures: &FigureSet,
    config: &ReportConfig,
) -> Result<Document, ReportError> {
    figures.resolve()?;
    Ok(compile(record, figures, config))
}

fn assumptions(record: &ScenarioRecord, currency_symbol: &str) -> Block {
    let inputs = Column {
        heading: content::INPUTS_COLUMN.to_string(),
        entries: vec![
            Entry::new(content::INVEST_PERIOD, format::years(record.invest_period)),
            Entry::new(content::RETIRE_PERIOD, format::years(record.retire_period)),
            Entry::new(content::EXPECTED_RETURN, format::percent(record.expected_return)),
            Entry::new(content::INFLATION_RATE, format::percent(record.inflation_rate)),
        ],
    };
    let income = Column {
        heading: content::INCOME_COLUMN.to_string(),
        entries: vec![
            Entry::new(content::PRE_TAX_INCOME, format::currency(record.pre_tax, currency_symbol)),
            Entry::new(content::POST_TAX_INCOME, format::currency(record.post_tax, currency_symbol)),
            Entry::new(
                content::RETIREMENT_INCOME,
                format::currency(record.retirement, currency_symbol),
            ),
        ],
    };
    Block::Columns(vec![inputs, income])
}

fn financial_goals(record: &ScenarioRecord) -> Block {
    let share = format::percent(record.financial_goals.supplemented);
    let growth = format::growth_rate(record.financial_goals.nobility);
    Block::Enumerated(vec![
        Entry::new(
            format!("{} ({share})", content::SUPPLEMENTED),
            content::supplemented_text(&share),
        ),
        Entry::new(content::SUSTAINABLE_RETIREMENT, content::SUSTAINABLE_RETIREMENT_TEXT),
        Entry::new(content::GENERATIONAL_WEALTH, content::GENERATIONAL_WEALTH_TEXT),
        Entry::new(content::NOBILITY, content::nobility_text(&growth)),
    ])
}

fn account_types() -> Block {
    Block::Described(
        content::ACCOUNT_TYPES
            .iter()
            .map(|(name, text)| Entry::new(*name, *text))
            .collect(),
    )
}

fn figure_title(kind: FigureKind) -> &'static str {
    match kind {
        FigureKind::RequiredPrincipal => content::REQUIRED_PRINCIPAL_TITLE,
        FigureKind::YearlyContribution => content::YEARLY_CONTRIBUTION_TITLE,
    }
}
