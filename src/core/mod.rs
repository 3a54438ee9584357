mod compiler;
mod content;
mod document;
mod format;
mod scenario;
mod types;

pub use compiler::{FigureSet, compile, compile_checked};
pub use document::{Block, Column, Document, Entry, Figure};
pub use format::{currency, growth_rate, number, percent, round2, years};
pub use scenario::load_scenario;
pub use types::{FigureKind, FigureRef, FinancialGoals, ReportConfig, ScenarioRecord};
