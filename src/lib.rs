pub mod cli;
pub mod core;
pub mod error;
pub mod render;

pub use error::ReportError;
