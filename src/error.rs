use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` must be a finite number, found {found}")]
    MalformedData { field: String, found: String },

    #[error("figure `{name}` not found or unreadable at {}", path.display())]
    MissingAsset {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("typst compile failed: {0}")]
    Typst(String),
}

impl ReportError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        ReportError::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn malformed(field: impl Into<String>, found: impl Into<String>) -> Self {
        ReportError::MalformedData {
            field: field.into(),
            found: found.into(),
        }
    }
}
