//! Error types for aggregation

use thiserror::Error;

/// Errors that can occur while summarizing a dataset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The dataset has no records
    #[error("Dataset is empty")]
    EmptyDataset,

    /// No record carries every field a summary needs
    #[error("No record has every field required for the {0} summary")]
    NoUsableRecords(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
