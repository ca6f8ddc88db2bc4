//! Error types for the Extractor

use specpower_domain::FieldKind;
use thiserror::Error;

/// Errors that can occur while building field rules and schemas
///
/// Extraction itself never fails; a field that cannot be read becomes a
/// missing value in the record. These errors only come from assembling a
/// schema out of bad parts.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Regular expression failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Pattern lacks the `value` capture group the rule reads from
    #[error("Pattern has no 'value' capture group: {0}")]
    MissingCaptureGroup(String),

    /// Enumerated rule with no allowed variants
    #[error("Enumerated rule has no variants: {0}")]
    NoVariants(String),

    /// Field spec without any rule
    #[error("Field '{0}' has no extraction rules")]
    NoRules(String),

    /// A rule produces a different kind than its field declares
    #[error("Field '{field}' is {expected} but a rule produces {found}")]
    KindMismatch {
        /// Field name
        field: String,
        /// Declared field kind
        expected: FieldKind,
        /// Kind the rule produces
        found: FieldKind,
    },

    /// Two fields share a name
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    /// Schema without fields
    #[error("Schema has no fields")]
    EmptySchema,
}
