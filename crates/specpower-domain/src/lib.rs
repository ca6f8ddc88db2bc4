//! specpower Domain Layer
//!
//! This crate contains the data model shared by the extraction pipeline and
//! its consumers. It has no external dependencies and defines the value
//! objects every other crate speaks in.
//!
//! ## Key Concepts
//!
//! - **RawReport**: The text of one benchmark report, identified by its source
//! - **ExtractedValue**: A field result, either present or missing with a reason
//! - **Record**: One row per report, one value per schema field
//! - **Dataset**: The ordered rows of one ingestion run
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - No I/O; reading files is the loader's job
//! - Parsing rules live in `specpower-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod record;
pub mod report;
pub mod value;

// Re-exports for convenience
pub use field::{FieldKind, LoadPoint};
pub use record::{Dataset, FieldEntry, Record};
pub use report::RawReport;
pub use value::{ExtractedValue, FieldValue, MissingReason};
