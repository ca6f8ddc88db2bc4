//! specpower Extractor
//!
//! Turns the text of a SPECpower_ssj2008 result report into a typed
//! [`Record`](specpower_domain::Record).
//!
//! # Overview
//!
//! Report layouts drifted across benchmark revisions: labels moved, appeared,
//! disappeared, and changed units. Each field is therefore described by a
//! [`FieldSpec`] holding a priority-ordered list of [`FieldRule`]s; the first
//! rule that yields a value wins. A field that no rule can read becomes
//! `Missing` with a reason, and never stops extraction of the other fields.
//!
//! # Architecture
//!
//! ```text
//! RawReport → RecordBuilder → FieldSpec × N → FieldRule × M → Record
//! ```
//!
//! The built-in [`Schema`] is compiled once per process and shared by
//! reference.
//!
//! # Example Usage
//!
//! ```
//! use specpower_domain::RawReport;
//! use specpower_extractor::RecordBuilder;
//!
//! let report = RawReport::new(
//!     "power_ssj2008-20080612-00063.txt",
//!     "Form Factor: 1U\nCPU(s) Enabled: 4 cores, 1 chip, 4 cores/chip\n",
//! );
//!
//! let record = RecordBuilder::default().build(&report);
//!
//! assert_eq!(record.form_factor(), Some(1));
//! assert_eq!(record.cores_enabled(), Some(4));
//! assert_eq!(record.max_power_w(), None);
//! ```

#![warn(missing_docs)]

mod builder;
mod error;
mod parse;
mod rule;
mod schema;
pub mod standard;

#[cfg(test)]
mod tests;

pub use builder::RecordBuilder;
pub use error::ExtractorError;
pub use parse::normalize_whitespace;
pub use rule::{FieldRule, DEFAULT_CELL_WIDTH, VALUE_GROUP};
pub use schema::{FieldSpec, Schema};
pub use standard::standard_schema;
