//! specpower Loader
//!
//! Reads a directory of benchmark result reports into a
//! [`Dataset`](specpower_domain::Dataset), one record per matching file.
//!
//! The loader provides:
//! - Non-recursive enumeration of one directory
//! - Exact-suffix extension filtering (`report.txtx` does not match `txt`)
//! - Deterministic row order (sorted by file name unless configured otherwise)
//! - Optional parallel read and extraction
//!
//! A file whose fields are all missing still becomes a row. An unreadable
//! file aborts the run.
//!
//! # Examples
//!
//! ```no_run
//! use specpower_loader::{CorpusLoader, LoaderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = CorpusLoader::new(LoaderConfig::default());
//! let dataset = loader.load("data/")?;
//! println!("Loaded {} reports", dataset.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! extension = "txt"
//! row_order = "file_name"
//! parallel = false
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod loader;

pub use config::{LoaderConfig, RowOrder};
pub use error::LoaderError;
pub use loader::CorpusLoader;
