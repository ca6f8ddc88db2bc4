//! specpower Analysis
//!
//! Aggregates a loaded [`Dataset`](specpower_domain::Dataset) into per-year
//! summary tables. The dataset is only read, never modified.
//!
//! # Overview
//!
//! - **Year summary**: per-U idle and maximum power, CPU frequency and core
//!   density, scaled to rack and floor-area figures by a [`DensityConfig`]
//! - **Idle portion**: idle power as a fraction of maximum power, with mean
//!   and sample standard deviation per year
//! - **Residuals**: each record's idle portion against its year mean and the
//!   overall mean
//!
//! Every table ends with an `Overall` row.
//!
//! # Usage
//!
//! ```no_run
//! use specpower_analysis::{
//!     idle_portion_residuals, render_year_summary, summarize_by_year,
//!     summarize_idle_portion, DensityConfig,
//! };
//! use specpower_loader::{CorpusLoader, LoaderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = CorpusLoader::new(LoaderConfig::default()).load("data/")?;
//!
//! let years = summarize_by_year(&dataset, &DensityConfig::default())?;
//! println!("{}", render_year_summary(&years));
//!
//! let portions = summarize_idle_portion(&dataset)?;
//! let residuals = idle_portion_residuals(&dataset, &portions);
//! println!("{} residual rows", residuals.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! rack_units = 42.0
//! rack_footprint_m2 = 4.379
//! rack_fill_ratio = 0.47
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod idle;
mod stats;
mod year;

#[cfg(test)]
mod test_support;

pub use config::DensityConfig;
pub use error::AnalysisError;
pub use idle::{
    idle_portion, idle_portion_residuals, summarize_idle_portion, IdlePortionResidual,
    IdlePortionSummary,
};
pub use stats::YearKey;
pub use year::{render_year_summary, summarize_by_year, YearSummary};
