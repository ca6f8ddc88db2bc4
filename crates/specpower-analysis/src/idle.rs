//! Idle-to-maximum power ratio by publication year

use crate::stats::{mean, sample_std, YearKey};
use crate::AnalysisError;
use serde::Serialize;
use specpower_domain::{Dataset, Record};
use std::collections::BTreeMap;
use tracing::debug;

/// One row of the idle-portion summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdlePortionSummary {
    /// Publication year, or the overall group
    pub key: YearKey,
    /// Records with an idle portion
    pub count: usize,
    /// Mean CPU frequency over records that report one (MHz)
    pub mean_cpu_frequency_mhz: Option<f64>,
    /// Mean of idle power / maximum power
    pub mean_idle_portion: Option<f64>,
    /// Sample standard deviation of the idle portion
    pub std_idle_portion: Option<f64>,
}

/// Deviation of one record's idle portion from its group means
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdlePortionResidual {
    /// Source of the record
    pub source: String,
    /// Publication year of the record
    pub year: Option<i64>,
    /// Portion minus the mean of the record's year
    pub by_year: Option<f64>,
    /// Portion minus the overall mean
    pub overall: Option<f64>,
}

/// Idle power divided by maximum power
pub fn idle_portion(record: &Record) -> Option<f64> {
    let max = record.max_power_w()?;
    let portion = record.idle_power_w()? / max;
    portion.is_finite().then_some(portion)
}

#[derive(Default)]
struct Samples {
    portions: Vec<f64>,
    cpu_mhz: Vec<f64>,
}

impl Samples {
    fn push(&mut self, record: &Record) {
        if let Some(portion) = idle_portion(record) {
            self.portions.push(portion);
        }
        if let Some(mhz) = record.cpu_frequency_mhz() {
            self.cpu_mhz.push(mhz as f64);
        }
    }

    fn summarize(&self, key: YearKey, count: usize) -> IdlePortionSummary {
        IdlePortionSummary {
            key,
            count,
            mean_cpu_frequency_mhz: mean(&self.cpu_mhz),
            mean_idle_portion: mean(&self.portions),
            std_idle_portion: sample_std(&self.portions),
        }
    }
}

/// Summarize the idle portion by publication year
///
/// Every record with a year lands in its year group, even without a portion.
/// Records without a year count only toward the `Overall` statistics. The
/// `Overall` count is the sum of the year counts.
pub fn summarize_idle_portion(dataset: &Dataset) -> Result<Vec<IdlePortionSummary>, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let mut by_year: BTreeMap<i64, Samples> = BTreeMap::new();
    let mut overall = Samples::default();
    for record in dataset {
        overall.push(record);
        if let Some(year) = record.publication_year() {
            by_year.entry(year).or_default().push(record);
        }
    }
    debug!(
        "Idle portion summary: {} years, {} of {} records with a portion",
        by_year.len(),
        overall.portions.len(),
        dataset.len()
    );

    let mut rows: Vec<IdlePortionSummary> = by_year
        .iter()
        .map(|(year, samples)| samples.summarize(YearKey::Year(*year), samples.portions.len()))
        .collect();
    let total = rows.iter().map(|row| row.count).sum();
    rows.push(overall.summarize(YearKey::Overall, total));
    Ok(rows)
}

/// Residuals of each record's idle portion against a summary
///
/// Rows follow dataset order. A residual is `None` when the record has no
/// portion or the matching summary row has no mean.
pub fn idle_portion_residuals(
    dataset: &Dataset,
    summary: &[IdlePortionSummary],
) -> Vec<IdlePortionResidual> {
    let means: BTreeMap<YearKey, f64> = summary
        .iter()
        .filter_map(|row| row.mean_idle_portion.map(|m| (row.key, m)))
        .collect();
    let overall_mean = means.get(&YearKey::Overall).copied();

    dataset
        .iter()
        .map(|record| {
            let portion = idle_portion(record);
            let year = record.publication_year();
            let year_mean = year.and_then(|y| means.get(&YearKey::Year(y)).copied());
            IdlePortionResidual {
                source: record.source().to_string(),
                year,
                by_year: portion.zip(year_mean).map(|(p, m)| p - m),
                overall: portion.zip(overall_mean).map(|(p, m)| p - m),
            }
        })
        .collect()
}
