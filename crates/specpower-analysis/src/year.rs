//! Per-year power and core density summary

use crate::stats::{mean, YearKey};
use crate::{AnalysisError, DensityConfig};
use serde::Serialize;
use specpower_domain::{Dataset, Record};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// One row of the year summary
///
/// Power and core figures are normalized per rack unit (divided by the form
/// factor) before averaging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    /// Publication year, or the overall group
    pub key: YearKey,
    /// Mean idle power per U (W)
    pub adj_idle_power_w: f64,
    /// Mean maximum power per U (W)
    pub adj_max_power_w: f64,
    /// Records in the group
    pub count: usize,
    /// Mean CPU frequency (MHz)
    pub mean_cpu_frequency_mhz: f64,
    /// Mean enabled cores per U
    pub cores_per_u: f64,
    /// Idle power per m² of floor (W/m²)
    pub idle_power_density: f64,
    /// Maximum power per m² of floor (W/m²)
    pub max_power_density: f64,
    /// Enabled cores per rack
    pub cores_per_rack: f64,
}

impl fmt::Display for YearSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>7} | n={:<4} | idle {:>8.2} W/U | max {:>8.2} W/U | {:>7.1} MHz | {:>6.2} cores/U | idle {:>8.1} W/m² | max {:>8.1} W/m² | {:>7.1} cores/rack",
            self.key.to_string(),
            self.count,
            self.adj_idle_power_w,
            self.adj_max_power_w,
            self.mean_cpu_frequency_mhz,
            self.cores_per_u,
            self.idle_power_density,
            self.max_power_density,
            self.cores_per_rack
        )
    }
}

/// Per-U figures of a record with every required field
#[derive(Debug, Clone, Copy)]
struct Normalized {
    year: i64,
    adj_idle: f64,
    adj_max: f64,
    cpu_mhz: f64,
    cores_per_u: f64,
}

impl Normalized {
    fn from_record(record: &Record) -> Option<Self> {
        let form_factor = record.form_factor().filter(|u| *u > 0)? as f64;
        Some(Self {
            year: record.publication_year()?,
            adj_idle: record.idle_power_w()? / form_factor,
            adj_max: record.max_power_w()? / form_factor,
            cpu_mhz: record.cpu_frequency_mhz()? as f64,
            cores_per_u: record.cores_enabled()? as f64 / form_factor,
        })
    }
}

/// Summarize per-U power, CPU frequency and core density by publication year
///
/// Only records with year, a positive form factor, idle power, maximum
/// power, CPU frequency and enabled cores all present take part. Rows come
/// in ascending year order followed by the `Overall` row.
pub fn summarize_by_year(
    dataset: &Dataset,
    density: &DensityConfig,
) -> Result<Vec<YearSummary>, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    density.validate().map_err(AnalysisError::Config)?;

    let usable: Vec<Normalized> = dataset.iter().filter_map(Normalized::from_record).collect();
    debug!(
        "Year summary: {} of {} records usable",
        usable.len(),
        dataset.len()
    );
    if usable.is_empty() {
        return Err(AnalysisError::NoUsableRecords("year"));
    }

    let mut by_year: BTreeMap<i64, Vec<Normalized>> = BTreeMap::new();
    for row in &usable {
        by_year.entry(row.year).or_default().push(*row);
    }

    let mut rows: Vec<YearSummary> = by_year
        .iter()
        .filter_map(|(year, group)| summarize_group(YearKey::Year(*year), group, density))
        .collect();
    rows.extend(summarize_group(YearKey::Overall, &usable, density));
    Ok(rows)
}

fn summarize_group(
    key: YearKey,
    group: &[Normalized],
    density: &DensityConfig,
) -> Option<YearSummary> {
    let column = |f: fn(&Normalized) -> f64| group.iter().map(f).collect::<Vec<_>>();

    let adj_idle_power_w = mean(&column(|r| r.adj_idle))?;
    let adj_max_power_w = mean(&column(|r| r.adj_max))?;
    let cores_per_u = mean(&column(|r| r.cores_per_u))?;

    Some(YearSummary {
        key,
        adj_idle_power_w,
        adj_max_power_w,
        count: group.len(),
        mean_cpu_frequency_mhz: mean(&column(|r| r.cpu_mhz))?,
        cores_per_u,
        idle_power_density: density.power_density(adj_idle_power_w),
        max_power_density: density.power_density(adj_max_power_w),
        cores_per_rack: density.cores_per_rack(cores_per_u),
    })
}

/// Render summary rows as a plain-text table
pub fn render_year_summary(rows: &[YearSummary]) -> String {
    let mut lines = vec![
        "Year Summary".to_string(),
        "============".to_string(),
    ];
    lines.extend(rows.iter().map(|row| row.to_string()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let err = summarize_by_year(&Dataset::default(), &DensityConfig::default()).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyDataset);
    }

    #[test]
    fn test_groups_by_year_with_overall_last() {
        let dataset = Dataset::new(vec![
            record("a", Some(2009), Some(1), Some(70.0), Some(180.0), Some(1800), Some(12)),
            record("b", Some(2008), Some(2), Some(140.0), Some(272.0), Some(2833), Some(8)),
            record("c", Some(2009), Some(1), Some(80.0), Some(200.0), Some(2200), Some(4)),
        ]);

        let rows = summarize_by_year(&dataset, &DensityConfig::default()).unwrap();
        let keys: Vec<YearKey> = rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, [YearKey::Year(2008), YearKey::Year(2009), YearKey::Overall]);

        let y2008 = &rows[0];
        assert_eq!(y2008.count, 1);
        assert!(approx(y2008.adj_idle_power_w, 70.0));
        assert!(approx(y2008.adj_max_power_w, 136.0));
        assert!(approx(y2008.cores_per_u, 4.0));

        let y2009 = &rows[1];
        assert_eq!(y2009.count, 2);
        assert!(approx(y2009.adj_idle_power_w, 75.0));
        assert!(approx(y2009.mean_cpu_frequency_mhz, 2000.0));
        assert!(approx(y2009.cores_per_u, 8.0));

        let overall = &rows[2];
        assert_eq!(overall.count, 3);
        assert!(approx(overall.adj_idle_power_w, (70.0 + 70.0 + 80.0) / 3.0));
    }

    #[test]
    fn test_density_columns_follow_config() {
        let dataset = Dataset::new(vec![record(
            "a",
            Some(2010),
            Some(1),
            Some(100.0),
            Some(200.0),
            Some(2000),
            Some(10),
        )]);
        let density = DensityConfig::default();

        let rows = summarize_by_year(&dataset, &density).unwrap();
        let row = &rows[0];
        assert!(approx(row.idle_power_density, 100.0 * 42.0 / 4.379 * 0.47));
        assert!(approx(row.max_power_density, 200.0 * 42.0 / 4.379 * 0.47));
        assert!(approx(row.cores_per_rack, 10.0 * 42.0 * 0.47));
    }

    #[test]
    fn test_incomplete_records_are_dropped() {
        let dataset = Dataset::new(vec![
            record("ok", Some(2009), Some(1), Some(70.0), Some(180.0), Some(1800), Some(12)),
            record("no-ff", Some(2009), None, Some(70.0), Some(180.0), Some(1800), Some(12)),
            record("zero-ff", Some(2009), Some(0), Some(70.0), Some(180.0), Some(1800), Some(12)),
            record("no-year", None, Some(1), Some(70.0), Some(180.0), Some(1800), Some(12)),
            record("no-idle", Some(2009), Some(1), None, Some(180.0), Some(1800), Some(12)),
        ]);

        let rows = summarize_by_year(&dataset, &DensityConfig::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].key, YearKey::Overall);
        assert_eq!(rows[1].count, 1);
    }

    #[test]
    fn test_no_usable_records() {
        let dataset = Dataset::new(vec![record("a", None, None, None, None, None, None)]);
        let err = summarize_by_year(&dataset, &DensityConfig::default()).unwrap_err();
        assert_eq!(err, AnalysisError::NoUsableRecords("year"));
    }

    #[test]
    fn test_invalid_density_config() {
        let dataset = Dataset::new(vec![record("a", None, None, None, None, None, None)]);
        let density = DensityConfig {
            rack_fill_ratio: 0.0,
            ..DensityConfig::default()
        };
        assert!(matches!(
            summarize_by_year(&dataset, &density),
            Err(AnalysisError::Config(_))
        ));
    }

    #[test]
    fn test_render_year_summary() {
        let dataset = Dataset::new(vec![record(
            "a",
            Some(2008),
            Some(1),
            Some(69.5),
            Some(136.0),
            Some(2833),
            Some(4),
        )]);
        let rows = summarize_by_year(&dataset, &DensityConfig::default()).unwrap();
        let table = render_year_summary(&rows);

        assert!(table.starts_with("Year Summary"));
        assert!(table.contains("2008"));
        assert!(table.contains("Overall"));
        assert!(table.contains("n=1"));
    }
}
