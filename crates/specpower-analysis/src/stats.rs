//! Small descriptive statistics over `f64` samples

use serde::Serialize;
use std::fmt;

/// Group a summary row belongs to
///
/// Year groups sort before `Overall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YearKey {
    /// Records published in one year
    Year(i64),
    /// Every record considered by the summary
    Overall,
}

impl YearKey {
    /// Year of this group, `None` for `Overall`
    pub fn year(&self) -> Option<i64> {
        match self {
            YearKey::Year(year) => Some(*year),
            YearKey::Overall => None,
        }
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearKey::Year(year) => write!(f, "{}", year),
            YearKey::Overall => write!(f, "Overall"),
        }
    }
}

/// Arithmetic mean; `None` for no samples
pub(crate) fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// Sample standard deviation (n - 1); `None` below two samples
pub(crate) fn sample_std(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let avg = mean(samples)?;
    let sum_sq: f64 = samples.iter().map(|x| (x - avg).powi(2)).sum();
    Some((sum_sq / (samples.len() - 1) as f64).sqrt())
}
