//! Record construction helpers for unit tests

use specpower_domain::field::{
    CORES_ENABLED, CPU_FREQUENCY, FORM_FACTOR, IDLE_POWER, MAX_POWER, PUBLICATION_YEAR,
};
use specpower_domain::{ExtractedValue, FieldEntry, FieldValue, Record};

fn entry(name: &str, value: Option<FieldValue>) -> FieldEntry {
    FieldEntry {
        name: name.to_string(),
        value: value.map_or_else(ExtractedValue::not_found, ExtractedValue::Present),
    }
}

/// Record with the fields the summaries read; `None` becomes not-found
pub(crate) fn record(
    source: &str,
    year: Option<i64>,
    form_factor: Option<i64>,
    idle: Option<f64>,
    max: Option<f64>,
    cpu_mhz: Option<i64>,
    cores: Option<i64>,
) -> Record {
    Record::from_entries(
        source,
        vec![
            entry(PUBLICATION_YEAR, year.map(FieldValue::Integer)),
            entry(FORM_FACTOR, form_factor.map(FieldValue::Integer)),
            entry(MAX_POWER, max.map(FieldValue::Decimal)),
            entry(IDLE_POWER, idle.map(FieldValue::Decimal)),
            entry(CPU_FREQUENCY, cpu_mhz.map(FieldValue::Integer)),
            entry(CORES_ENABLED, cores.map(FieldValue::Integer)),
        ],
    )
}
