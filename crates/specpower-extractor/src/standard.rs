//! The built-in schema for SPECpower_ssj2008 result reports
//!
//! Rule lists are ordered newest layout first. A new report revision gets a
//! new rule appended to the affected field only.

use crate::error::ExtractorError;
use crate::rule::{FieldRule, DEFAULT_CELL_WIDTH};
use crate::schema::{FieldSpec, Schema};
use once_cell::sync::Lazy;
use specpower_domain::field::{
    CORES_ENABLED, CPU_FREQUENCY, FORM_FACTOR, IDLE_POWER, MAX_POWER, PUBLICATION_YEAR,
    SERVER_NAME,
};
use specpower_domain::{FieldKind, LoadPoint};

// Patterns below are compile-time constants covered by tests
#[allow(clippy::expect_used)]
static STANDARD_SCHEMA: Lazy<Schema> =
    Lazy::new(|| Schema::standard().expect("Built-in field patterns should be valid"));

/// The built-in schema, compiled once per process
pub fn standard_schema() -> &'static Schema {
    &STANDARD_SCHEMA
}

impl Schema {
    /// Build the built-in schema
    ///
    /// Field order: server name, publication year, form factor, max power,
    /// idle power, CPU frequency, enabled cores, then the nine load points
    /// from 10% to 90%.
    pub fn standard() -> Result<Self, ExtractorError> {
        let mut fields = vec![
            server_name_spec()?,
            publication_year_spec()?,
            form_factor_spec()?,
            max_power_spec()?,
            idle_power_spec()?,
            cpu_frequency_spec()?,
            cores_enabled_spec()?,
        ];
        for point in LoadPoint::all() {
            fields.push(load_point_spec(point)?);
        }
        Schema::new(fields)
    }
}

/// Server name: vendor and model block above the headline metric, or the
/// `Set Description` label in early reports
pub fn server_name_spec() -> Result<FieldSpec, ExtractorError> {
    FieldSpec::new(
        SERVER_NAME,
        FieldKind::Text,
        vec![
            // Block may not cross a blank line
            FieldRule::delimited(
                r"\n[ \t]*\n[ \t]*\n(?P<value>(?:[^\n]|\n[^\n])*?)\n[ \t]*SPECpower_ssj2008 =",
            )?,
            FieldRule::delimited(r"Set Description:?[ \t]*(?P<value>[^\n|]*)")?,
        ],
    )
}

/// Publication year: text after the last comma of the `Publication:` cell
pub fn publication_year_spec() -> Result<FieldSpec, ExtractorError> {
    FieldSpec::new(
        PUBLICATION_YEAR,
        FieldKind::Integer,
        vec![
            FieldRule::integer(r"Publication:[^\n|]*,(?P<value>[^\n|,]*)")?,
            FieldRule::integer(r"Publication:[^\n|]*?(?P<value>\b(?:19|20)[0-9]{2}\b)")?,
        ],
    )
}

/// Form factor in rack units: `Form Factor: 1U`
pub fn form_factor_spec() -> Result<FieldSpec, ExtractorError> {
    FieldSpec::new(
        FORM_FACTOR,
        FieldKind::Integer,
        vec![FieldRule::integer(r"Form Factor:(?P<value>[^\nU|]*)")?],
    )
}

/// Average power at the 100% target load row
pub fn max_power_spec() -> Result<FieldSpec, ExtractorError> {
    FieldSpec::new(
        MAX_POWER,
        FieldKind::Decimal,
        vec![FieldRule::table_row(&load_row_pattern(100), DEFAULT_CELL_WIDTH)?],
    )
}

/// Average power at the active idle row
pub fn idle_power_spec() -> Result<FieldSpec, ExtractorError> {
    FieldSpec::new(
        IDLE_POWER,
        FieldKind::Decimal,
        vec![FieldRule::table_row(r"Active Idle[^\n]*\|", DEFAULT_CELL_WIDTH)?],
    )
}

/// Nominal CPU frequency: `CPU Frequency (MHz): 2833`
pub fn cpu_frequency_spec() -> Result<FieldSpec, ExtractorError> {
    FieldSpec::new(
        CPU_FREQUENCY,
        FieldKind::Integer,
        vec![FieldRule::integer(r"CPU Frequency \(MHz\):(?P<value>[^\n|]*)")?],
    )
}

/// Enabled cores: `CPU(s) Enabled: 4 cores, 1 chip, 4 cores/chip`
pub fn cores_enabled_spec() -> Result<FieldSpec, ExtractorError> {
    FieldSpec::new(
        CORES_ENABLED,
        FieldKind::Integer,
        vec![
            FieldRule::integer(r"CPU\(s\) Enabled:(?P<value>[^\n|]*?)cores,")?,
            FieldRule::integer(r"(?m)CPU\(s\) Enabled:[ \t]*(?P<value>[0-9,]+)[ \t]*cores?[ \t]*(?:\||$)")?,
        ],
    )
}

/// Average power at one intermediate target-load row
pub fn load_point_spec(point: LoadPoint) -> Result<FieldSpec, ExtractorError> {
    FieldSpec::new(
        point.field_name(),
        FieldKind::Decimal,
        vec![FieldRule::table_row(
            &load_row_pattern(point.percent()),
            DEFAULT_CELL_WIDTH,
        )?],
    )
}

/// Row keyed by `<percent>%`, not preceded by a digit or `.` so `10%` never
/// matches inside `110%` or `99.10%`
fn load_row_pattern(percent: u8) -> String {
    format!(r"(?m)(?:^|[^0-9.]){}%[^\n]*\|", percent)
}
