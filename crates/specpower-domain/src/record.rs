//! Record module - one row per report, and the dataset of rows

use crate::field::{
    LoadPoint, CORES_ENABLED, CPU_FREQUENCY, FORM_FACTOR, IDLE_POWER, MAX_POWER,
    PUBLICATION_YEAR, SERVER_NAME,
};
use crate::value::{ExtractedValue, FieldValue};

/// One named field result inside a record
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    /// Field name from the schema
    pub name: String,

    /// Extraction result
    pub value: ExtractedValue<FieldValue>,
}

/// A structured row extracted from one report
///
/// Entries are stored in schema order and there is exactly one entry per
/// schema field, missing or not.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    source: String,
    fields: Vec<FieldEntry>,
}

impl Record {
    /// Create a record from its source name and schema-ordered entries
    pub fn from_entries(source: impl Into<String>, fields: Vec<FieldEntry>) -> Self {
        Self {
            source: source.into(),
            fields,
        }
    }

    /// Source identity of the report (file name)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All entries in schema order
    pub fn fields(&self) -> &[FieldEntry] {
        &self.fields
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no entries (only for an empty schema)
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field result by name
    pub fn get(&self, name: &str) -> Option<&ExtractedValue<FieldValue>> {
        self.fields
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// Present value of a field
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.get(name).and_then(ExtractedValue::as_option)
    }

    /// Text value of a field
    pub fn text(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(FieldValue::as_text)
    }

    /// Integer value of a field
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.value(name).and_then(FieldValue::as_integer)
    }

    /// Numeric value of a field widened to f64
    pub fn number(&self, name: &str) -> Option<f64> {
        self.value(name).and_then(FieldValue::as_f64)
    }

    /// Numeric value of a field, with NaN standing in for missing
    pub fn number_or_nan(&self, name: &str) -> f64 {
        self.number(name).unwrap_or(f64::NAN)
    }

    /// Names of fields whose value is missing
    pub fn missing_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|entry| entry.value.is_missing())
            .map(|entry| entry.name.as_str())
    }

    /// Whether every field is present
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|entry| entry.value.is_present())
    }

    /// Server name
    pub fn server_name(&self) -> Option<&str> {
        self.text(SERVER_NAME)
    }

    /// Publication year
    pub fn publication_year(&self) -> Option<i64> {
        self.integer(PUBLICATION_YEAR)
    }

    /// Form factor in rack units
    pub fn form_factor(&self) -> Option<i64> {
        self.integer(FORM_FACTOR)
    }

    /// Average power at 100% load in watts
    pub fn max_power_w(&self) -> Option<f64> {
        self.number(MAX_POWER)
    }

    /// Average power at active idle in watts
    pub fn idle_power_w(&self) -> Option<f64> {
        self.number(IDLE_POWER)
    }

    /// CPU frequency in MHz
    pub fn cpu_frequency_mhz(&self) -> Option<i64> {
        self.integer(CPU_FREQUENCY)
    }

    /// Enabled core count
    pub fn cores_enabled(&self) -> Option<i64> {
        self.integer(CORES_ENABLED)
    }

    /// Average power at an intermediate load point in watts
    pub fn load_point_power_w(&self, point: LoadPoint) -> Option<f64> {
        self.number(point.field_name())
    }
}

/// The ordered records of one ingestion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from records in row order
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate rows in order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Take ownership of the rows
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Reorder rows by publication year (stable; rows without a year last)
    pub fn into_sorted_by_year(mut self) -> Self {
        self.records
            .sort_by_key(|record| (record.publication_year().is_none(), record.publication_year()));
        self
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Dataset {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
