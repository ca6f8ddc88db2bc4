//! Record Builder: runs a whole schema over one report

use crate::schema::Schema;
use crate::standard::standard_schema;
use specpower_domain::{ExtractedValue, FieldEntry, FieldValue, RawReport, Record};
use tracing::{debug, trace};

/// Builds one [`Record`] per report from a borrowed [`Schema`]
///
/// The builder holds no state besides the schema reference, so it is `Copy`
/// and can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder<'s> {
    schema: &'s Schema,
}

impl<'s> RecordBuilder<'s> {
    /// Create a builder over the given schema
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Schema this builder applies
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Extract every schema field from a report, in schema order
    ///
    /// A missing field never stops the remaining fields from being extracted.
    pub fn build(&self, report: &RawReport) -> Record {
        trace!(
            "Building record for '{}' ({} bytes)",
            report.source(),
            report.text().len()
        );

        let fields: Vec<FieldEntry> = self
            .schema
            .fields()
            .iter()
            .map(|spec| {
                let value = spec.extract(report.text());
                if let ExtractedValue::Missing(reason) = &value {
                    debug!(
                        "Field '{}' missing in '{}': {}",
                        spec.name(),
                        report.source(),
                        reason
                    );
                }
                FieldEntry {
                    name: spec.name().to_string(),
                    value,
                }
            })
            .collect();

        Record::from_entries(report.source(), fields)
    }

    /// Extract a single field by name; `None` if the schema has no such field
    pub fn extract_field(&self, name: &str, report: &RawReport) -> Option<ExtractedValue<FieldValue>> {
        self.schema
            .field(name)
            .map(|spec| spec.extract(report.text()))
    }
}

impl Default for RecordBuilder<'static> {
    /// Builder over the built-in schema
    fn default() -> Self {
        Self::new(standard_schema())
    }
}
