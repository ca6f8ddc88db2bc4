//! Field specifications and the schema that groups them

use crate::error::ExtractorError;
use crate::rule::FieldRule;
use specpower_domain::{ExtractedValue, FieldKind, FieldValue, MissingReason};
use std::collections::HashSet;

/// One extractable field: name, kind, and rules in priority order
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    rules: Vec<FieldRule>,
}

impl FieldSpec {
    /// Create a field spec
    ///
    /// Every rule must produce the declared kind and at least one rule is
    /// required.
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        rules: Vec<FieldRule>,
    ) -> Result<Self, ExtractorError> {
        let name = name.into();
        if rules.is_empty() {
            return Err(ExtractorError::NoRules(name));
        }
        if let Some(rule) = rules.iter().find(|rule| rule.kind() != kind) {
            return Err(ExtractorError::KindMismatch {
                field: name,
                expected: kind,
                found: rule.kind(),
            });
        }
        Ok(Self { name, kind, rules })
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared value kind
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Apply rules in order; the first present value wins
    ///
    /// When no rule succeeds, the first malformed result is reported, so a
    /// label that was found but unreadable is not masked by a later rule that
    /// found nothing.
    pub fn extract(&self, text: &str) -> ExtractedValue<FieldValue> {
        let mut first_malformed: Option<MissingReason> = None;
        for rule in &self.rules {
            match rule.apply(text) {
                ExtractedValue::Present(value) => return ExtractedValue::Present(value),
                ExtractedValue::Missing(MissingReason::NotFound) => {}
                ExtractedValue::Missing(reason) => {
                    first_malformed.get_or_insert(reason);
                }
            }
        }
        ExtractedValue::Missing(first_malformed.unwrap_or(MissingReason::NotFound))
    }
}

/// An ordered, immutable set of field specs
///
/// Build one per process (see [`standard_schema`](crate::standard_schema))
/// and share it by reference.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create a schema; field names must be unique and non-empty in number
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, ExtractorError> {
        if fields.is_empty() {
            return Err(ExtractorError::EmptySchema);
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(ExtractorError::DuplicateField(field.name().to_string()));
            }
        }
        Ok(Self { fields })
    }

    /// Field specs in schema order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field spec by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Field names in schema order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldSpec::name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a constructed schema
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
