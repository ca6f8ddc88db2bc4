//! Single extraction rules
//!
//! A rule is one way of finding one field in one report layout. Fields that
//! moved between report revisions carry several rules, tried in order by
//! [`FieldSpec`](crate::FieldSpec).

use crate::error::ExtractorError;
use crate::parse::{normalize_whitespace, parse_decimal, parse_integer, trailing_cell};
use regex::Regex;
use specpower_domain::{ExtractedValue, FieldKind, FieldValue};

/// Name of the capture group label rules read their value from
pub const VALUE_GROUP: &str = "value";

/// Default width of the trailing slice read from a power table row
pub const DEFAULT_CELL_WIDTH: usize = 10;

/// One way of locating and parsing a field
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Text captured between a start and an end marker, whitespace-normalized
    DelimitedText {
        /// Pattern with a `value` group spanning the text between the markers
        pattern: Regex,
    },

    /// Integer captured after a label, up to a value terminator
    Integer {
        /// Pattern with a `value` group ending at the terminator
        pattern: Regex,
    },

    /// Decimal read from the tail of a table row
    TableRow {
        /// Pattern matching the row from its key to the last `|`
        pattern: Regex,
        /// Bytes of the trailing slice read before the final `|`
        cell_width: usize,
    },

    /// Text captured after a label, restricted to known variants
    Enumerated {
        /// Pattern with a `value` group
        pattern: Regex,
        /// Canonical spellings; matching ignores ASCII case
        variants: Vec<String>,
    },
}

impl FieldRule {
    /// Rule for text between two markers
    pub fn delimited(pattern: &str) -> Result<Self, ExtractorError> {
        Ok(FieldRule::DelimitedText {
            pattern: compile_with_value_group(pattern)?,
        })
    }

    /// Rule for an integer after a label
    pub fn integer(pattern: &str) -> Result<Self, ExtractorError> {
        Ok(FieldRule::Integer {
            pattern: compile_with_value_group(pattern)?,
        })
    }

    /// Rule for a decimal at the end of a table row
    pub fn table_row(pattern: &str, cell_width: usize) -> Result<Self, ExtractorError> {
        Ok(FieldRule::TableRow {
            pattern: Regex::new(pattern)?,
            cell_width,
        })
    }

    /// Rule for a label whose value must be one of `variants`
    pub fn enumerated<I, S>(pattern: &str, variants: I) -> Result<Self, ExtractorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
        if variants.is_empty() {
            return Err(ExtractorError::NoVariants(pattern.to_string()));
        }
        Ok(FieldRule::Enumerated {
            pattern: compile_with_value_group(pattern)?,
            variants,
        })
    }

    /// Kind of value this rule produces
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldRule::DelimitedText { .. } => FieldKind::Text,
            FieldRule::Integer { .. } => FieldKind::Integer,
            FieldRule::TableRow { .. } => FieldKind::Decimal,
            FieldRule::Enumerated { .. } => FieldKind::Enumerated,
        }
    }

    /// Apply the rule to report text
    pub fn apply(&self, text: &str) -> ExtractedValue<FieldValue> {
        match self {
            FieldRule::DelimitedText { pattern } => {
                let Some(raw) = capture_value(pattern, text) else {
                    return ExtractedValue::not_found();
                };
                let normalized = normalize_whitespace(raw);
                if normalized.is_empty() {
                    ExtractedValue::malformed(raw)
                } else {
                    ExtractedValue::Present(FieldValue::Text(normalized))
                }
            }
            FieldRule::Integer { pattern } => match capture_value(pattern, text) {
                None => ExtractedValue::not_found(),
                Some(raw) => match parse_integer(raw) {
                    Ok(value) => ExtractedValue::Present(FieldValue::Integer(value)),
                    Err(cleaned) => ExtractedValue::malformed(cleaned),
                },
            },
            FieldRule::TableRow { pattern, cell_width } => {
                // Prose lines can carry the row key too; first parsable row wins
                let mut first_malformed: Option<String> = None;
                for row in pattern.find_iter(text) {
                    match trailing_cell(row.as_str(), *cell_width)
                        .and_then(|cell| parse_decimal(&cell))
                    {
                        Ok(value) => return ExtractedValue::Present(FieldValue::Decimal(value)),
                        Err(cleaned) => {
                            first_malformed.get_or_insert(cleaned);
                        }
                    }
                }
                match first_malformed {
                    Some(cleaned) => ExtractedValue::malformed(cleaned),
                    None => ExtractedValue::not_found(),
                }
            }
            FieldRule::Enumerated { pattern, variants } => {
                let Some(raw) = capture_value(pattern, text) else {
                    return ExtractedValue::not_found();
                };
                let normalized = normalize_whitespace(raw);
                variants
                    .iter()
                    .find(|variant| variant.eq_ignore_ascii_case(&normalized))
                    .map(|variant| ExtractedValue::Present(FieldValue::Text(variant.clone())))
                    .unwrap_or_else(|| ExtractedValue::malformed(normalized))
            }
        }
    }
}

fn compile_with_value_group(pattern: &str) -> Result<Regex, ExtractorError> {
    let regex = Regex::new(pattern)?;
    if !regex.capture_names().flatten().any(|name| name == VALUE_GROUP) {
        return Err(ExtractorError::MissingCaptureGroup(pattern.to_string()));
    }
    Ok(regex)
}

fn capture_value<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.name(VALUE_GROUP))
        .map(|m| m.as_str())
}
