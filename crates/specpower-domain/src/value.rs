//! Value module - typed field results

use std::fmt;

/// Why a field has no value
///
/// A report revision that never carried the label and a report whose label is
/// present but unreadable are different situations; consumers that do not
/// care can treat both as "missing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    /// No label or marker for the field was found in the report
    NotFound,

    /// A label matched, but the captured text did not parse
    Malformed(String),
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReason::NotFound => write!(f, "not found"),
            MissingReason::Malformed(raw) => write!(f, "malformed value '{}'", raw),
        }
    }
}

/// Result of applying one field rule to one report
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedValue<T> {
    /// The field was found and parsed
    Present(T),

    /// The field could not be produced
    Missing(MissingReason),
}

impl<T> ExtractedValue<T> {
    /// Shorthand for `Missing(MissingReason::NotFound)`
    pub fn not_found() -> Self {
        ExtractedValue::Missing(MissingReason::NotFound)
    }

    /// Shorthand for `Missing(MissingReason::Malformed(raw))`
    pub fn malformed(raw: impl Into<String>) -> Self {
        ExtractedValue::Missing(MissingReason::Malformed(raw.into()))
    }

    /// Whether a value is present
    pub fn is_present(&self) -> bool {
        matches!(self, ExtractedValue::Present(_))
    }

    /// Whether the value is missing, for either reason
    pub fn is_missing(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the value, collapsing both missing reasons to `None`
    pub fn as_option(&self) -> Option<&T> {
        match self {
            ExtractedValue::Present(value) => Some(value),
            ExtractedValue::Missing(_) => None,
        }
    }

    /// Take the value, collapsing both missing reasons to `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            ExtractedValue::Present(value) => Some(value),
            ExtractedValue::Missing(_) => None,
        }
    }

    /// The reason the value is missing, if it is
    pub fn missing_reason(&self) -> Option<&MissingReason> {
        match self {
            ExtractedValue::Present(_) => None,
            ExtractedValue::Missing(reason) => Some(reason),
        }
    }

    /// Map the present value, keeping the missing reason
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ExtractedValue<U> {
        match self {
            ExtractedValue::Present(value) => ExtractedValue::Present(f(value)),
            ExtractedValue::Missing(reason) => ExtractedValue::Missing(reason),
        }
    }
}

/// A typed field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text (names, enumerated variants)
    Text(String),

    /// Whole number (years, counts, MHz)
    Integer(i64),

    /// Floating-point measurement (watts)
    Decimal(f64),
}

impl FieldValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Integer content, if this is an integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Decimal content, if this is a decimal value
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            FieldValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric content widened to f64 (integers and decimals)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(value) => Some(*value as f64),
            FieldValue::Decimal(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Decimal(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_value() {
        let value = ExtractedValue::Present(4_i64);
        assert!(value.is_present());
        assert_eq!(value.as_option(), Some(&4));
        assert_eq!(value.missing_reason(), None);
    }

    #[test]
    fn test_missing_reasons_collapse() {
        let not_found: ExtractedValue<i64> = ExtractedValue::not_found();
        let malformed: ExtractedValue<i64> = ExtractedValue::malformed("RACK");

        assert!(not_found.is_missing());
        assert!(malformed.is_missing());
        assert_eq!(not_found.as_option(), None);
        assert_eq!(malformed.into_option(), None);
        assert_ne!(not_found, ExtractedValue::malformed("RACK"));
    }

    #[test]
    fn test_map_keeps_reason() {
        let value: ExtractedValue<i64> = ExtractedValue::malformed("x");
        let mapped = value.map(|v| v * 2);
        assert_eq!(
            mapped.missing_reason(),
            Some(&MissingReason::Malformed("x".to_string()))
        );
    }

    #[test]
    fn test_numeric_widening() {
        assert_eq!(FieldValue::Integer(2833).as_f64(), Some(2833.0));
        assert_eq!(FieldValue::Decimal(69.5).as_f64(), Some(69.5));
        assert_eq!(FieldValue::Text("a".into()).as_f64(), None);
        assert_eq!(FieldValue::Decimal(69.5).as_integer(), None);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(MissingReason::NotFound.to_string(), "not found");
        assert_eq!(
            MissingReason::Malformed("RACK".into()).to_string(),
            "malformed value 'RACK'"
        );
    }
}
