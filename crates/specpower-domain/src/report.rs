//! Report module - raw report content

/// The raw text of one benchmark report
///
/// Immutable once constructed. Bytes are decoded as UTF-8 lossily, so a stray
/// byte in an old report never prevents extraction of the rest of it, and
/// CRLF line endings are folded to LF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReport {
    source: String,
    text: String,
}

impl RawReport {
    /// Create a report from already-decoded text
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: normalize_line_endings(text.into()),
        }
    }

    /// Create a report from file bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use specpower_domain::RawReport;
    ///
    /// let report = RawReport::from_bytes("a.txt", b"Form Factor: 1U\n");
    /// assert_eq!(report.source(), "a.txt");
    /// assert!(report.text().starts_with("Form Factor"));
    /// ```
    pub fn from_bytes(source: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            source: source.into(),
            text: normalize_line_endings(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    /// Source identity (usually the file name)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Report text
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn normalize_line_endings(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}
