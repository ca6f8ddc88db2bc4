//! Text clean-up and numeric parsing for captured report fragments

/// Replace line breaks with spaces, collapse whitespace runs, and trim
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip table decoration and thousands separators from a captured value
fn clean_numeric(raw: &str) -> String {
    raw.trim()
        .trim_matches('|')
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect()
}

/// Parse an integer field value
///
/// On failure the cleaned text is returned so it can be recorded as the
/// malformed value.
pub fn parse_integer(raw: &str) -> Result<i64, String> {
    let cleaned = clean_numeric(raw);
    cleaned.parse::<i64>().map_err(|_| normalize_whitespace(raw))
}

/// Parse a decimal field value; non-finite results count as malformed
pub fn parse_decimal(raw: &str) -> Result<f64, String> {
    let cleaned = clean_numeric(raw);
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(normalize_whitespace(raw)),
    }
}

/// Take the fixed-width slice that precedes the final `|` of a table row
///
/// The slice is cut at any earlier `|` inside it, so a narrow last cell does
/// not drag in the previous column. A cell wider than `width` whose value
/// would be cut mid-token is rejected with the whole cell text.
pub fn trailing_cell(row: &str, width: usize) -> Result<String, String> {
    let body = row.trim_end().strip_suffix('|').unwrap_or(row);
    let bytes = body.as_bytes();
    let start = bytes.len().saturating_sub(width);
    let tail = String::from_utf8_lossy(&bytes[start..]);
    if let Some(idx) = tail.rfind('|') {
        return Ok(tail[idx + 1..].to_string());
    }

    let at_boundary = |b: u8| b == b'|' || b.is_ascii_whitespace();
    let cut_before = start > 0 && !at_boundary(bytes[start - 1]);
    if !cut_before || bytes.get(start).map_or(true, |b| at_boundary(*b)) {
        Ok(tail.into_owned())
    } else {
        let cell = body.rsplit('|').next().unwrap_or(body);
        Err(normalize_whitespace(cell))
    }
}
