//! Date range extraction.
//!
//! Resumes express tenure as `Month YYYY – Month YYYY`, `YYYY-YYYY`, or an
//! open range ending in `Present`/`Current`/`Expected`. Dates stay opaque
//! strings on the wire: no calendar resolution is performed, and the raw
//! spelling (minus surrounding whitespace) is preserved.

/// A start/end pair of date strings; both empty when no range was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// First `Month YYYY|YYYY` dash-family `Month YYYY|YYYY|Present|Current|Expected`
/// range in `text`.
pub fn extract_date_range(text: &str) -> DateRange {
    let re = regex!(r"(?i)([A-Za-z]+\s+\d{4}|\d{4})\s*[-–—]\s*([A-Za-z]+\s+\d{4}|\d{4}|Present|Current|Expected)");
    match re.captures(text) {
        Some(caps) => DateRange {
            start: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
            end: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
        },
        None => DateRange::default(),
    }
}
