//! Contact and identity extractors.
//!
//! Every function here scans either the whole document or a bounded prefix
//! window, takes the first match, and returns an empty value on no match.
//! These are deliberately heuristic: contact info in resumes follows strong
//! conventions (name up top, `City, ST`, literal platform domains) and a
//! first-match regex beats entity recognition on this kind of structured text.

use crate::schema::Location;

/// Domains excluded from portfolio detection: platform and mail-provider
/// hosts that the dedicated extractors (or nothing) should claim instead.
const NON_PORTFOLIO_HOSTS: &[&str] = &["linkedin", "github", "gmail", "yahoo", "outlook", "hotmail"];

/// First `local@domain.tld` in `text`, with trailing delimiter artifacts
/// (a glued `|`, stray whitespace) stripped. Empty string when absent.
pub fn extract_email(text: &str) -> String {
    let re = regex!(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b");
    match re.find(text) {
        Some(m) => m.as_str().split(['|', ' ']).next().unwrap_or("").to_string(),
        None => String::new(),
    }
}

/// First phone-shaped number: optional country code, optional parens around
/// the area code, 3-3-4 grouping with `-`/`.`/space separators. No
/// plausibility validation is performed.
pub fn extract_phone(text: &str) -> String {
    let re = regex!(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}");
    re.find(text).map(|m| m.as_str().trim().to_string()).unwrap_or_default()
}

/// The candidate's name from the top of the document.
///
/// Prefers a line within the first ten non-blank lines that looks like a
/// name: 2–4 capitalized tokens (middle initials allowed), no `@`, no URL.
/// Falls back to the first non-blank line; order-sensitive by design.
pub fn extract_name(text: &str) -> String {
    let name_re = regex!(r"^[A-Z][a-z]+(?:\s+[A-Z]\.?)?(?:\s+[A-Z][a-z]+){1,3}$");
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    for line in lines.iter().take(10) {
        if line.contains('@') || line.contains("http") || line.contains(".com") {
            continue;
        }
        if name_re.is_match(line) && line.split_whitespace().count() <= 4 {
            return line.to_string();
        }
    }
    lines.first().map(|l| l.to_string()).unwrap_or_default()
}

/// First `linkedin.com/in/...` profile link, `https://`-prefixed when the
/// source omitted a scheme.
pub fn extract_linkedin(text: &str) -> String {
    let re = regex!(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+/?");
    re.find(text).map(|m| ensure_scheme(m.as_str())).unwrap_or_default()
}

/// First `github.com/...` link, `https://`-prefixed when the source omitted a
/// scheme.
pub fn extract_github(text: &str) -> String {
    let re = regex!(r"(?i)(?:https?://)?(?:www\.)?github\.com/[\w-]+/?");
    re.find(text).map(|m| ensure_scheme(m.as_str())).unwrap_or_default()
}

/// First generic domain-with-TLD link that is not a known platform or mail
/// provider host. Empty when every match is excluded.
pub fn extract_portfolio(text: &str) -> String {
    let re = regex!(r"(?i)(?:https?://)?(?:www\.)?[\w-]+\.(?:com|io|dev|me|net|org)(?:/[\w-]*)?\b");
    for m in re.find_iter(text) {
        let lower = m.as_str().to_lowercase();
        if NON_PORTFOLIO_HOSTS.iter().any(|host| lower.contains(host)) {
            continue;
        }
        return m.as_str().to_string();
    }
    String::new()
}

/// `City, ST` within the first ~20 lines, falling back to the whole text.
/// Country defaults to `"USA"` on a two-letter state code match; otherwise
/// every field is empty.
pub fn extract_location(text: &str) -> Location {
    let re = regex!(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?),\s*([A-Z]{2})\b");
    let prefix: String = text.lines().take(20).collect::<Vec<_>>().join("\n");

    let caps = re.captures(&prefix).or_else(|| re.captures(text));
    match caps {
        Some(caps) => Location {
            city: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
            state: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
            country: "USA".to_string(),
        },
        None => Location::default(),
    }
}

fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
