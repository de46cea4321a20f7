//! Experience section parser.
//!
//! Boundary: a capitalized, non-bulleted line under 60 characters — the
//! "looks like a company name" heuristic — optionally corroborated by a
//! tagged organization in NER-assisted mode. Within a record, the first line
//! carrying a month-plus-year dash range sets the dates; bulleted lines and
//! capitalized sentences longer than ten characters accumulate into
//! `responsibilities` in encounter order.

use crate::engine::normalize::non_blank_lines;
use crate::records::{is_bulleted, mentions_organization, strip_bullet};
use crate::schema::ExperienceItem;

/// Parse the body of an experience section into zero or more records.
pub fn parse_experience(section: &str, organizations: &[String]) -> Vec<ExperienceItem> {
    let company_re = regex!(r"^[A-Z][A-Za-z\s&,.]+$");
    let date_re = regex!(r"(?i)([A-Za-z]+\s+\d{4})\s*[-–—]\s*([A-Za-z]+\s+\d{4}|Present|Current)");

    let mut records = Vec::new();
    let mut current: Option<ExperienceItem> = None;

    for line in non_blank_lines(section) {
        // Boundary first (tie-break policy).
        let looks_like_company = company_re.is_match(line) && line.len() < 60;
        if looks_like_company || (!is_bulleted(line) && mentions_organization(line, organizations)) {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(ExperienceItem { company: line.to_string(), ..Default::default() });
            continue;
        }

        let Some(record) = current.as_mut() else { continue };

        if record.start_date.is_empty() {
            if let Some(caps) = date_re.captures(line) {
                record.start_date = caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default();
                record.end_date = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();
                continue;
            }
        }

        if is_bulleted(line) || line.starts_with(|c: char| c.is_ascii_uppercase()) {
            let bullet = strip_bullet(line);
            if bullet.len() > 10 {
                record.responsibilities.push(bullet.to_string());
            }
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }
    records
}
