//! Education section parser.
//!
//! Boundary: a line naming an institution (university/college/institute/
//! school), or — in NER-assisted mode — a line containing a tagged
//! organization. Content rules then fill the current record: a degree-keyword
//! line sets the degree, the first line with four-digit years sets the date
//! span, and gpa/grade lines go through the GPA extractor. `gpa` stays 0 when
//! never set.

use crate::engine::normalize::non_blank_lines;
use crate::fields::extract_gpa;
use crate::records::mentions_organization;
use crate::schema::EducationItem;

/// Parse the body of an education section into zero or more records.
pub fn parse_education(section: &str, organizations: &[String]) -> Vec<EducationItem> {
    let institution_re = regex!(r"(?i)university|college|institute|school");
    let degree_re = regex!(r"(?i)bachelor|master|phd|b\.s\.|m\.s\.|b\.a\.|m\.a\.");
    let year_re = regex!(r"\d{4}");

    let mut records = Vec::new();
    let mut current: Option<EducationItem> = None;

    for line in non_blank_lines(section) {
        // Boundary first (tie-break policy).
        if institution_re.is_match(line) || mentions_organization(line, organizations) {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(EducationItem { school: line.to_string(), ..Default::default() });
            continue;
        }

        let Some(record) = current.as_mut() else { continue };

        if degree_re.is_match(line) {
            record.degree = line.to_string();
        } else if year_re.is_match(line) {
            let years: Vec<&str> = year_re.find_iter(line).map(|m| m.as_str()).collect();
            if let Some(first) = years.first() {
                record.start_date = first.to_string();
                record.end_date = years.last().unwrap_or(first).to_string();
            }
        } else {
            let lower = line.to_lowercase();
            if lower.contains("gpa") || lower.contains("grade") {
                record.gpa = extract_gpa(line);
            }
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }
    records
}
