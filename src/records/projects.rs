//! Projects section parser.
//!
//! Boundary: a short (< 50 chars) capitalized line — the "looks like a
//! project title" heuristic. Within a record: a technologies/built-with/stack
//! line sets `technologies` from the text after a colon or semicolon, bullets
//! accumulate into `highlights`, the first sufficiently long non-bulleted line
//! becomes the description, and a `github.com/...` substring anywhere sets the
//! repository link.

use crate::engine::normalize::non_blank_lines;
use crate::records::{is_bulleted, strip_bullet};
use crate::schema::ProjectItem;

/// Parse the body of a projects section into zero or more records.
pub fn parse_projects(section: &str) -> Vec<ProjectItem> {
    let title_re = regex!(r"^[A-Z][A-Za-z\s\-]+$");
    let tech_label_re = regex!(r"(?i)technologies|built with|stack");
    let tech_list_re = regex!(r"[:;]\s*(.+)");
    let github_re = regex!(r"github\.com/[A-Za-z0-9\-_/]+");

    let mut records = Vec::new();
    let mut current: Option<ProjectItem> = None;

    for line in non_blank_lines(section) {
        // Boundary first (tie-break policy).
        if title_re.is_match(line) && line.len() < 50 {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(ProjectItem { name: line.to_string(), ..Default::default() });
            continue;
        }

        let Some(record) = current.as_mut() else { continue };

        if tech_label_re.is_match(line) {
            if let Some(caps) = tech_list_re.captures(line) {
                record.technologies = caps
                    .get(1)
                    .map(|m| m.as_str())
                    .unwrap_or("")
                    .split([',', ';'])
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect();
            }
        } else if is_bulleted(line) {
            record.highlights.push(strip_bullet(line).to_string());
        } else if record.description.is_empty() && line.len() > 20 {
            record.description = line.to_string();
        }

        // Link extraction is independent of the rules above.
        if line.contains("github.com") {
            if let Some(m) = github_re.find(line) {
                record.github = format!("https://{}", m.as_str());
            }
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: &str = "Chess Engine\nA UCI-compatible chess engine with iterative deepening search\nTechnologies: Rust, WebAssembly; SQLite\n• Implemented alpha-beta pruning with transposition tables\n• Source at github.com/janedoe/chess-engine\nWeather Dashboard\n- Visualized NOAA feeds in real time";

    #[test]
    fn two_records_with_full_fields() {
        let records = parse_projects(SECTION);
        assert_eq!(records.len(), 2);

        let chess = &records[0];
        assert_eq!(chess.name, "Chess Engine");
        assert_eq!(chess.description, "A UCI-compatible chess engine with iterative deepening search");
        assert_eq!(chess.technologies, vec!["Rust", "WebAssembly", "SQLite"]);
        assert_eq!(chess.highlights.len(), 2);
        assert_eq!(chess.github, "https://github.com/janedoe/chess-engine");

        let weather = &records[1];
        assert_eq!(weather.name, "Weather Dashboard");
        assert_eq!(weather.highlights, vec!["Visualized NOAA feeds in real time".to_string()]);
        assert_eq!(weather.description, "");
    }

    #[test]
    fn first_long_line_is_the_description_and_stays() {
        let section = "Chess Engine\nA first description line long enough\nAnother long line that should not replace it";
        let records = parse_projects(section);
        assert_eq!(records[0].description, "A first description line long enough");
    }

    #[test]
    fn short_non_bulleted_lines_are_ignored() {
        let records = parse_projects("Chess Engine\nsmall note");
        assert_eq!(records[0].description, "");
        assert!(records[0].highlights.is_empty());
    }

    #[test]
    fn github_link_is_extracted_from_a_bullet() {
        let records = parse_projects("Chess Engine\n• Code: github.com/janedoe/chess");
        assert_eq!(records[0].github, "https://github.com/janedoe/chess");
        // The bullet still lands in highlights; link extraction is independent.
        assert_eq!(records[0].highlights.len(), 1);
    }

    #[test]
    fn empty_section_yields_no_records() {
        assert!(parse_projects("").is_empty());
    }

    /// Known limitation: a long capitalized title (>= 50 chars) is not
    /// recognized as a boundary and is read as a description instead.
    #[test]
    fn overlong_title_is_not_a_boundary() {
        let section = "Chess Engine\nDistributed Real Time Collaborative Document Editing Platform";
        let records = parse_projects(section);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "Distributed Real Time Collaborative Document Editing Platform");
    }
}
