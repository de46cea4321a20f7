//! Section segmentation.
//!
//! Resumes are a sequence of headed sections ("EDUCATION", "Projects", ...).
//! This module locates one section's body text given the catalogue's header
//! vocabulary. Two variants exist because resume formatting varies widely and
//! neither wins universally; callers select one through `Options` based on
//! observed extraction quality, never automatically:
//!
//! - [`Segmenter::Scan`] (default): line-oriented scan. The first line whose
//!   lowercased content *contains* any section alias starts the section; the
//!   body runs until the first later line that case-insensitively equals, or
//!   starts with (`header` / `header:`), any name in the universal closing
//!   header catalogue — or the end of the document.
//!
//! - [`Segmenter::Anchored`]: regex variant for documents with typographically
//!   distinct headers (bold/caps on their own line). The header must sit alone
//!   between newlines; the next section is an all-caps line of at least four
//!   characters. Deliberately mirrors the original behavior, including not
//!   matching a header at the very start of the text.
//!
//! In both variants the header line itself is never part of the returned body,
//! and an absent section yields an empty string — absence is not an error.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Section};

/// Selectable section boundary strategy (see module docs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segmenter {
    #[default]
    Scan,
    Anchored,
}

/// Extract one section's body text, or `""` when the section is absent.
pub fn section_body(text: &str, catalog: &dyn Catalog, section: Section, segmenter: Segmenter) -> String {
    match segmenter {
        Segmenter::Scan => scan_section(text, catalog.section_aliases(section), catalog.closing_headers()),
        Segmenter::Anchored => anchored_section(text, catalog.anchored_headers(section)),
    }
}

/// Line-scan variant. The start scan runs exactly once per call: a line that
/// matches both an alias and a closing header resolves to whichever pass sees
/// it first, and the start scan never re-triggers.
fn scan_section(text: &str, aliases: &[&str], closing_headers: &[&str]) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let Some(start) = lines.iter().position(|line| {
        let lower = line.to_lowercase();
        aliases.iter().any(|alias| lower.contains(alias))
    }) else {
        return String::new();
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| {
            let lower = line.to_lowercase();
            let lower = lower.trim();
            closing_headers.iter().any(|header| lower == *header || lower.starts_with(&format!("{header}:")))
        })
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    lines[start + 1..end].join("\n")
}

/// Anchored variant: header alone on its own line, body up to the next
/// all-caps header-looking line.
fn anchored_section(text: &str, headers: &[&str]) -> String {
    let escaped: Vec<String> = headers.iter().map(|h| regex::escape(h)).collect();
    let pattern = format!(r"(?i)\n[ \t]*(?:{})[ \t]*\n", escaped.join("|"));
    let Ok(header_re) = regex::Regex::new(&pattern) else {
        return String::new();
    };

    let Some(header) = header_re.find(text) else {
        return String::new();
    };
    let start = header.end();

    // A capitalized, multi-word, all-caps line of at least 4 characters.
    let next_re = regex!(r"\n[ \t]*[A-Z][A-Z\s]{3,}[ \t]*\n");
    let end = next_re.find_at(text, start).map(|m| m.start()).unwrap_or(text.len());

    text[start..end].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DefaultCatalog;

    const RESUME: &str = "Jane Doe\njane@doe.com\n\nEDUCATION\nBoston University\n2018-2022\n\nSKILLS\nPython, Docker\n";

    #[test]
    fn scan_finds_section_body() {
        let body = section_body(RESUME, &DefaultCatalog, Section::Education, Segmenter::Scan);
        assert!(body.contains("Boston University"));
        assert!(body.contains("2018-2022"));
        assert!(!body.contains("EDUCATION"), "header line must not leak into the body");
        assert!(!body.contains("Python"), "body must stop at the next known header");
    }

    #[test]
    fn scan_runs_to_end_of_document_without_closing_header() {
        let body = section_body(RESUME, &DefaultCatalog, Section::Skills, Segmenter::Scan);
        assert_eq!(body.trim(), "Python, Docker");
    }

    #[test]
    fn scan_missing_section_is_empty_not_an_error() {
        let body = section_body(RESUME, &DefaultCatalog, Section::Projects, Segmenter::Scan);
        assert_eq!(body, "");
    }

    #[test]
    fn scan_recognizes_colon_suffixed_closing_header() {
        let text = "EDUCATION\nBoston University\nSkills:\nPython";
        let body = scan_section(text, &["education"], &["skills"]);
        assert_eq!(body, "Boston University");
    }

    #[test]
    fn anchored_needs_header_alone_on_its_line() {
        let text = "Jane Doe\n\nEducation\nBoston University\nGPA: 3.75\n\nTECHNICAL SKILLS\nPython\n";
        let body = section_body(text, &DefaultCatalog, Section::Education, Segmenter::Anchored);
        assert!(body.contains("Boston University"));
        assert!(!body.contains("Python"), "all-caps line closes the section");
    }

    #[test]
    fn anchored_ignores_inline_header_mentions() {
        // "education" inside a sentence is not a header for the anchored variant.
        let text = "Jane lists her education inline here\nand never starts a section\n";
        let body = section_body(text, &DefaultCatalog, Section::Education, Segmenter::Anchored);
        assert_eq!(body, "");
    }

    #[test]
    fn segmenter_discriminator_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Segmenter::Anchored).unwrap(), r#""anchored""#);
        assert_eq!(serde_json::from_str::<Segmenter>(r#""scan""#).unwrap(), Segmenter::Scan);
    }
}
