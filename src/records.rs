//! Record parsers.
//!
//! Each parser consumes one segmented section body as an ordered sequence of
//! trimmed, non-blank lines and reconstructs zero or more records in a single
//! forward pass with one "current record" accumulator:
//!
//! ```text
//! lines ──▶ boundary? ──yes──▶ close current, open new record
//!              │no
//!              ▼
//!          content rules (dates, degree, bullets, ...) update current
//!              ...
//! section end ──▶ close current
//! ```
//!
//! Two invariants hold everywhere:
//!
//! - A record is appended to the output only once its boundary closes (next
//!   record start, or section end). An in-progress record is never emitted.
//! - When a line could satisfy both a boundary heuristic and a content rule,
//!   the boundary check runs first and wins.
//!
//! The boundary heuristics ("looks like a company name", "looks like a project
//! title") are inherently fuzzy and misfire on unusual formats (all-lowercase
//! headers, non-English names). They are best-effort by design; see the test
//! suites for the known limitations.

#[path = "records/achievements.rs"]
mod achievements;
#[path = "records/education.rs"]
mod education;
#[path = "records/experience.rs"]
mod experience;
#[path = "records/projects.rs"]
mod projects;
#[path = "records/skills.rs"]
mod skills;

pub use achievements::parse_achievements;
pub use education::parse_education;
pub use experience::parse_experience;
pub use projects::parse_projects;
pub use skills::parse_skills;

/// True when `line` opens with a bullet glyph.
pub(crate) fn is_bulleted(line: &str) -> bool {
    line.starts_with('•') || line.starts_with('-') || line.starts_with('*')
}

/// `line` with a leading bullet glyph and following whitespace removed.
pub(crate) fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['•', '-', '*']).trim_start()
}

/// True when `line` contains any of the tagged organization names,
/// case-insensitively. Used by the NER-assisted mode to corroborate record
/// boundaries; with no tagged organizations this never fires.
pub(crate) fn mentions_organization(line: &str, organizations: &[String]) -> bool {
    let lower = line.to_lowercase();
    organizations.iter().any(|org| !org.is_empty() && lower.contains(&org.to_lowercase()))
}
