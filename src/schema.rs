//! Resume result schema.
//!
//! This is the wire contract every extraction strategy must produce: one
//! fully-shaped [`Resume`] in which absence is represented by emptiness, never
//! by a missing field. Every list defaults to empty, every string to `""`, and
//! `gpa` is a number in `[0, 4]`. Downstream layers (persistence, UI, remote
//! backends) depend on this shape staying stable across strategies, so fields
//! are only ever added here, not renamed.
//!
//! The certification / publication / extracurricular record shapes are part of
//! the contract even though the rule-based path always leaves them empty: the
//! remote-model strategy fills them through the same types.

use serde::{Deserialize, Serialize};

/// Contact and identity information from the top of a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basics {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: Location,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

/// A parsed `City, ST` location. `country` defaults to `"USA"` when a
/// two-letter state code matched, otherwise all fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// One degree / program entry. `gpa` is 0 when unknown and is always stored on
/// a 4.0 scale (see `fields::gpa` for rescaling).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: f64,
    pub achievements: Vec<String>,
}

/// Skills bucketed into fixed categories. Each list is duplicate-free and
/// keeps catalogue order (see `catalog`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub programming_languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub libraries: Vec<String>,
    pub databases: Vec<String>,
    pub devops_tools: Vec<String>,
    pub cloud_platforms: Vec<String>,
    pub other: Vec<String>,
}

/// One job entry. `responsibilities` preserves bullet encounter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

/// One project entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
    pub link: String,
    pub github: String,
}

/// One award / honor entry. The rule-based path sets `title` and
/// `description` to the same bullet text and leaves `issuer`/`date` empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementItem {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

/// One certification entry (remote-model strategy only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
    pub url: String,
}

/// One publication entry (remote-model strategy only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationItem {
    pub title: String,
    pub publisher: String,
    pub date: String,
    pub url: String,
    pub summary: String,
}

/// One extracurricular entry (remote-model strategy only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtracurricularItem {
    pub organization: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub achievements: Vec<String>,
}

/// The root aggregate produced by every extraction strategy.
///
/// Ordering inside `education`, `experience` and `projects` reflects document
/// order (top to bottom), not chronology; no re-sorting is performed.
/// Constructed fresh per extraction call and never mutated by this crate
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub basics: Basics,
    pub education: Vec<EducationItem>,
    pub skills: Skills,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub achievements: Vec<AchievementItem>,
    pub certifications: Vec<CertificationItem>,
    pub publications: Vec<PublicationItem>,
    pub extracurriculars: Vec<ExtracurricularItem>,
}
