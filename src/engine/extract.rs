//! Rule-based extraction pipeline.
//!
//! This module is the operational core: it wires the normalizer, the section
//! segmenter, the scalar field extractors and the record parsers into one
//! pass that assembles a fully-shaped [`Resume`]:
//!
//! ```text
//! raw text ── normalize ──┬─ field extractors (email, phone, name, links,
//!                         │                    location) over the whole text
//!                         │
//!                         ├─ section_body(Education)    ─▶ parse_education
//!                         ├─ section_body(Skills)       ─▶ parse_skills
//!                         ├─ section_body(Experience)   ─▶ parse_experience
//!                         ├─ section_body(Projects)     ─▶ parse_projects
//!                         └─ section_body(Achievements) ─▶ parse_achievements
//!                                       │
//!                                       ▼
//!                              assembled Resume
//! ```
//!
//! Everything here is a pure function of the input text (plus the supplied
//! catalogue and tagged organizations): no I/O, no shared mutable state, and
//! the same input always produces byte-identical output. Fault handling lives
//! one level up in `api.rs`; this module itself is total.

use tracing::debug;

use crate::Context;
use crate::catalog::Section;
use crate::engine::normalize::normalize;
use crate::engine::segment::{Segmenter, section_body};
use crate::fields::{
    extract_email, extract_github, extract_linkedin, extract_location, extract_name, extract_phone, extract_portfolio,
};
use crate::records::{parse_achievements, parse_education, parse_experience, parse_projects, parse_skills};
use crate::schema::{Basics, Resume};

/// Run the rule-based pipeline over `text`.
///
/// `organizations` carries tagged organization names for boundary
/// corroboration in NER-assisted mode; the pure rule-based path passes an
/// empty slice. Certifications, publications and extracurriculars are always
/// left empty — only the remote-model strategy populates them.
pub fn run_rule_based(text: &str, context: &Context, segmenter: Segmenter, organizations: &[String]) -> Resume {
    let text = normalize(text);
    let catalog = context.catalog.as_ref();

    let basics = Basics {
        name: extract_name(&text),
        email: extract_email(&text),
        phone: extract_phone(&text),
        location: extract_location(&text),
        linkedin: extract_linkedin(&text),
        github: extract_github(&text),
        portfolio: extract_portfolio(&text),
    };
    debug!(name = %basics.name, email = %basics.email, "extracted basics");

    let education = parse_education(&section_body(&text, catalog, Section::Education, segmenter), organizations);
    let skills = parse_skills(&section_body(&text, catalog, Section::Skills, segmenter), catalog);
    let experience = parse_experience(&section_body(&text, catalog, Section::Experience, segmenter), organizations);
    let projects = parse_projects(&section_body(&text, catalog, Section::Projects, segmenter));
    let achievements = parse_achievements(&section_body(&text, catalog, Section::Achievements, segmenter));
    debug!(
        education = education.len(),
        experience = experience.len(),
        projects = projects.len(),
        achievements = achievements.len(),
        "extracted sections"
    );

    Resume { basics, education, skills, experience, projects, achievements, ..Default::default() }
}

/// Required-field advisory list: human-readable labels for each required
/// basics/education field that could not be located. Advisory, not an error.
pub fn missing_fields(resume: &Resume) -> Vec<String> {
    let mut missing = Vec::new();
    if resume.basics.name.is_empty() {
        missing.push("Name not found".to_string());
    }
    if resume.basics.email.is_empty() {
        missing.push("Email not found".to_string());
    }
    if resume.education.is_empty() {
        missing.push("Education not found".to_string());
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str =
        "Jane Doe\njane@doe.com\n555-123-4567\n\nEDUCATION\nBoston University\nBachelor of Science\n2018-2022\nGPA: 3.75\n\nSKILLS\nPython, Docker";

    fn run(text: &str) -> Resume {
        run_rule_based(text, &Context::default(), Segmenter::Scan, &[])
    }

    #[test]
    fn minimal_resume_extracts_all_parts() {
        let resume = run(MINIMAL);
        assert_eq!(resume.basics.name, "Jane Doe");
        assert_eq!(resume.basics.email, "jane@doe.com");
        assert_eq!(resume.basics.phone, "555-123-4567");

        assert_eq!(resume.education.len(), 1);
        assert!(resume.education[0].school.contains("Boston University"));
        assert!((resume.education[0].gpa - 3.75).abs() < 1e-9);

        assert!(resume.skills.programming_languages.contains(&"Python".to_string()));
        assert!(resume.skills.devops_tools.contains(&"Docker".to_string()));

        assert!(resume.certifications.is_empty());
        assert!(resume.publications.is_empty());
        assert!(resume.extracurriculars.is_empty());
        assert!(missing_fields(&resume).is_empty());
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let a = serde_json::to_string(&run(MINIMAL)).unwrap();
        let b = serde_json::to_string(&run(MINIMAL)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn absent_sections_stay_empty_without_faulting() {
        let resume = run("Jane Doe\njane@doe.com");
        assert!(resume.education.is_empty());
        assert!(resume.experience.is_empty());
        assert!(resume.projects.is_empty());
        let missing = missing_fields(&resume);
        assert_eq!(missing, vec!["Education not found".to_string()]);
    }

    #[test]
    fn empty_input_yields_fully_shaped_resume() {
        let resume = run("");
        assert_eq!(resume, Resume { basics: Basics::default(), ..Default::default() });
        assert_eq!(missing_fields(&resume).len(), 3);
    }

    #[test]
    fn crlf_and_tab_input_matches_unix_input() {
        let unix = run(MINIMAL);
        let windows = run(&MINIMAL.replace('\n', "\r\n"));
        assert_eq!(unix, windows);
    }
}
