//! vitae — rule-based resume information extraction.
//!
//! Turns unstructured resume text (as decoded from PDF/DOC/DOCX/TXT by an
//! external converter) into a structured, fully-shaped [`Resume`] record:
//! contact info, education, skills, experience, projects and achievements.
//! Deterministic and model-free: section segmentation, pattern-matched field
//! extraction and heuristic record boundary detection, with every keyword
//! catalogue represented as data rather than code branches.
//!
//! ```
//! use vitae::extract;
//!
//! let out = extract("Jane Doe\njane@doe.com\n\nSKILLS\nRust, Docker");
//! let resume = out.details.unwrap();
//! assert_eq!(resume.basics.email, "jane@doe.com");
//! assert!(resume.skills.devops_tools.contains(&"Docker".to_string()));
//! ```
//!
//! Extraction is a pure function of the input text: no I/O, no shared mutable
//! state, and separate calls are safe to run fully in parallel. Alternate
//! strategies (NER-assisted, remote-model) sit behind the same [`Outcome`]
//! contract; see [`Strategy`].

#[macro_use]
mod macros;
mod api;
mod catalog;
mod engine;
pub mod fields;
mod records;
mod schema;

pub use api::{Context, EntityTagger, ExtractError, Options, Outcome, Strategy, extract, extract_with, try_extract_with};
pub use catalog::{Catalog, DefaultCatalog, Section, SkillCategory};
pub use engine::Segmenter;
pub use schema::{
    AchievementItem, Basics, CertificationItem, EducationItem, ExperienceItem, ExtracurricularItem, Location,
    ProjectItem, PublicationItem, Resume, Skills,
};
