//! Keyword catalogues.
//!
//! All the keyword lists the parsers lean on — section header aliases, the
//! universal section header catalogue, and the per-category skill vocabularies
//! — live here as plain data behind the [`Catalog`] trait. Parser logic never
//! hardcodes a keyword: extending the vocabulary means editing these tables
//! (or supplying a custom `Catalog` through `Context`), not touching a parser.
//!
//! Skill keywords are stored in canonical display casing ("JavaScript",
//! "PostgreSQL") and matched case-insensitively as substrings, so the emitted
//! skill lists are stable regardless of how the resume spells them.

use crate::schema::Skills;

/// A resume section targeted by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Education,
    Experience,
    Skills,
    Projects,
    Achievements,
}

/// One of the fixed skill categories of [`Skills`].
///
/// `Libraries` is declared for catalogue completeness but carries no keywords
/// in the default catalogue; the rule-based path never populates it (nor
/// `other` — that bucket belongs to the remote-model strategy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Libraries,
    Databases,
    DevopsTools,
    CloudPlatforms,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Libraries,
        SkillCategory::Databases,
        SkillCategory::DevopsTools,
        SkillCategory::CloudPlatforms,
    ];

    /// The target list inside a mutable [`Skills`] for this category.
    pub(crate) fn bucket<'a>(&self, skills: &'a mut Skills) -> &'a mut Vec<String> {
        match self {
            SkillCategory::Languages => &mut skills.programming_languages,
            SkillCategory::Frameworks => &mut skills.frameworks,
            SkillCategory::Libraries => &mut skills.libraries,
            SkillCategory::Databases => &mut skills.databases,
            SkillCategory::DevopsTools => &mut skills.devops_tools,
            SkillCategory::CloudPlatforms => &mut skills.cloud_platforms,
        }
    }
}

/// Pluggable catalogue provider.
///
/// The default implementation ([`DefaultCatalog`]) serves the static tables
/// below; callers can swap in their own vocabulary via `Context::catalog`
/// without changing any parser.
pub trait Catalog: Send + Sync {
    /// Lowercased aliases whose presence in a line marks a section start
    /// (scan segmenter).
    fn section_aliases(&self, section: Section) -> &[&str];

    /// Full header spellings for the anchored segmenter variant.
    fn anchored_headers(&self, section: Section) -> &[&str];

    /// The universal catalogue of canonical header names that close any
    /// section during the scan segmenter's forward pass.
    fn closing_headers(&self) -> &[&str];

    /// Canonical-cased keywords for one skill category.
    fn skill_keywords(&self, category: SkillCategory) -> &[&str];
}

/// The built-in vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

// --- Section header tables ---------------------------------------------------

/// Canonical section names that terminate a scanned section body.
const CLOSING_HEADERS: &[&str] = &[
    "education",
    "experience",
    "work",
    "skills",
    "projects",
    "achievements",
    "certifications",
    "publications",
    "activities",
    "summary",
    "objective",
];

const EDUCATION_ALIASES: &[&str] = &["education", "academic"];
const EXPERIENCE_ALIASES: &[&str] = &["experience", "work experience", "employment"];
const SKILLS_ALIASES: &[&str] = &["skills", "technical skills", "technologies"];
const PROJECTS_ALIASES: &[&str] = &["projects", "personal projects", "project experience"];
const ACHIEVEMENTS_ALIASES: &[&str] = &["achievements", "awards", "honors"];

const EDUCATION_HEADERS: &[&str] = &["Education", "Academic Background"];
const EXPERIENCE_HEADERS: &[&str] = &["Experience", "Work Experience", "Professional Experience", "Employment"];
const SKILLS_HEADERS: &[&str] = &["Skills", "Technical Skills", "Technologies"];
const PROJECTS_HEADERS: &[&str] = &["Projects", "Personal Projects", "Academic Projects", "Technical Projects"];
const ACHIEVEMENTS_HEADERS: &[&str] = &["Achievements", "Awards", "Honors"];

// --- Skill vocabularies ------------------------------------------------------

const LANGUAGES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Ruby",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "PHP",
    "Scala",
    "MATLAB",
    "Perl",
    "Haskell",
    "Elixir",
    "Dart",
    "SQL",
];

const FRAMEWORKS: &[&str] = &[
    "React",
    "Angular",
    "Vue",
    "Next.js",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "Rails",
    "Laravel",
    "FastAPI",
    "Svelte",
    "Nest.js",
    ".NET",
];

const DATABASES: &[&str] = &[
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "DynamoDB",
    "Cassandra",
    "Oracle",
    "SQLite",
    "MariaDB",
    "Firebase",
    "Supabase",
];

const DEVOPS_TOOLS: &[&str] = &[
    "Docker",
    "Kubernetes",
    "Jenkins",
    "GitLab CI",
    "GitHub Actions",
    "Terraform",
    "Ansible",
    "CircleCI",
    "Travis CI",
    "Prometheus",
    "Grafana",
];

const CLOUD_PLATFORMS: &[&str] =
    &["AWS", "Azure", "GCP", "Google Cloud", "Heroku", "Vercel", "Netlify", "DigitalOcean", "Cloudflare"];

impl Catalog for DefaultCatalog {
    fn section_aliases(&self, section: Section) -> &[&str] {
        match section {
            Section::Education => EDUCATION_ALIASES,
            Section::Experience => EXPERIENCE_ALIASES,
            Section::Skills => SKILLS_ALIASES,
            Section::Projects => PROJECTS_ALIASES,
            Section::Achievements => ACHIEVEMENTS_ALIASES,
        }
    }

    fn anchored_headers(&self, section: Section) -> &[&str] {
        match section {
            Section::Education => EDUCATION_HEADERS,
            Section::Experience => EXPERIENCE_HEADERS,
            Section::Skills => SKILLS_HEADERS,
            Section::Projects => PROJECTS_HEADERS,
            Section::Achievements => ACHIEVEMENTS_HEADERS,
        }
    }

    fn closing_headers(&self) -> &[&str] {
        CLOSING_HEADERS
    }

    fn skill_keywords(&self, category: SkillCategory) -> &[&str] {
        match category {
            SkillCategory::Languages => LANGUAGES,
            SkillCategory::Frameworks => FRAMEWORKS,
            SkillCategory::Libraries => &[],
            SkillCategory::Databases => DATABASES,
            SkillCategory::DevopsTools => DEVOPS_TOOLS,
            SkillCategory::CloudPlatforms => CLOUD_PLATFORMS,
        }
    }
}
