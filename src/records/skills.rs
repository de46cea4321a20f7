//! Skills section parser.
//!
//! No record boundaries here: every keyword from the fixed catalogues that
//! appears as a case-insensitive substring anywhere in the section body joins
//! its category list. Each keyword is tested independently, so one span of
//! text can feed multiple categories ("Java" and "JavaScript" both match a
//! line naming JavaScript — an accepted false positive of substring
//! matching). Output order is catalogue order, duplicates suppressed, which
//! makes the result independent of how the section shuffles its words.

use crate::catalog::{Catalog, SkillCategory};
use crate::schema::Skills;

/// Collect catalogue keywords present in the section body.
pub fn parse_skills(section: &str, catalog: &dyn Catalog) -> Skills {
    let lower = section.to_lowercase();
    let mut skills = Skills::default();

    for category in SkillCategory::ALL {
        let bucket = category.bucket(&mut skills);
        for keyword in catalog.skill_keywords(category) {
            if !lower.contains(&keyword.to_lowercase()) {
                continue;
            }
            let canonical = keyword.to_string();
            if !bucket.contains(&canonical) {
                bucket.push(canonical);
            }
        }
    }

    skills
}
