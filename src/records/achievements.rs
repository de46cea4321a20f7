//! Achievements section parser.
//!
//! The flattest of the parsers: every bulleted line becomes one achievement
//! record with `title` and `description` both set to the bullet text.
//! Issuer/date attribution needs semantics the rule-based path does not have,
//! so those stay empty for the remote-model strategy to fill.

use crate::engine::normalize::non_blank_lines;
use crate::records::{is_bulleted, strip_bullet};
use crate::schema::AchievementItem;

/// One achievement per bulleted line of the section body.
pub fn parse_achievements(section: &str) -> Vec<AchievementItem> {
    non_blank_lines(section)
        .filter(|line| is_bulleted(line))
        .map(|line| {
            let text = strip_bullet(line).to_string();
            AchievementItem { title: text.clone(), description: text, ..Default::default() }
        })
        .collect()
}
