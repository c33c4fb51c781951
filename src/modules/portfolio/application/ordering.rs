//! Display ordering and grouping applied to collections after retrieval.
//!
//! All sorts are stable: records that compare equal keep store order.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::modules::content::domain::{
    Certification, Experience, Expertise, Skill, SocialLink, Statistic,
};

pub const OTHER_CATEGORY: &str = "Other";

/// Newest first; a missing date counts as the Unix epoch.
pub fn sort_by_date_desc<T>(items: &mut [T], key: impl Fn(&T) -> Option<DateTime<Utc>>) {
    items.sort_by_key(|item| Reverse(key(item).map_or(0, |d| d.timestamp_millis())));
}

/// Highest first; a missing value counts as 0.
pub fn sort_by_number_desc<T>(items: &mut [T], key: impl Fn(&T) -> Option<f64>) {
    items.sort_by(|a, b| key(b).unwrap_or(0.0).total_cmp(&key(a).unwrap_or(0.0)));
}

/// Lowest first; a missing value counts as 0.
pub fn sort_by_number_asc<T>(items: &mut [T], key: impl Fn(&T) -> Option<f64>) {
    items.sort_by(|a, b| key(a).unwrap_or(0.0).total_cmp(&key(b).unwrap_or(0.0)));
}

pub fn sort_certifications(items: &mut [Certification]) {
    sort_by_date_desc(items, |c| c.date_issued);
}

pub fn sort_experience(items: &mut [Experience]) {
    sort_by_date_desc(items, |e| e.start_date);
}

pub fn sort_expertise(items: &mut [Expertise]) {
    sort_by_number_desc(items, |e| e.proficiency_level);
}

pub fn sort_skills(items: &mut [Skill]) {
    sort_by_number_desc(items, |s| s.proficiency_level);
}

pub fn sort_social_links(items: &mut [SocialLink]) {
    sort_by_number_asc(items, |l| l.display_order);
}

pub fn sort_statistics(items: &mut [Statistic]) {
    sort_by_number_asc(items, |s| s.display_order);
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Partitions skills by category in first-seen order. Skills without a
/// category land in [`OTHER_CATEGORY`].
pub fn group_skills_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(OTHER_CATEGORY)
            .to_string();

        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category,
                skills: vec![skill],
            }),
        }
    }

    groups
}
