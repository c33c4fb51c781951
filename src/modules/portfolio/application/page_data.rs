// src/modules/portfolio/application/page_data.rs
//
// Display-ready state produced by the page controllers and consumed by the
// views. Everything here is already ordered/grouped.

use crate::modules::content::domain::{
    Certification, Experience, Expertise, Project, SocialLink, Statistic, Skill,
};
use crate::modules::portfolio::application::ordering::SkillGroup;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomePageData {
    pub stats: Vec<Statistic>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutPageData {
    pub expertise: Vec<Expertise>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsPageData {
    pub groups: Vec<SkillGroup>,
}

impl SkillsPageData {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn skill_count(&self) -> usize {
        self.groups.iter().map(|g| g.skills.len()).sum()
    }

    /// Rounded mean proficiency; skills without a level count as 0.
    pub fn average_proficiency(&self) -> u32 {
        let count = self.skill_count();
        if count == 0 {
            return 0;
        }
        let total: f64 = self
            .groups
            .iter()
            .flat_map(|g| g.skills.iter())
            .map(|s| s.proficiency_level.unwrap_or(0.0))
            .sum();
        (total / count as f64).round().max(0.0) as u32
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectsPageData {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperiencePageData {
    pub experiences: Vec<Experience>,
    pub current_count: usize,
}

impl ExperiencePageData {
    pub fn new(experiences: Vec<Experience>) -> Self {
        let current_count = experiences.iter().filter(|e| e.is_current()).count();
        Self {
            experiences,
            current_count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificationsPageData {
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FooterData {
    pub social_links: Vec<SocialLink>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::ordering::group_skills_by_category;

    #[test]
    fn skills_summary_counts_and_averages() {
        let skill = |category: &str, level: Option<f64>| Skill {
            category: Some(category.to_string()),
            proficiency_level: level,
            ..Default::default()
        };
        let data = SkillsPageData {
            groups: group_skills_by_category(vec![
                skill("Backend", Some(90.0)),
                skill("Database", Some(85.0)),
                skill("Backend", None),
            ]),
        };

        assert_eq!(data.skill_count(), 3);
        assert_eq!(data.groups.len(), 2);
        assert_eq!(data.average_proficiency(), 58);
        assert_eq!(SkillsPageData::default().average_proficiency(), 0);
    }

    #[test]
    fn experience_counts_current_roles() {
        let role = |current: Option<bool>| Experience {
            is_current: current,
            ..Default::default()
        };

        let data = ExperiencePageData::new(vec![role(Some(true)), role(None), role(Some(false))]);

        assert_eq!(data.current_count, 1);
        assert_eq!(data.experiences.len(), 3);
    }
}
