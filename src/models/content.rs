//! Portfolio content document.
//!
//! The document is deserialized once at startup and shared behind an `Arc`.
//! Nothing in the application writes back into it.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Sample document compiled into the binary, used when no path is configured.
pub const BUNDLED_DOCUMENT: &str = include_str!("../../data/portfolio.json");

/// Number of project features shown before the "+N more" hint.
pub const FEATURE_PREVIEW_COUNT: usize = 3;

/// Social profile links
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

impl SocialLinks {
    /// Iterate over the configured links as (label, url) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("GitHub", self.github.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
            ("Twitter", self.twitter.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
    }
}

/// Personal profile shown on the home, about and contact sections
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: Option<String>,
    /// Where the "Download Resume" action points (file path or URL)
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    /// Short one-liners for the about section
    #[serde(default)]
    pub fun_facts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub relevant_courses: Vec<String>,
}

/// A skill category with a proficiency level between 0 and 100
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: String,
    pub level: u8,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Proficiency tier derived from a skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Learning,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillTier {
    pub fn from_level(level: u8) -> Self {
        match level {
            90.. => SkillTier::Expert,
            80..=89 => SkillTier::Advanced,
            60..=79 => SkillTier::Intermediate,
            40..=59 => SkillTier::Beginner,
            _ => SkillTier::Learning,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillTier::Learning => "Learning",
            SkillTier::Beginner => "Beginner",
            SkillTier::Intermediate => "Intermediate",
            SkillTier::Advanced => "Advanced",
            SkillTier::Expert => "Expert",
        }
    }
}

impl SkillCategory {
    pub fn tier(&self) -> SkillTier {
        SkillTier::from_level(self.level)
    }

    /// Filled stars out of five.
    pub fn stars(&self) -> u8 {
        (self.level / 20).min(5)
    }

    /// Whether the bar uses the primary highlight (levels above 80).
    pub fn is_highlighted(&self) -> bool {
        self.level > 80
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

impl Project {
    /// Features shown on the card.
    pub fn feature_preview(&self) -> &[String] {
        let end = self.features.len().min(FEATURE_PREVIEW_COUNT);
        &self.features[..end]
    }

    /// Count of features hidden behind the "+N more features" hint.
    pub fn hidden_feature_count(&self) -> usize {
        self.features.len().saturating_sub(FEATURE_PREVIEW_COUNT)
    }

    /// Link opened by the project's primary action: demo first, then repository.
    pub fn primary_link(&self) -> Option<&str> {
        self.demo_url.as_deref().or(self.github_url.as_deref())
    }
}

/// The full read-only portfolio document.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContentDocument {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ContentDocument {
    /// Parse and validate a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let document: ContentDocument = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Read, parse and validate a document from disk.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            projects = document.projects.len(),
            "Loaded portfolio document"
        );
        Ok(document)
    }

    /// The document compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_DOCUMENT)
    }

    /// Load from `path` when given, otherwise the bundled document, and freeze it.
    pub fn load_shared(path: Option<&Path>) -> Result<Arc<Self>, ContentError> {
        let document = match path {
            Some(path) => Self::load(path)?,
            None => Self::bundled()?,
        };
        Ok(Arc::new(document))
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.personal.name.trim().is_empty() {
            return Err(ContentError::Invalid {
                field: "personal.name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if let Some((idx, skill)) = self
            .skills
            .iter()
            .enumerate()
            .find(|(_, skill)| skill.level > 100)
        {
            return Err(ContentError::Invalid {
                field: format!("skills[{}].level", idx),
                reason: format!("{} is outside 0-100", skill.level),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(level: u32) -> String {
        format!(
            r#"{{
                "personal": {{ "name": "Sam", "title": "Dev" }},
                "skills": [{{ "category": "Rust", "level": {}, "items": ["tokio"] }}]
            }}"#,
            level
        )
    }

    #[test]
    fn test_bundled_document_parses() {
        let doc = ContentDocument::bundled().unwrap();
        assert!(!doc.personal.name.is_empty());
        assert!(!doc.projects.is_empty());
        assert!(!doc.skills.is_empty());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let doc = ContentDocument::from_json(&minimal_json(50)).unwrap();
        assert!(doc.education.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.certifications.is_empty());
        assert!(doc.projects.is_empty());
        assert_eq!(doc.personal.social, SocialLinks::default());
    }

    #[test]
    fn test_level_above_hundred_is_rejected() {
        let err = ContentDocument::from_json(&minimal_json(101)).unwrap_err();
        assert!(matches!(err, ContentError::Invalid { ref field, .. } if field == "skills[0].level"));
    }

    #[test]
    fn test_level_out_of_u8_range_is_parse_error() {
        let err = ContentDocument::from_json(&minimal_json(300)).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let json = r#"{ "personal": { "name": "  ", "title": "Dev" } }"#;
        let err = ContentDocument::from_json(json).unwrap_err();
        assert!(matches!(err, ContentError::Invalid { .. }));
    }

    #[test]
    fn test_skill_tiers() {
        assert_eq!(SkillTier::from_level(95), SkillTier::Expert);
        assert_eq!(SkillTier::from_level(90), SkillTier::Expert);
        assert_eq!(SkillTier::from_level(89), SkillTier::Advanced);
        assert_eq!(SkillTier::from_level(80), SkillTier::Advanced);
        assert_eq!(SkillTier::from_level(60), SkillTier::Intermediate);
        assert_eq!(SkillTier::from_level(40), SkillTier::Beginner);
        assert_eq!(SkillTier::from_level(39), SkillTier::Learning);
        assert_eq!(SkillTier::from_level(0), SkillTier::Learning);
    }

    #[test]
    fn test_skill_stars_and_highlight() {
        let skill = SkillCategory {
            category: "Frontend".to_string(),
            level: 92,
            items: vec![],
        };
        assert_eq!(skill.stars(), 4);
        assert!(skill.is_highlighted());

        let skill = SkillCategory {
            level: 80,
            ..skill
        };
        assert!(!skill.is_highlighted());

        let full = SkillCategory {
            level: 100,
            ..skill
        };
        assert_eq!(full.stars(), 5);
    }

    #[test]
    fn test_project_feature_preview() {
        let project = Project {
            title: "P".to_string(),
            description: "D".to_string(),
            technologies: vec![],
            features: (1..=5).map(|i| format!("f{}", i)).collect(),
            demo_url: None,
            github_url: Some("https://github.com/x/p".to_string()),
        };
        assert_eq!(project.feature_preview().len(), 3);
        assert_eq!(project.hidden_feature_count(), 2);
        assert_eq!(project.primary_link(), Some("https://github.com/x/p"));

        let short = Project {
            features: vec!["only".to_string()],
            ..project
        };
        assert_eq!(short.feature_preview(), &["only".to_string()]);
        assert_eq!(short.hidden_feature_count(), 0);
    }

    #[test]
    fn test_social_links_iter_skips_missing() {
        let social = SocialLinks {
            github: Some("https://github.com/a".to_string()),
            linkedin: None,
            twitter: Some("https://twitter.com/a".to_string()),
        };
        let labels: Vec<&str> = social.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["GitHub", "Twitter"]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ContentDocument::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
