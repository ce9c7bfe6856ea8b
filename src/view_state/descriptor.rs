//! Section-to-view resolution.

use crate::models::{
    Certification, ContentDocument, Education, Experience, PersonalInfo, Project, SectionId,
    SkillCategory,
};

/// What a section displays, as borrowed slices of the content document.
///
/// Each variant holds only the slices its section reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDescriptor<'a> {
    Home {
        personal: &'a PersonalInfo,
    },
    About {
        personal: &'a PersonalInfo,
        education: &'a [Education],
    },
    Skills {
        skills: &'a [SkillCategory],
    },
    Experience {
        experience: &'a [Experience],
        certifications: &'a [Certification],
    },
    Projects {
        projects: &'a [Project],
    },
    Contact {
        personal: &'a PersonalInfo,
    },
}

impl ViewDescriptor<'_> {
    /// Section this view belongs to.
    pub fn section(&self) -> SectionId {
        match self {
            ViewDescriptor::Home { .. } => SectionId::Home,
            ViewDescriptor::About { .. } => SectionId::About,
            ViewDescriptor::Skills { .. } => SectionId::Skills,
            ViewDescriptor::Experience { .. } => SectionId::Experience,
            ViewDescriptor::Projects { .. } => SectionId::Projects,
            ViewDescriptor::Contact { .. } => SectionId::Contact,
        }
    }
}

/// Map a section to its view over `content`. Pure and total.
pub fn resolve(section: SectionId, content: &ContentDocument) -> ViewDescriptor<'_> {
    match section {
        SectionId::Home => ViewDescriptor::Home {
            personal: &content.personal,
        },
        SectionId::About => ViewDescriptor::About {
            personal: &content.personal,
            education: &content.education,
        },
        SectionId::Skills => ViewDescriptor::Skills {
            skills: &content.skills,
        },
        SectionId::Experience => ViewDescriptor::Experience {
            experience: &content.experience,
            certifications: &content.certifications,
        },
        SectionId::Projects => ViewDescriptor::Projects {
            projects: &content.projects,
        },
        SectionId::Contact => ViewDescriptor::Contact {
            personal: &content.personal,
        },
    }
}

/// Resolve an untyped identifier; unknown identifiers resolve to home.
pub fn resolve_raw<'a>(raw: &str, content: &'a ContentDocument) -> ViewDescriptor<'a> {
    resolve(SectionId::parse_or_home(raw), content)
}
