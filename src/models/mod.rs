//! Data models: the portfolio document and the section registry.

mod content;
mod section;

pub use content::{
    Certification, ContentDocument, Education, Experience, PersonalInfo, Project, SkillCategory,
    SkillTier, SocialLinks, BUNDLED_DOCUMENT, FEATURE_PREVIEW_COUNT,
};
pub use section::{SectionEntry, SectionId, UnknownSection, SECTION_REGISTRY};
