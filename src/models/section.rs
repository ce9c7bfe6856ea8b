//! Section identifiers and the fixed section registry.

use std::fmt;
use std::str::FromStr;

/// One of the six navigable portfolio sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

/// Error returned when parsing an identifier outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl SectionId {
    /// All sections in registry order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Stable lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Parse an external identifier, coercing anything unknown to `Home`.
    pub fn parse_or_home(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// Position in the registry.
    pub fn index(&self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Skills => 2,
            SectionId::Experience => 3,
            SectionId::Projects => 4,
            SectionId::Contact => 5,
        }
    }

    /// Section at a registry position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Registry entry for this section.
    pub fn entry(&self) -> &'static SectionEntry {
        &SECTION_REGISTRY[self.index()]
    }

    /// Text the decorative backdrop shows for this section.
    pub fn backdrop_label(&self) -> &'static str {
        match self {
            SectionId::Home => "Portfolio",
            SectionId::About => "ABOUT",
            SectionId::Skills => "SKILLS",
            SectionId::Experience => "EXPERIENCE",
            SectionId::Projects => "PROJECTS",
            SectionId::Contact => "CONTACT",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(SectionId::Home),
            "about" => Ok(SectionId::About),
            "skills" => Ok(SectionId::Skills),
            "experience" => Ok(SectionId::Experience),
            "projects" => Ok(SectionId::Projects),
            "contact" => Ok(SectionId::Contact),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// A navigation registry entry: id, label and icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The complete, ordered universe of navigable sections.
pub static SECTION_REGISTRY: [SectionEntry; 6] = [
    SectionEntry {
        id: SectionId::Home,
        label: "Home",
        icon: "⌂",
    },
    SectionEntry {
        id: SectionId::About,
        label: "About",
        icon: "☺",
    },
    SectionEntry {
        id: SectionId::Skills,
        label: "Skills",
        icon: "</>",
    },
    SectionEntry {
        id: SectionId::Experience,
        label: "Experience",
        icon: "▤",
    },
    SectionEntry {
        id: SectionId::Projects,
        label: "Projects",
        icon: "★",
    },
    SectionEntry {
        id: SectionId::Contact,
        label: "Contact",
        icon: "✉",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_ids() {
        for (idx, entry) in SECTION_REGISTRY.iter().enumerate() {
            assert_eq!(entry.id.index(), idx);
            assert_eq!(SectionId::from_index(idx), Some(entry.id));
        }
        assert_eq!(SectionId::from_index(6), None);
    }

    #[test]
    fn test_round_trip_through_str() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        assert!("bogus-section".parse::<SectionId>().is_err());
        assert!("Home".parse::<SectionId>().is_err());
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_parse_or_home_coerces() {
        assert_eq!(SectionId::parse_or_home("projects"), SectionId::Projects);
        assert_eq!(SectionId::parse_or_home("nope"), SectionId::Home);
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(SectionId::Contact.next(), SectionId::Home);
        assert_eq!(SectionId::Home.prev(), SectionId::Contact);
        assert_eq!(SectionId::Skills.next(), SectionId::Experience);
    }

    #[test]
    fn test_backdrop_labels() {
        assert_eq!(SectionId::Home.backdrop_label(), "Portfolio");
        assert_eq!(SectionId::Skills.backdrop_label(), "SKILLS");
        assert_eq!(SectionId::Contact.backdrop_label(), "CONTACT");
    }
}
