//! `--check`: validate a portfolio document without starting the TUI.

use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::models::{ContentDocument, SectionId};
use crate::view_state::{resolve, ViewDescriptor};

/// One-line-per-section summary of a document.
pub fn summarize(document: &ContentDocument) -> String {
    let mut out = format!("{} ({})\n", document.personal.name, document.personal.title);
    for section in SectionId::ALL {
        let detail = match resolve(section, document) {
            ViewDescriptor::Home { personal } => {
                format!("{} social links", personal.social.iter().count())
            }
            ViewDescriptor::About { education, .. } => {
                format!("{} education entries", education.len())
            }
            ViewDescriptor::Skills { skills } => format!("{} skill categories", skills.len()),
            ViewDescriptor::Experience {
                experience,
                certifications,
            } => format!(
                "{} positions, {} certifications",
                experience.len(),
                certifications.len()
            ),
            ViewDescriptor::Projects { projects } => format!("{} projects", projects.len()),
            ViewDescriptor::Contact { personal } => {
                if personal.email.is_empty() {
                    "no email address".to_string()
                } else {
                    personal.email.clone()
                }
            }
        };
        out.push_str(&format!("  {:<11} {}\n", section.entry().label, detail));
    }
    out
}

/// Load and validate the document at `path` (or the bundled one) and print
/// a summary. Errors carry the path for the exit message.
pub fn handle_check_command(path: Option<&Path>) -> Result<()> {
    let document = ContentDocument::load_shared(path).wrap_err_with(|| match path {
        Some(path) => format!("{} is not a valid portfolio document", path.display()),
        None => "bundled portfolio document is invalid".to_string(),
    })?;

    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled document".to_string());
    println!("✓ {}", source);
    print!("{}", summarize(&document));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_summary_covers_every_section() {
        let document = ContentDocument::bundled().unwrap();
        let summary = summarize(&document);
        assert!(summary.starts_with("Alex Morgan (Full-Stack Developer)"));
        for entry in crate::models::SECTION_REGISTRY.iter() {
            assert!(summary.contains(entry.label));
        }
        assert!(summary.contains("3 projects"));
        assert!(summary.contains("2 positions, 2 certifications"));
    }

    #[test]
    fn test_check_bundled_passes() {
        assert!(handle_check_command(None).is_ok());
    }

    #[test]
    fn test_check_invalid_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"personal\": 3 }}").unwrap();
        let err = handle_check_command(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("is not a valid portfolio document"));
    }
}
