//! Command-line argument parsing for folio.
//!
//! Arguments are hand-parsed: the surface is a handful of flags.

use std::path::PathBuf;

use thiserror::Error;

/// Options for the interactive viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Portfolio document to show instead of the bundled one
    pub content: Option<PathBuf>,
    /// Section to open once loading finishes
    pub section: Option<String>,
    /// Skip the loading delay and animations
    pub no_anim: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Validate a document and print a summary
    Check { path: Option<PathBuf> },
    /// Run the TUI application (default)
    Run(RunOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
}

pub const USAGE: &str = "\
Usage: folio [OPTIONS]

Options:
  --content <path>   Show the portfolio document at <path>
  --section <id>     Open a section after loading
                     (home, about, skills, experience, projects, contact)
  --no-anim          Skip the loading screen and animations
  --check [path]     Validate a portfolio document and exit
  -V, --version      Print version
  -h, --help         Print this help

Environment:
  FOLIO_CONTENT, FOLIO_LOADING_MS, FOLIO_LOG, FOLIO_LOG_DIR,
  FOLIO_EMAILJS_SERVICE_ID, FOLIO_EMAILJS_TEMPLATE_ID, FOLIO_EMAILJS_PUBLIC_KEY,
  FOLIO_EMAILJS_URL";

/// Parse command-line arguments and return the appropriate command.
///
/// The first argument is the program name. Unknown flags are ignored.
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--check" => {
                let path = args.next_if(|next| !next.starts_with('-')).map(PathBuf::from);
                return Ok(CliCommand::Check { path });
            }
            "--content" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--content"))?;
                options.content = Some(PathBuf::from(value));
            }
            "--section" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--section"))?;
                options.section = Some(value);
            }
            "--no-anim" => options.no_anim = true,
            _ => {}
        }
    }
    Ok(CliCommand::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        parse_args(
            std::iter::once("folio")
                .chain(args.iter().copied())
                .map(String::from),
        )
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(RunOptions::default())));
    }

    #[test]
    fn test_parse_run_options() {
        let command = parse(&["--content", "me.json", "--section", "skills", "--no-anim"]);
        assert_eq!(
            command,
            Ok(CliCommand::Run(RunOptions {
                content: Some(PathBuf::from("me.json")),
                section: Some("skills".to_string()),
                no_anim: true,
            }))
        );
    }

    #[test]
    fn test_parse_check_with_and_without_path() {
        assert_eq!(
            parse(&["--check", "me.json"]),
            Ok(CliCommand::Check {
                path: Some(PathBuf::from("me.json"))
            })
        );
        assert_eq!(parse(&["--check"]), Ok(CliCommand::Check { path: None }));
        assert_eq!(
            parse(&["--check", "--no-anim"]),
            Ok(CliCommand::Check { path: None })
        );
    }

    #[test]
    fn test_missing_value_is_an_error() {
        assert_eq!(parse(&["--content"]), Err(ArgsError::MissingValue("--content")));
        assert_eq!(parse(&["--section"]), Err(ArgsError::MissingValue("--section")));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Ok(CliCommand::Run(RunOptions::default()))
        );
    }
}
