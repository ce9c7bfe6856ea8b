//! CLI module for folio.
//!
//! - Argument parsing
//! - Version and help display
//! - Document validation (`--check`)
//!
//! The dispatcher runs early in main(), before the terminal is touched:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     if let Err(e) = result {
//!         eprintln!("Error: {:?}", e);
//!         std::process::exit(1);
//!     }
//!     std::process::exit(0);
//! }
//! // Not a CLI command, continue to the TUI
//! ```

pub mod args;
pub mod check;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions, USAGE};
pub use check::{handle_check_command, summarize};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// * `None` - the command is `Run` (start the TUI)
/// * `Some(Ok(()))` - a CLI command executed successfully
/// * `Some(Err(e))` - a CLI command failed
///
/// `Version` never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("folio {}\n\n{}", VERSION, USAGE);
            Some(Ok(()))
        }
        CliCommand::Check { path } => Some(handle_check_command(path.as_deref())),
        CliCommand::Run(_) => None,
    }
}
