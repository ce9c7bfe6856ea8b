//! Terminal lifecycle with RAII cleanup.
//!
//! ```no_run
//! use folio::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     // Terminal is restored when `manager` is dropped
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal when dropped. Cleanup runs at most once.
struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
///
/// Creating one enables raw mode, enters the alternate screen and turns on
/// mouse capture; dropping it (or calling [`restore`](Self::restore)) undoes
/// all of that. The panic hook covers paths where drop never runs.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        // From here on the guard restores raw mode even if setup fails
        let mut guard = TerminalGuard { cleaned_up: false };

        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout) {
            guard.cleanup();
            return Err(err.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("Entered alternate screen");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> Result<ratatui::layout::Rect> {
        Ok(self.terminal.size()?.into())
    }

    /// Restore the terminal now instead of on drop.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
