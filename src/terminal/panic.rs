//! Panic hook that gives the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal restore in front of the current panic hook.
///
/// Install after `color_eyre::install()` so its report formatting is kept.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}
