//! View-only data derived from application state.
//!
//! Rendering never reads the content document directly; it asks
//! [`resolve`] for the [`ViewDescriptor`] of the active section and draws
//! that.
//!
//! ```text
//! NavigationController ──active section──┐
//!                                        ▼
//! ContentDocument ───────────────► resolve() ──► ViewDescriptor ──► ui
//! ```

mod descriptor;
mod scroll_state;

pub use descriptor::{resolve, resolve_raw, ViewDescriptor};
pub use scroll_state::ScrollState;
