//! folio - a terminal portfolio viewer
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod backdrop;
pub mod cli;
pub mod contact;
pub mod error;
pub mod models;
pub mod navigation;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
