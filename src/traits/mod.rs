//! Trait abstractions at the application's outer seams.
//!
//! - [`HttpClient`] - HTTP transport used by the email relay
//! - [`EmailRelay`](crate::contact::EmailRelay) lives with the contact form
//! - [`Backdrop`](crate::backdrop::Backdrop) lives with the backdrop renderer

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
