//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//! - [`mock::MockHttpClient`] - recording HTTP double for tests

pub mod mock;
pub mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
