//! Concrete implementations of the crate's trait abstractions.
//!
//! The production adapter wraps `reqwest`; the mock adapter lives under
//! [`mock`] and is compiled unconditionally so integration tests can use
//! it.

pub mod mock;
mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
