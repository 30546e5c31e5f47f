//! Trait abstractions for injected collaborators.

mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
