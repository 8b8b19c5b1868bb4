//! Trait abstractions for dependency injection and testability.
//!
//! The data access layer talks to GitHub through [`HttpClient`] so the
//! render pass can be exercised against canned responses in tests.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations against the REST API

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
