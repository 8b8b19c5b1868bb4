//! Mock implementations for testing.
//!
//! Enables exercising the data access layer and the render pass without
//! network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
