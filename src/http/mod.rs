//! HTTP client layer — `HueHttp` with per-request timeout and retry policy.

pub mod client;
pub mod envelope;
pub mod request;
pub mod retry;

pub use client::HueHttp;
pub use envelope::{ListResponse, ResponseError, GENERIC_FAILURE_DESCRIPTION};
pub use request::ResourceRequest;
pub use retry::{RetryConfig, RetryPolicy};
