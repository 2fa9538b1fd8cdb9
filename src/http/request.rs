//! Request descriptor for a single read against the resource namespace.

use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network::DEFAULT_TIMEOUT;
use std::time::Duration;

/// One logical GET: a resource path plus the policy the executor applies.
///
/// `body` is attached to the first attempt only; retries go out without it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRequest {
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub retry: RetryConfig,
    pub timeout: Duration,
}

impl ResourceRequest {
    /// Request for `path` (e.g. `"/lights"`) with the default budget of 3
    /// retries and an 8 second per-attempt timeout.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: None,
            retry: RetryConfig::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.retry.max_retries = max_retries;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry.policy = policy;
        self
    }

    /// Per-attempt timeout. A zero duration is bumped to one millisecond.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(Duration::from_millis(1));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let req = ResourceRequest::new("/lights");
        assert_eq!(req.path, "/lights");
        assert!(req.body.is_none());
        assert_eq!(req.retry.max_retries, 3);
        assert_eq!(req.timeout, Duration::from_millis(8000));
    }

    #[test]
    fn test_request_builder() {
        let req = ResourceRequest::new("/lights")
            .with_body(json!({"on": {"on": true}}))
            .with_max_retries(0)
            .with_retry_policy(RetryPolicy::TransientOnly)
            .with_timeout(Duration::from_millis(250));

        assert_eq!(req.body, Some(json!({"on": {"on": true}})));
        assert_eq!(req.retry.max_retries, 0);
        assert_eq!(req.retry.policy, RetryPolicy::TransientOnly);
        assert_eq!(req.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let req = ResourceRequest::new("/lights").with_timeout(Duration::ZERO);
        assert_eq!(req.timeout, Duration::from_millis(1));
    }
}
