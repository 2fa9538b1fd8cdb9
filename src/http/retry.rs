//! Retry policies for bridge requests.

use crate::error::HttpError;
use crate::network::DEFAULT_MAX_RETRIES;
use std::time::Duration;

/// Which failed attempts are followed by another attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Retry every failure kind, client errors included.
    #[default]
    Always,
    /// Retry only failures a later attempt could fix (timeouts, transport
    /// errors, 408, 429, 5xx).
    TransientOnly,
}

impl RetryPolicy {
    pub fn should_retry(&self, error: &HttpError) -> bool {
        match self {
            RetryPolicy::Always => true,
            RetryPolicy::TransientOnly => error.is_transient(),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Which failures are retried.
    pub policy: RetryPolicy,
    /// Delay before the first retry. Zero retries immediately.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add jitter to the delay.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            policy: RetryPolicy::Always,
            initial_delay: Duration::ZERO,
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: false,
        }
    }
}

impl RetryConfig {
    /// A config with the given budget and immediate retries.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// No retries at all: exactly one attempt.
    pub fn none() -> Self {
        Self::new(0)
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable exponential backoff starting at `initial_delay`.
    pub fn with_backoff(mut self, initial_delay: Duration, max_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self.max_delay = max_delay;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Total attempts this config allows.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if self.initial_delay.is_zero() {
            return Duration::ZERO;
        }

        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_config_default_retries_immediately() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.max_attempts(), 4);
        assert_eq!(config.policy, RetryPolicy::Always);
        for attempt in 0..4 {
            assert_eq!(config.delay_for_attempt(attempt), Duration::ZERO);
        }
    }

    #[test]
    fn test_retry_none_is_single_attempt() {
        assert_eq!(RetryConfig::none().max_attempts(), 1);
    }

    #[test]
    fn test_policy_always_retries_client_errors() {
        let err = HttpError::Status {
            status: 401,
            body: String::new(),
        };
        assert!(RetryPolicy::Always.should_retry(&err));
        assert!(!RetryPolicy::TransientOnly.should_retry(&err));
        assert!(RetryPolicy::TransientOnly.should_retry(&HttpError::Timeout));
    }

    #[test]
    fn test_retry_config_delay_for_attempt_no_jitter() {
        let config = RetryConfig::new(3)
            .with_backoff(Duration::from_millis(100), Duration::from_secs(10));
        let d0 = config.delay_for_attempt(0);
        let d1 = config.delay_for_attempt(1);
        let d2 = config.delay_for_attempt(2);
        assert_eq!(d0.as_millis(), 100);
        assert_eq!(d1.as_millis(), 200);
        assert_eq!(d2.as_millis(), 400);
    }

    #[test]
    fn test_retry_config_delay_caps_at_max() {
        let config = RetryConfig {
            backoff_factor: 10.0,
            ..RetryConfig::new(5)
                .with_backoff(Duration::from_millis(1000), Duration::from_millis(2000))
        };
        let d = config.delay_for_attempt(3);
        assert_eq!(d.as_millis(), 2000);
    }

    #[test]
    fn test_retry_config_jitter_stays_in_range() {
        let config = RetryConfig::new(3)
            .with_backoff(Duration::from_millis(400), Duration::from_secs(10))
            .with_jitter(true);
        for _ in 0..20 {
            let d = config.delay_for_attempt(0).as_millis();
            assert!((300..=500).contains(&d), "delay {d} out of range");
        }
    }
}
