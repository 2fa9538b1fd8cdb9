//! Low-level HTTP client — `HueHttp`.
//!
//! Owns the transport and the per-request policy: per-attempt timeout,
//! failure classification and the retry loop. Returns list envelopes of
//! whatever record type the caller asks for; the domain layer wraps this.

use crate::error::HttpError;
use crate::http::envelope::{ListResponse, GENERIC_FAILURE_DESCRIPTION};
use crate::http::request::ResourceRequest;
use crate::network::{APPLICATION_KEY_HEADER, RESOURCE_PREFIX};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for a bridge's CLIP v2 resource API.
#[derive(Debug, Clone)]
pub struct HueHttp {
    base_url: String,
    client: Client,
}

impl HueHttp {
    /// Client for the bridge at `base_url` (scheme included, e.g.
    /// `"https://192.168.1.10"`), authenticating with `application_key`.
    pub fn new(base_url: &str, application_key: &str) -> Result<Self, HttpError> {
        Self::with_options(base_url, application_key, false)
    }

    pub(crate) fn with_options(
        base_url: &str,
        application_key: &str,
        accept_invalid_certs: bool,
    ) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut key = HeaderValue::from_str(application_key)
            .map_err(|e| HttpError::Build(format!("Invalid application key: {}", e)))?;
        key.set_sensitive(true);
        headers.insert(APPLICATION_KEY_HEADER, key);

        // Every attempt opens its own connection.
        let client = Client::builder()
            .default_headers(headers)
            .pool_max_idle_per_host(0)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a resource path such as `/lights`.
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, RESOURCE_PREFIX, path)
    }

    /// Fetch `request.path` as a list of `T`.
    ///
    /// Never fails: once the retry budget is spent the envelope carries a
    /// single generic error and no data. Use [`HueHttp::try_get`] to see why.
    pub async fn get<T: DeserializeOwned>(&self, request: &ResourceRequest) -> ListResponse<T> {
        match self.try_get(request).await {
            Ok(resp) => resp,
            Err(_) => ListResponse::failure(GENERIC_FAILURE_DESCRIPTION),
        }
    }

    /// Same attempt loop as [`HueHttp::get`], but a terminal failure comes
    /// back as the classified error of the last attempt.
    ///
    /// Returns the attempt's own error when the retry policy refuses to
    /// retry it, and `MaxRetriesExceeded` once the budget is used up.
    pub async fn try_get<T: DeserializeOwned>(
        &self,
        request: &ResourceRequest,
    ) -> Result<ListResponse<T>, HttpError> {
        let url = self.resource_url(&request.path);
        let config = &request.retry;
        let mut attempt: u32 = 0;

        loop {
            // The body only rides along on the first attempt.
            let body = if attempt == 0 {
                request.body.as_ref()
            } else {
                None
            };

            let result =
                match tokio::time::timeout(request.timeout, self.do_request::<T>(&url, body)).await
                {
                    Ok(result) => result,
                    Err(_) => Err(HttpError::Timeout),
                };

            let err = match result {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            if !config.policy.should_retry(&err) {
                tracing::debug!(
                    attempt = attempt + 1,
                    error = %err,
                    "Not retrying request to {}",
                    url
                );
                return Err(err);
            }

            if attempt >= config.max_retries {
                tracing::warn!(
                    attempts = attempt + 1,
                    error = %err,
                    "Giving up on request to {}",
                    url
                );
                return Err(HttpError::MaxRetriesExceeded {
                    attempts: attempt + 1,
                    last_error: Box::new(err),
                });
            }

            let delay = config.delay_for_attempt(attempt);
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Retrying request to {}",
                url
            );
            if delay > Duration::ZERO {
                tokio::time::sleep(delay).await;
            }
            attempt += 1;
        }
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ListResponse<T>, HttpError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", url, e)))?;

        let mut req = self.client.get(parsed);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(HttpError::from_reqwest)?;
        let status = resp.status();

        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let bytes = resp.bytes().await.map_err(HttpError::from_reqwest)?;
        serde_json::from_slice(&bytes).map_err(|e| HttpError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::retry::RetryPolicy;
    use serde_json::Value;

    #[test]
    fn test_resource_url() {
        let http = HueHttp::new("https://192.168.1.10/", "key").unwrap();
        assert_eq!(http.base_url(), "https://192.168.1.10");
        assert_eq!(
            http.resource_url("/lights"),
            "https://192.168.1.10/clip/v2/resource/lights"
        );
    }

    #[test]
    fn test_invalid_application_key_is_rejected() {
        let err = HueHttp::new("https://192.168.1.10", "bad\nkey").unwrap_err();
        assert!(matches!(err, HttpError::Build(_)));
    }

    #[test]
    fn test_malformed_url_uses_whole_budget() {
        let http = HueHttp::new("not a url", "key").unwrap();
        let request = ResourceRequest::new("/lights").with_max_retries(2);

        let err = tokio_test::block_on(http.try_get::<Value>(&request)).unwrap_err();
        match err {
            HttpError::MaxRetriesExceeded {
                attempts,
                last_error,
            } => {
                assert_eq!(attempts, 3);
                assert!(matches!(*last_error, HttpError::InvalidUrl(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_url_not_retried_when_transient_only() {
        let http = HueHttp::new("not a url", "key").unwrap();
        let request =
            ResourceRequest::new("/lights").with_retry_policy(RetryPolicy::TransientOnly);

        let err = tokio_test::block_on(http.try_get::<Value>(&request)).unwrap_err();
        assert!(matches!(err, HttpError::InvalidUrl(_)));
    }

    #[test]
    fn test_get_collapses_failure_into_envelope() {
        let http = HueHttp::new("not a url", "key").unwrap();
        let request = ResourceRequest::new("/lights").with_max_retries(0);

        let resp: ListResponse<Value> = tokio_test::block_on(http.get(&request));
        assert!(resp.data.is_empty());
        assert_eq!(resp.errors.len(), 1);
        assert_eq!(resp.errors[0].description, GENERIC_FAILURE_DESCRIPTION);
    }
}
