//! High-level client — `HueClient` with nested sub-client accessors.
//!
//! Each resource kind has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::light::client::Lights;
use crate::error::SdkError;
use crate::http::HueHttp;
use crate::network::{bridge_base_url, ENV_APPLICATION_KEY, ENV_BASE_URL, ENV_BRIDGE_HOST};

// Re-export sub-client types for convenience.
pub use crate::domain::light::client::Lights as LightsClient;

/// The primary entry point for the SDK.
///
/// Holds no per-call state, so one client can serve any number of
/// concurrent reads. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct HueClient {
    pub(crate) http: HueHttp,
}

impl HueClient {
    pub fn builder() -> HueClientBuilder {
        HueClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn lights(&self) -> Lights<'_> {
        Lights { client: self }
    }

    /// The request executor, for resource paths without a typed sub-client.
    pub fn http(&self) -> &HueHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct HueClientBuilder {
    host: Option<String>,
    base_url: Option<String>,
    application_key: Option<String>,
    accept_invalid_certs: bool,
}

impl HueClientBuilder {
    /// Bridge host or IP address, e.g. `"192.168.1.10"`. Reached over HTTPS.
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Full base URL (scheme included). Takes precedence over `host`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Application key obtained when the app was paired with the bridge.
    pub fn application_key(mut self, key: &str) -> Self {
        self.application_key = Some(key.to_string());
        self
    }

    /// Bridges serve a self-signed certificate; set this to talk to one
    /// without installing its root certificate.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Builder pre-filled from `HUE_BRIDGE_HOST`, `HUE_APPLICATION_KEY` and
    /// the optional `HUE_BASE_URL`.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var(ENV_BRIDGE_HOST).ok(),
            base_url: std::env::var(ENV_BASE_URL).ok(),
            application_key: std::env::var(ENV_APPLICATION_KEY).ok(),
            accept_invalid_certs: false,
        }
    }

    pub fn build(self) -> Result<HueClient, SdkError> {
        let base_url = match (self.base_url, self.host) {
            (Some(url), _) => url,
            (None, Some(host)) => bridge_base_url(&host),
            (None, None) => {
                return Err(SdkError::Config(format!(
                    "bridge host is not set (use .host() or {})",
                    ENV_BRIDGE_HOST
                )))
            }
        };
        let application_key = self.application_key.ok_or_else(|| {
            SdkError::Config(format!(
                "application key is not set (use .application_key() or {})",
                ENV_APPLICATION_KEY
            ))
        })?;

        Ok(HueClient {
            http: HueHttp::with_options(
                &base_url,
                &application_key,
                self.accept_invalid_certs,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_host() {
        let client = HueClient::builder()
            .host("192.168.1.10")
            .application_key("key")
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "https://192.168.1.10");
    }

    #[test]
    fn test_builder_base_url_wins() {
        let client = HueClient::builder()
            .host("192.168.1.10")
            .base_url("http://127.0.0.1:8080/")
            .application_key("key")
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_builder_requires_host() {
        let err = HueClient::builder()
            .application_key("key")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn test_builder_requires_key() {
        let err = HueClient::builder().host("bridge").build().unwrap_err();
        assert!(matches!(err, SdkError::Config(msg) if msg.contains("HUE_APPLICATION_KEY")));
    }

    #[test]
    fn test_builder_rejects_unusable_key() {
        let err = HueClient::builder()
            .host("bridge")
            .application_key("line\nbreak")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Http(_)));
    }
}
