//! # Hue SDK
//!
//! A Rust client for the CLIP v2 resource API of a Hue bridge.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes and resource record types
//! 2. **HTTP API** — `HueHttp`: per-attempt timeout, failure classification, retries
//! 3. **High-Level Client** — `HueClient` with nested sub-clients per resource kind
//!
//! Every read returns a [`ListResponse`](http::ListResponse): either bridge
//! records in `data` or error descriptions in `errors`, never a `Result`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hue_sdk::prelude::*;
//!
//! let client = HueClient::builder()
//!     .host("192.168.1.10")
//!     .application_key("rNtZSe4KSw9os57VE7BgHAkeThpxdwjItT6acmre")
//!     .accept_invalid_certs(true)
//!     .build()?;
//!
//! let lights = client.lights().list().await;
//! if !lights.errors.is_empty() {
//!     eprintln!("{:?}", lights.errors);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all resource kinds.
pub mod shared;

/// Resource modules: record types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Bridge addressing constants and request defaults.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with timeout and retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `HueClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{HueUuid, ResourceIdentifier, ResourceType, XyColor};

    // Resource types — light
    pub use crate::domain::light::{
        Color, ColorTemperature, Dimming, Effect, Effects, Gradient, Light, LightMetadata, On,
        Powerup, Signaling,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // HTTP layer
    pub use crate::http::{
        HueHttp, ListResponse, ResourceRequest, ResponseError, RetryConfig, RetryPolicy,
    };

    // Client + sub-clients
    pub use crate::client::{HueClient, HueClientBuilder, LightsClient};
}
