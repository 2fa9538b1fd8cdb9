//! Resource modules, one per bridge resource kind.
//!
//! Each sub-module contains:
//! - `mod.rs` — Record types matching the bridge's JSON, feature blocks included
//! - `client.rs` — Sub-client binding the resource path to the HTTP layer

pub mod light;
