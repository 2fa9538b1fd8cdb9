//! Shared newtypes used across all resource modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to what the bridge sends, so they can sit directly inside
//! resource records. Keys and enum values the SDK does not model are kept
//! (in `extra` maps and `Other` variants) and written back out unchanged.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::str::FromStr;

// ─── HueUuid ─────────────────────────────────────────────────────────────────

/// Resource identifier as issued by the bridge.
///
/// Normally a UUID, but kept as an opaque string: the bridge is the only
/// authority on its format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HueUuid(String);

impl HueUuid {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HueUuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HueUuid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for HueUuid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for HueUuid {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(HueUuid(s.to_string()))
    }
}

impl Serialize for HueUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HueUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(HueUuid(s))
    }
}

// ─── ResourceType ────────────────────────────────────────────────────────────

/// Kind of a bridge resource, as carried in `type` and `rtype` fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Device,
    BridgeHome,
    Room,
    Zone,
    ServiceGroup,
    Light,
    Button,
    BellButton,
    RelativeRotary,
    Temperature,
    LightLevel,
    Motion,
    CameraMotion,
    Entertainment,
    Contact,
    Tamper,
    ConvenienceAreaMotion,
    SecurityAreaMotion,
    Speaker,
    GroupedLight,
    GroupedMotion,
    GroupedLightLevel,
    DevicePower,
    DeviceSoftwareUpdate,
    ZigbeeConnectivity,
    ZgpConnectivity,
    Bridge,
    MotionAreaCandidate,
    WifiConnectivity,
    ZigbeeDeviceDiscovery,
    Homekit,
    Matter,
    MatterFabric,
    Scene,
    EntertainmentConfiguration,
    PublicImage,
    AuthV1,
    BehaviorScript,
    BehaviorInstance,
    GeofenceClient,
    Geolocation,
    SmartScene,
    MotionAreaConfiguration,
    Clip,
    /// Kind introduced by newer bridge firmware.
    #[serde(untagged)]
    Other(String),
}

// ─── ResourceIdentifier ──────────────────────────────────────────────────────

/// Reference to another resource (`owner`, `children`, `services`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rid: Option<HueUuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtype: Option<ResourceType>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── Color primitives ────────────────────────────────────────────────────────

/// CIE xy chromaticity coordinate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct XyColor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl XyColor {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            extra: Map::new(),
        }
    }
}

/// Color temperature in mirek.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mirek {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirek: Option<u16>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Direction of a relative (delta) adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaAction {
    Up,
    Down,
    Stop,
    #[serde(untagged)]
    Other(String),
}
