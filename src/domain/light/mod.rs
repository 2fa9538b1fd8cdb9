//! Light resource — base record plus the optional feature blocks.
//!
//! Which blocks are present depends on what the physical light can do; a
//! plain on/off plug carries `on` and little else. Only `id` and `type` are
//! required. Everything else is optional down to the innermost field, and
//! every block keeps the keys it does not model in `extra`, so a record
//! re-encodes to the JSON it was decoded from (numbers compare by value).

pub mod client;

use crate::shared::{DeltaAction, HueUuid, Mirek, ResourceIdentifier, ResourceType, XyColor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Light ───────────────────────────────────────────────────────────────────

/// A light service as returned by `GET /clip/v2/resource/lights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub id: HueUuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_v1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<ResourceIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LightMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_data: Option<ProductData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identify: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<On>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimming: Option<Dimming>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimming_delta: Option<DimmingDelta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<ColorTemperature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temperature_delta: Option<ColorTemperatureDelta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamics: Option<Dynamics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signaling: Option<Signaling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Effects>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects_v2: Option<EffectsV2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timed_effects: Option<TimedEffects>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powerup: Option<Powerup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_configuration: Option<ContentConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// Top-level keys this SDK does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Light {
    /// Human-readable name, if the bridge has one on record.
    pub fn name(&self) -> Option<&str> {
        self.metadata.as_ref()?.name.as_deref()
    }

    /// `Some(true)` when on, `None` when the light has no on/off feature.
    pub fn is_on(&self) -> Option<bool> {
        self.on.as_ref()?.on
    }

    /// Brightness percentage, if the light is dimmable.
    pub fn brightness(&self) -> Option<f64> {
        self.dimming.as_ref()?.brightness
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LightMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_archetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_platform_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── On / dimming ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct On {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimming {
    /// Percentage, 0–100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_dim_level: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DimmingDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<DeltaAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness_delta: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── Color temperature ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorTemperature {
    /// `Some(None)` is an explicit `null`, sent while the light is in xy
    /// color mode.
    #[serde(
        default,
        deserialize_with = "crate::shared::serde_util::nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub mirek: Option<Option<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirek_valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirek_schema: Option<MirekSchema>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColorTemperature {
    /// Current mirek, `None` when absent or null.
    pub fn current_mirek(&self) -> Option<u16> {
        self.mirek.flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MirekSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirek_minimum: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirek_maximum: Option<u16>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorTemperatureDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<DeltaAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirek_delta: Option<u16>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── Color ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xy: Option<XyColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamut: Option<ColorGamut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamut_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Triangle of reproducible colors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorGamut {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<XyColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<XyColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<XyColor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Color as reported inside signaling and gradient points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BasicColor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xy: Option<XyColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<Mirek>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── Dynamics / alert / signaling ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicsStatus {
    None,
    DynamicPalette,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dynamics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DynamicsStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_values: Option<Vec<DynamicsStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_valid: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertEffect {
    Breathe,
    Okay,
    ChannelChange,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_values: Option<Vec<AlertEffect>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    NoSignal,
    OnOff,
    OnOffColor,
    Alternating,
    Notification,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signaling {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_values: Option<Vec<Signal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SignalingStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalingStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<Signal>,
    /// Timestamp text exactly as the bridge sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<BasicColor>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SignalingStatus {
    /// `estimated_end` as a UTC instant; `None` when absent or not RFC 3339.
    pub fn estimated_end_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.estimated_end.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

// ─── Gradient ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientMode {
    InterpolatedPalette,
    InterpolatedPaletteMirrored,
    RandomPixelated,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradientPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<BasicColor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gradient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<GradientPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<GradientMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_capable: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_values: Option<Vec<GradientMode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_count: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── Effects ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Prism,
    Opal,
    Glisten,
    Sparkle,
    Fire,
    Candle,
    Underwater,
    Cosmos,
    Sunbeam,
    Enchant,
    NoEffect,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Effects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_values: Option<Vec<Effect>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_values: Option<Vec<Effect>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectsV2 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<EffectsV2Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EffectsV2Status>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectsV2Action {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_values: Option<Vec<Effect>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectsV2Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_values: Option<Vec<Effect>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<EffectParameters>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<EffectColor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectColor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xy: Option<XyColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<EffectColorTemperature>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectColorTemperature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirek: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirek_valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimedEffect {
    Sunrise,
    Sunset,
    NoEffect,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimedEffects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TimedEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_values: Option<Vec<TimedEffect>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_values: Option<Vec<TimedEffect>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── Powerup ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerupPreset {
    Safety,
    Powerfail,
    LastOnState,
    Custom,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerupOnMode {
    On,
    Toggle,
    Previous,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerupDimmingMode {
    Dimming,
    Previous,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Color,
    ColorTemperature,
    Previous,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Powerup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<PowerupPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<PowerupOn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimming: Option<PowerupDimming>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<PowerupColor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerupOn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<PowerupOnMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<On>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerupDimming {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<PowerupDimmingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimming: Option<PowerupBrightness>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerupBrightness {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerupColor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ColorMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<Mirek>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<PowerupXy>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerupXy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xy: Option<XyColor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Whether the light is under normal control or streaming entertainment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Normal,
    Streaming,
    #[serde(untagged)]
    Other(String),
}

// ─── Content configuration ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationStatus {
    Seated,
    Changing,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelOrder {
    Forward,
    Reversed,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrientationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConfigurationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConfigurationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<PixelOrder>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<OrientationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
