//! List every light on a bridge.
//!
//! Reads `HUE_BRIDGE_HOST` and `HUE_APPLICATION_KEY` (a `.env` file works too).
//!
//! ```bash
//! RUST_LOG=hue_sdk=debug cargo run --example list_lights
//! ```

use hue_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = HueClientBuilder::from_env()
        .accept_invalid_certs(true)
        .build()?;

    let ListResponse { errors, data } = client.lights().list().await;
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("error: {}", error.description);
        }
        return Ok(());
    }

    for light in &data {
        let state = match light.is_on() {
            Some(true) => "on",
            Some(false) => "off",
            None => "-",
        };
        let brightness = light
            .brightness()
            .map(|b| format!("{:.0}%", b))
            .unwrap_or_default();
        println!(
            "{}  {:<24} {:<3} {}",
            light.id,
            light.name().unwrap_or("(unnamed)"),
            state,
            brightness
        );
    }

    println!("\n{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
