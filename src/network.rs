//! Bridge addressing and request defaults.

use std::time::Duration;

/// Versioned resource namespace appended to the bridge authority.
pub const RESOURCE_PREFIX: &str = "/clip/v2/resource";

/// Header carrying the paired application key.
pub const APPLICATION_KEY_HEADER: &str = "hue-application-key";

/// Per-attempt timeout used when a request does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

/// Retries after the first attempt when a request does not set a budget.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Environment variable holding the bridge host or IP address.
pub const ENV_BRIDGE_HOST: &str = "HUE_BRIDGE_HOST";

/// Environment variable holding the application key.
pub const ENV_APPLICATION_KEY: &str = "HUE_APPLICATION_KEY";

/// Optional environment override for the full base URL (scheme included).
pub const ENV_BASE_URL: &str = "HUE_BASE_URL";

/// Base URL for a bridge reachable at `host`.
pub fn bridge_base_url(host: &str) -> String {
    format!("https://{}", host.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_base_url() {
        assert_eq!(bridge_base_url("192.168.1.10"), "https://192.168.1.10");
        assert_eq!(bridge_base_url("bridge.local/"), "https://bridge.local");
    }
}
