//! Usage-limits fetch for the rate-limits widget.
//!
//! One authenticated GET against the Claude usage endpoint, cached
//! aggressively (60s by default) so a render tick almost never pays for
//! the network round trip. Any credential, network, or decode problem
//! resolves to `None` and the widget stays out of the line.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::CacheManager;
use crate::util::now_ms;

const USAGE_API_URL: &str = "https://api.anthropic.com/api/oauth/usage";
const CACHE_KEY: &str = "usage-limits";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// One rate-limit window as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageWindow {
    /// Current utilization percentage (0-100).
    pub utilization: f64,
    #[allow(dead_code)] // Deserialized for forward-compatibility; not rendered.
    #[serde(default)]
    pub resets_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageLimits {
    #[serde(default)]
    pub five_hour: Option<UsageWindow>,
    #[serde(default)]
    pub seven_day: Option<UsageWindow>,
    #[serde(default)]
    pub seven_day_opus: Option<UsageWindow>,
}

#[derive(Deserialize)]
struct CredentialFile {
    #[serde(rename = "claudeAiOauth")]
    claude_ai_oauth: Option<OauthCredentials>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OauthCredentials {
    access_token: String,
    #[serde(default)]
    expires_at: Option<u64>,
}

fn credentials_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("STATUSLINE_CREDENTIALS") {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".claude").join(".credentials.json"))
}

/// A usable OAuth access token, or `None` when credentials are missing,
/// unreadable, or expired.
fn access_token() -> Option<String> {
    let path = credentials_path()?;
    let contents = std::fs::read_to_string(path).ok()?;
    let creds: CredentialFile = serde_json::from_str(&contents).ok()?;
    let oauth = creds.claude_ai_oauth?;

    if let Some(expires_at) = oauth.expires_at {
        if now_ms() > expires_at {
            return None;
        }
    }

    if oauth.access_token.is_empty() {
        return None;
    }
    Some(oauth.access_token)
}

/// Current usage limits, from cache when fresh, otherwise from the API.
pub fn fetch_usage_limits(cache: &CacheManager, ttl_secs: u64) -> Option<UsageLimits> {
    if let Some(cached) = cache.get::<UsageLimits>(CACHE_KEY) {
        return Some(cached);
    }

    let token = access_token()?;

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .ok()?;

    let response = client
        .get(USAGE_API_URL)
        .bearer_auth(token)
        .header("Accept", "application/json")
        .header("anthropic-beta", "oauth-2025-04-20")
        .send()
        .ok()?;

    if !response.status().is_success() {
        return None;
    }

    let limits: UsageLimits = response.json().ok()?;
    cache.set(CACHE_KEY, limits.clone(), ttl_secs);
    Some(limits)
}
