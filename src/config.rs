use std::env;
use std::time::Duration;

use crate::state::Theme;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Option<Duration>,
    pub theme: Theme,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. A timeout of 0 or one that is
    /// not a whole number of seconds counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("ROLLCALL_API_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string());
        Self {
            api_url: normalize_url(&api_url),
            timeout: lookup("ROLLCALL_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            theme: lookup("ROLLCALL_THEME")
                .map(|v| Theme::parse(&v))
                .unwrap_or_default(),
        }
    }

    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            api_url: normalize_url(api_url),
            timeout: None,
            theme: Theme::default(),
        }
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
