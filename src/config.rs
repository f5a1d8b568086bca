//! Page configuration.
//!
//! Values come from build-time environment variables (the page is a static
//! bundle, so there is no runtime environment to read) and fall back to
//! defaults when unset or unparsable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

use crate::consts::STATUS_DISMISS_MS;

const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/your-form-id";
const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioConfig {
    /// Where the contact form posts.
    pub form_endpoint: String,
    /// Give up on a submission after this long. `None` waits indefinitely.
    pub submit_timeout: Option<Duration>,
    /// Delay before a success message fades out.
    pub status_dismiss_ms: u32,
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_owned(),
            submit_timeout: None,
            status_dismiss_ms: STATUS_DISMISS_MS,
            theme_storage_key: DEFAULT_THEME_KEY.to_owned(),
        }
    }
}

impl PortfolioConfig {
    /// Configuration baked in at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_FORM_ENDPOINT"),
            option_env!("PORTFOLIO_SUBMIT_TIMEOUT_MS"),
            option_env!("PORTFOLIO_STATUS_DISMISS_MS"),
        )
    }

    /// Build from raw values; `None` or garbage keeps the default.
    #[must_use]
    pub fn from_values(endpoint: Option<&str>, timeout_ms: Option<&str>, dismiss_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let form_endpoint = endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map_or(defaults.form_endpoint, str::to_owned);
        let submit_timeout = parse_or(timeout_ms, 0_u64);
        Self {
            form_endpoint,
            submit_timeout: (submit_timeout > 0).then(|| Duration::from_millis(submit_timeout)),
            status_dismiss_ms: parse_or(dismiss_ms, defaults.status_dismiss_ms),
            theme_storage_key: defaults.theme_storage_key,
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    match raw.map(|v| v.trim().parse::<T>()) {
        Some(Ok(v)) => v,
        Some(Err(_)) => {
            log::warn!("ignoring unparsable config value {raw:?}");
            default
        }
        None => default,
    }
}
