//! Application configuration
//!
//! Provided to the component tree as a Dioxus context. Every field has a default so the
//! app runs against a same-origin backend without any setup.

use serde::Deserialize;
use std::time::Duration;

use crate::shared::constants::{
    MOBILE_BREAKPOINT_PX, PREFERENCE_TTL_DAYS, ROLE_CHECK_TIMEOUT_MS,
};
use crate::shared::errors::Result;

/// Environment variable holding a JSON config document on native builds
pub const CONFIG_JSON_ENV: &str = "PORTFOLIO_SHELL_CONFIG";

/// Environment variable overriding the backend base URL on native builds
pub const API_BASE_URL_ENV: &str = "PORTFOLIO_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the REST backend; empty means same origin
    pub api_base_url: String,
    pub role_check_timeout_ms: u64,
    pub mobile_breakpoint_px: f64,
    pub preference_ttl_days: i64,
    /// Whether mobile-forced minimization is written to the stored preference
    pub persist_forced_minimize: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            role_check_timeout_ms: ROLE_CHECK_TIMEOUT_MS,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            preference_ttl_days: PREFERENCE_TTL_DAYS,
            persist_forced_minimize: true,
        }
    }
}

impl AppConfig {
    /// Parse a JSON config document; missing fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Default config with native environment overrides applied.
    /// An unparsable `PORTFOLIO_SHELL_CONFIG` is logged and ignored.
    pub fn load() -> Self {
        #[allow(unused_mut)]
        let mut config = Self::default();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(raw) = std::env::var(CONFIG_JSON_ENV) {
                match Self::from_json(&raw) {
                    Ok(parsed) => config = parsed,
                    Err(e) => tracing::warn!("Ignoring {}: {}", CONFIG_JSON_ENV, e),
                }
            }
            if let Ok(base) = std::env::var(API_BASE_URL_ENV) {
                config.api_base_url = base;
            }
        }

        config
    }

    pub fn with_api_base_url(mut self, base: impl Into<String>) -> Self {
        self.api_base_url = base.into();
        self
    }

    pub fn role_check_timeout(&self) -> Duration {
        Duration::from_millis(self.role_check_timeout_ms)
    }

    /// Absolute URL for a backend endpoint
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}
