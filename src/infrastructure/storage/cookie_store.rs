//! `document.cookie` backed preference store
//!
//! Header parsing and formatting are plain functions so they run in native tests; only the
//! store itself touches the DOM.

use chrono::{DateTime, Duration, Utc};

/// Value of `key` in a `document.cookie` style header (`a=1; b=2`)
pub fn parse_cookie_header(header: &str, key: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, raw)| {
            urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

/// Cookie `expires` attribute format (`Wed, 08 Jan 2025 10:00:00 GMT`)
pub fn format_cookie_expiry(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

pub fn format_set_cookie(key: &str, value: &str, now: DateTime<Utc>, ttl_days: i64) -> String {
    format!(
        "{}={}; expires={}; path=/; SameSite=Lax",
        key,
        urlencoding::encode(value),
        format_cookie_expiry(now + Duration::days(ttl_days))
    )
}

/// An already-expired cookie deletes the key
pub fn format_remove_cookie(key: &str) -> String {
    format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/; SameSite=Lax", key)
}

#[cfg(target_arch = "wasm32")]
pub use browser::CookiePreferenceStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use chrono::Utc;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    use super::{format_remove_cookie, format_set_cookie, parse_cookie_header};
    use crate::infrastructure::storage::PreferenceStore;
    use crate::shared::errors::{AppError, Result};

    #[derive(Debug, Default, Clone, Copy)]
    pub struct CookiePreferenceStore;

    impl CookiePreferenceStore {
        pub fn new() -> Self {
            Self
        }

        fn document() -> Result<HtmlDocument> {
            web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
                .ok_or_else(|| AppError::Storage("document is not available".to_string()))
        }

        fn write(raw: &str) -> Result<()> {
            Self::document()?
                .set_cookie(raw)
                .map_err(|e| AppError::Storage(format!("{:?}", e)))
        }
    }

    impl PreferenceStore for CookiePreferenceStore {
        fn get(&self, key: &str) -> Option<String> {
            let header = Self::document().ok()?.cookie().ok()?;
            parse_cookie_header(&header, key)
        }

        fn set(&self, key: &str, value: &str, ttl_days: i64) -> Result<()> {
            Self::write(&format_set_cookie(key, value, Utc::now(), ttl_days))
        }

        fn remove(&self, key: &str) -> Result<()> {
            Self::write(&format_remove_cookie(key))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_cookie_header() {
        let header = "csrftoken=abc; user_role=admin; username=Jane%20Doe; is_logged_in=true";
        assert_eq!(parse_cookie_header(header, "user_role").as_deref(), Some("admin"));
        assert_eq!(parse_cookie_header(header, "username").as_deref(), Some("Jane Doe"));
        assert_eq!(parse_cookie_header(header, "is_logged_in").as_deref(), Some("true"));
        assert_eq!(parse_cookie_header(header, "sidebar_minimized"), None);
        assert_eq!(parse_cookie_header("", "user_role"), None);
    }

    #[test]
    fn test_parse_does_not_match_key_suffix() {
        let header = "old_username=bob; username=alice";
        assert_eq!(parse_cookie_header(header, "username").as_deref(), Some("alice"));
    }

    #[test]
    fn test_format_set_cookie_expiry() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let raw = format_set_cookie("username", "Jane Doe", now, 7);
        assert_eq!(
            raw,
            "username=Jane%20Doe; expires=Wed, 08 Jan 2025 10:00:00 GMT; path=/; SameSite=Lax"
        );
    }

    #[test]
    fn test_format_remove_cookie_is_expired() {
        let raw = format_remove_cookie("user_role");
        assert!(raw.starts_with("user_role=;"));
        assert!(raw.contains("1970"));
    }
}
