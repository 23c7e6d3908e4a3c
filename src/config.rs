//! Board Configuration
//!
//! Named UI constants and runtime settings read from the host page.

use serde::Serialize;

/// Status literal the backend writes for a finished task
pub const COMPLETED_STATUS: &str = "完了";
/// Status literal sent when a finished task is reopened
pub const INCOMPLETE_STATUS: &str = "未完了";

pub const MARK_COMPLETE_LABEL: &str = "完了にする";
pub const MARK_INCOMPLETE_LABEL: &str = "未完了に戻す";
pub const ACTION_COLUMN_LABEL: &str = "アクション";

/// Notification / button color classes
pub const SUCCESS_CLASS: &str = "green";
pub const ERROR_CLASS: &str = "red";

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 4000;

/// Apps Script web app serving the checklist
pub const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbySnLTNYChFM71PIu4GjMsEqXmz_3x4dRtEAEv8Re6lqtUhVFmBLnJX3z5wwjTEtZNU/exec";

pub const DATE_LOCALE: &str = "ja-JP";
pub const DATE_FORMAT: DateFormat = DateFormat {
    year: "numeric",
    month: "long",
    day: "numeric",
    weekday: "long",
};

const ENDPOINT_META: &str = "task-board:endpoint";
const ENTRY_META: &str = "task-board:entry";

/// Field selection handed to `Date.prototype.toLocaleDateString`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateFormat {
    pub year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub weekday: &'static str,
}

/// Which view the page opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    /// Board is visible immediately
    #[default]
    Direct,
    /// Email form first, board after a successful lookup
    Email,
}

impl EntryMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "direct" | "" => Some(Self::Direct),
            "email" => Some(Self::Email),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: String,
    pub entry_mode: EntryMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            entry_mode: EntryMode::default(),
        }
    }
}

impl AppConfig {
    /// Build from `<meta name=... content=...>` values, falling back to defaults
    pub fn from_meta(endpoint: Option<String>, entry: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(raw) = entry {
            match EntryMode::parse(&raw) {
                Some(mode) => config.entry_mode = mode,
                None => crate::log::warn("CONFIG", &format!("unknown entry mode {:?}, using direct", raw)),
            }
        }
        config
    }

    /// Read overrides from the host document
    pub fn from_document() -> Self {
        Self::from_meta(read_meta(ENDPOINT_META), read_meta(ENTRY_META))
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()??
        .get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_mode_parse() {
        assert_eq!(EntryMode::parse("email"), Some(EntryMode::Email));
        assert_eq!(EntryMode::parse(" Email "), Some(EntryMode::Email));
        assert_eq!(EntryMode::parse("direct"), Some(EntryMode::Direct));
        assert_eq!(EntryMode::parse(""), Some(EntryMode::Direct));
        assert_eq!(EntryMode::parse("popup"), None);
    }

    #[test]
    fn test_from_meta_overrides() {
        let config = AppConfig::from_meta(
            Some("https://example.test/exec".to_string()),
            Some("email".to_string()),
        );
        assert_eq!(config.endpoint, "https://example.test/exec");
        assert_eq!(config.entry_mode, EntryMode::Email);
    }

    #[test]
    fn test_from_meta_falls_back() {
        let config = AppConfig::from_meta(Some("   ".to_string()), Some("bogus".to_string()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_date_format_serializes_as_intl_options() {
        let json = serde_json::to_value(DATE_FORMAT).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "year": "numeric",
                "month": "long",
                "day": "numeric",
                "weekday": "long"
            })
        );
    }
}
