//! Server-side configuration for the document store and session.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which backend holds the store snapshot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreKind {
    /// A JSON snapshot on the local filesystem.
    #[default]
    File,
    /// A JSON snapshot served over HTTP.
    Http,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub path: PathBuf,
    pub url: String,
    /// User signed in when the server starts, if any.
    pub session_uid: Option<String>,
}

impl StoreConfig {
    pub const DEFAULT_PATH: &'static str = "pharmacy-store.json";
    pub const DEFAULT_URL: &'static str = "http://127.0.0.1:8787/store.json";

    /// Reads the configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `PHARMACY_STORE`: "file" or "http" (case-insensitive). defaults to file.
    /// - `PHARMACY_STORE_PATH`: snapshot path for the file store.
    /// - `PHARMACY_STORE_URL`: snapshot url for the http store.
    /// - `PHARMACY_SESSION_UID`: user id signed in at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let kind = non_empty("PHARMACY_STORE")
            .and_then(|s| StoreKind::from_str(s.trim()).ok())
            .unwrap_or_default();

        let path = non_empty("PHARMACY_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH));

        let url = non_empty("PHARMACY_STORE_URL").unwrap_or_else(|| Self::DEFAULT_URL.to_string());

        Self {
            kind,
            path,
            url,
            session_uid: non_empty("PHARMACY_SESSION_UID"),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> StoreConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StoreConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.kind, StoreKind::File);
        assert_eq!(cfg.path, PathBuf::from(StoreConfig::DEFAULT_PATH));
        assert_eq!(cfg.url, StoreConfig::DEFAULT_URL);
        assert_eq!(cfg.session_uid, None);
    }

    #[test]
    fn reads_http_store_settings() {
        let cfg = config(&[
            ("PHARMACY_STORE", "HTTP"),
            ("PHARMACY_STORE_URL", "https://store.example/snapshot.json"),
            ("PHARMACY_SESSION_UID", "pharm-1"),
        ]);
        assert!(cfg.kind.is_http());
        assert_eq!(cfg.url, "https://store.example/snapshot.json");
        assert_eq!(cfg.session_uid.as_deref(), Some("pharm-1"));
    }

    #[test]
    fn unknown_kind_and_blank_values_fall_back() {
        let cfg = config(&[
            ("PHARMACY_STORE", "postgres"),
            ("PHARMACY_STORE_PATH", "  "),
            ("PHARMACY_SESSION_UID", ""),
        ]);
        assert_eq!(cfg.kind, StoreKind::File);
        assert_eq!(cfg.path, PathBuf::from(StoreConfig::DEFAULT_PATH));
        assert_eq!(cfg.session_uid, None);
    }
}
