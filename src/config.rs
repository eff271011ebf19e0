//! Environment-derived configuration, built once at startup and passed by
//! reference into the pipeline. No process-global state.

use std::env;
use std::path::PathBuf;

const DEFAULT_DB_FILE: &str = "clipdeck.db";
const DEFAULT_CATALOG_FILE: &str = "videos.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file.
    pub database_file: PathBuf,
    /// Catalog JSON file.
    pub catalog_file: PathBuf,
    /// Discard all persisted data and rebuild from the catalog.
    pub full_scan: bool,
    /// Suppress all writes; the store is served as-is.
    pub readonly: bool,
    /// API key for the metadata provider.
    pub api_key: String,
}

impl Config {
    /// Build a configuration snapshot from the process environment,
    /// honoring a `.env` file when present.
    pub fn from_env() -> Self {
        if dotenv::dotenv().is_err() {
            tracing::info!("no .env file found, relying on process environment");
        }

        Self {
            database_file: get_env("DATABASE_FILE_PATH", DEFAULT_DB_FILE).into(),
            catalog_file: get_env("JSON_FILE_PATH", DEFAULT_CATALOG_FILE).into(),
            full_scan: get_env_bool("FULL_SCAN", false),
            readonly: get_env_bool("READONLY_MODE", false),
            api_key: get_env("YOUTUBE_API_KEY", ""),
        }
    }
}

fn get_env(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn get_env_bool(key: &str, fallback: bool) -> bool {
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("unable to parse boolean from {key}; using default: {fallback}");
            fallback
        }),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_bool_true() {
        env::set_var("CLIPDECK_TEST_BOOL_TRUE", "true");
        assert!(get_env_bool("CLIPDECK_TEST_BOOL_TRUE", false));
    }

    #[test]
    fn test_get_env_bool_garbage_falls_back() {
        env::set_var("CLIPDECK_TEST_BOOL_GARBAGE", "yes please");
        assert!(!get_env_bool("CLIPDECK_TEST_BOOL_GARBAGE", false));
        assert!(get_env_bool("CLIPDECK_TEST_BOOL_GARBAGE", true));
    }

    #[test]
    fn test_get_env_bool_unset_uses_fallback() {
        assert!(get_env_bool("CLIPDECK_TEST_BOOL_UNSET", true));
    }

    #[test]
    fn test_get_env_fallback() {
        assert_eq!(get_env("CLIPDECK_TEST_UNSET_STRING", "fallback"), "fallback");
    }
}
