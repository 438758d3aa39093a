//! Runtime configuration for Book Finder
//!
//! Values come from the environment (optionally seeded from a `.env` file).
//! Anything missing or unparsable falls back to its default with a warning.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// The volumes endpoint rejects `maxResults` above this
pub const MAX_PAGE_SIZE: u32 = 40;
pub const DEFAULT_DATA_DIR: &str = ".cache";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub page_size: u32,
    pub data_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_base_url = lookup("BOOK_FINDER_API_URL")
            .map(|url| url.trim().trim_end_matches('?').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let page_size = match lookup("BOOK_FINDER_PAGE_SIZE") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => size,
                _ => {
                    tracing::warn!(value = %raw, "Invalid BOOK_FINDER_PAGE_SIZE, using default");
                    defaults.page_size
                }
            },
            None => defaults.page_size,
        };

        let data_dir = lookup("BOOK_FINDER_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let request_timeout = match lookup("BOOK_FINDER_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "Invalid BOOK_FINDER_TIMEOUT_SECS, using default");
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout,
        };

        Config {
            api_base_url,
            page_size,
            data_dir,
            request_timeout,
        }
    }
}
