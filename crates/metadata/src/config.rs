//! Provider configuration.

use serde::Deserialize;

use crate::{BASE_LANGUAGE, MetadataError};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    /// Language used when a request does not name one.
    pub language: String,
    /// Certification country used when a request does not name one.
    pub country: Option<String>,
    pub include_adult: bool,
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: BASE_LANGUAGE.to_string(),
            country: None,
            include_adult: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TmdbConfig {
    /// Read `TMDB_*` environment variables. `TMDB_API_KEY` is required.
    pub fn from_env() -> Result<Self, MetadataError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TmdbConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MetadataError> {
        let defaults = Self::default();

        let api_key = lookup("TMDB_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| MetadataError::Config("TMDB_API_KEY is not set".into()))?;

        let base_url = lookup("TMDB_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(defaults.base_url);

        let language = lookup("TMDB_LANGUAGE")
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(defaults.language);

        let country = lookup("TMDB_COUNTRY").filter(|c| !c.trim().is_empty());

        let include_adult = lookup("TMDB_INCLUDE_ADULT")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.include_adult);

        let timeout_secs = lookup("TMDB_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.timeout_secs);

        Ok(Self {
            api_key,
            base_url,
            language,
            country,
            include_adult,
            timeout_secs,
        })
    }
}
