//! Request objects handed to providers by the scraping orchestrator.

use serde::{Deserialize, Serialize};

use crate::metadata::MediaSearchResult;
use crate::types::MediaType;

/// Language used when nothing else is requested.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Criteria for a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSearchOptions {
    pub media_type: MediaType,
    pub query: String,
    pub year: Option<i32>,
    pub tmdb_id: Option<u64>,
    pub imdb_id: Option<String>,
    /// ISO 639-1 language code.
    pub language: String,
}

impl MediaSearchOptions {
    pub fn movie(query: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Movie,
            query: query.into(),
            year: None,
            tmdb_id: None,
            imdb_id: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_tmdb_id(mut self, id: u64) -> Self {
        self.tmdb_id = Some(id);
        self
    }

    pub fn with_imdb_id(mut self, id: impl Into<String>) -> Self {
        self.imdb_id = Some(id.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Criteria for fetching full metadata or trailers of one title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaScrapeOptions {
    pub media_type: MediaType,
    /// The search hit the user picked, if any.
    pub result: Option<MediaSearchResult>,
    pub tmdb_id: Option<u64>,
    pub imdb_id: Option<String>,
    pub language: String,
    pub country: Option<String>,
}

impl MediaScrapeOptions {
    pub fn movie() -> Self {
        Self {
            media_type: MediaType::Movie,
            result: None,
            tmdb_id: None,
            imdb_id: None,
            language: DEFAULT_LANGUAGE.to_string(),
            country: None,
        }
    }

    pub fn with_result(mut self, result: MediaSearchResult) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_tmdb_id(mut self, id: u64) -> Self {
        self.tmdb_id = Some(id);
        self
    }

    pub fn with_imdb_id(mut self, id: impl Into<String>) -> Self {
        self.imdb_id = Some(id.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}
