pub mod api;
pub mod config;
pub mod genres;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod resolver;
pub mod search;
pub mod tmdb;
pub mod trailers;

use cinemeta_core::MediaType;
use thiserror::Error;

pub use api::TmdbApi;
pub use config::TmdbConfig;
pub use provider::{MovieMetadataProvider, TmdbMovieProvider};
pub use tmdb::TmdbClient;

/// Provider id stamped on every record this crate produces.
pub const PROVIDER_ID: &str = "tmdb";

/// Language used to backfill untranslated fields.
pub const BASE_LANGUAGE: &str = "en";

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
    #[error("wrong media type for this scraper: {0}")]
    WrongMediaType(MediaType),
    #[error("config error: {0}")]
    Config(String),
}

/// Rejects anything that is not a movie request.
pub(crate) fn ensure_movie(media_type: MediaType) -> Result<(), MetadataError> {
    if media_type == MediaType::Movie {
        Ok(())
    } else {
        Err(MetadataError::WrongMediaType(media_type))
    }
}
