//! The remote lookup capability the provider depends on.
//!
//! [`crate::TmdbClient`] is the HTTP implementation. Implementations are
//! shared between tasks and must handle their own synchronization.

use crate::MetadataError;
use crate::model::{Configuration, Keyword, Movie, Video};

/// Extra sub-resources requested alongside `/movie/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendToResponse {
    Credits,
    Releases,
}

impl AppendToResponse {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credits => "credits",
            Self::Releases => "releases",
        }
    }
}

/// Parameters of a `/search/movie` request. Queries are always sent as
/// phrase searches.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSearch {
    pub query: String,
    pub language: Option<String>,
    pub include_adult: bool,
    /// Lower year bound (any release in that year).
    pub year: Option<i32>,
    /// Upper year bound (primary release year).
    pub primary_release_year: Option<i32>,
    /// Stop collecting once this many results were seen.
    pub max_results: usize,
}

#[async_trait::async_trait]
pub trait TmdbApi: Send + Sync {
    /// `/movie/{id}`; `NotFound` when TMDB does not know the id.
    async fn movie(
        &self,
        id: u64,
        language: Option<&str>,
        append: &[AppendToResponse],
    ) -> Result<Movie, MetadataError>;

    /// `/find/{imdb_id}`, movie results only.
    async fn find_by_imdb_id(
        &self,
        imdb_id: &str,
        language: Option<&str>,
    ) -> Result<Vec<Movie>, MetadataError>;

    /// `/search/movie`, possibly spanning several pages.
    async fn search_movies(&self, search: &MovieSearch) -> Result<Vec<Movie>, MetadataError>;

    async fn movie_keywords(&self, id: u64) -> Result<Vec<Keyword>, MetadataError>;

    async fn movie_videos(&self, id: u64, language: Option<&str>)
    -> Result<Vec<Video>, MetadataError>;

    /// `/configuration`; only the image settings are used.
    async fn configuration(&self) -> Result<Configuration, MetadataError>;
}
