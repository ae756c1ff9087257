//! Search disambiguation.
//!
//! Lookup strategies run in a fixed order and the first one that yields
//! candidates wins:
//! 1. TMDB id, fetched directly.
//! 2. IMDb id, through `/find`.
//! 3. Text search (first page), with the year as both bounds.
//! 4. Text search without a trailing year token, with a larger limit.
//!
//! A failing strategy contributes nothing and the next one is tried.

use chrono::Datelike;
use cinemeta_core::ids::valid_imdb_id;
use cinemeta_core::{MediaSearchOptions, MediaSearchResult, MediaType};
use tracing::{debug, info, warn};

use crate::api::{MovieSearch, TmdbApi};
use crate::model::Movie;
use crate::normalize::{POSTER_SIZE, image_url};
use crate::search::{search_safe, similarity, strip_trailing_year};
use crate::{MetadataError, PROVIDER_ID};

/// Result limit of the plain text search (one TMDB page).
pub const FIRST_PAGE_RESULTS: usize = 20;
/// Result limit of the retry without the trailing year.
pub const RETRY_RESULTS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    TmdbId,
    ImdbId,
    Text,
    TextWithoutYear,
}

impl Strategy {
    pub const ORDER: [Strategy; 4] = [
        Self::TmdbId,
        Self::ImdbId,
        Self::Text,
        Self::TextWithoutYear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TmdbId => "tmdb_id",
            Self::ImdbId => "imdb_id",
            Self::Text => "text",
            Self::TextWithoutYear => "text_without_year",
        }
    }
}

/// What a single strategy produced.
#[derive(Debug)]
pub enum StrategyOutcome {
    Hits(Vec<MediaSearchResult>),
    Empty,
    Failed(MetadataError),
    /// The query lacks what this strategy needs.
    Skipped,
}

impl StrategyOutcome {
    fn from_movies(
        result: Result<Vec<Movie>, MetadataError>,
        image_base_url: &str,
    ) -> StrategyOutcome {
        match result {
            Ok(movies) if movies.is_empty() => Self::Empty,
            Ok(movies) => Self::Hits(
                movies
                    .iter()
                    .map(|m| to_search_result(m, image_base_url))
                    .collect(),
            ),
            Err(e) => Self::Failed(e),
        }
    }
}

pub struct Resolver<'a> {
    api: &'a dyn TmdbApi,
    image_base_url: &'a str,
    include_adult: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(api: &'a dyn TmdbApi, image_base_url: &'a str, include_adult: bool) -> Self {
        Self {
            api,
            image_base_url,
            include_adult,
        }
    }

    /// Find and score candidates for `query`, in discovery order.
    ///
    /// Never fails: remote errors are logged and the next strategy is tried.
    pub async fn resolve(&self, query: &MediaSearchOptions) -> Vec<MediaSearchResult> {
        let text = search_safe(&query.query);
        if text.is_empty() {
            debug!("empty search string");
            return Vec::new();
        }

        let tmdb_id = query.tmdb_id.filter(|id| *id != 0);
        let imdb_id = valid_imdb_id(query.imdb_id.as_deref());
        let language = query.language.as_str();

        info!(query = %text, ?tmdb_id, ?imdb_id, year = ?query.year, "TMDB movie search");

        // The text the candidates are scored against.
        let mut searched = text.clone();
        let mut candidates = Vec::new();

        for strategy in Strategy::ORDER {
            let outcome = match strategy {
                Strategy::TmdbId => match tmdb_id {
                    Some(id) => self.by_tmdb_id(id, language).await,
                    None => StrategyOutcome::Skipped,
                },
                Strategy::ImdbId => match imdb_id {
                    Some(id) => self.by_imdb_id(id, language).await,
                    None => StrategyOutcome::Skipped,
                },
                Strategy::Text => {
                    self.by_text(&text, query.year, language, FIRST_PAGE_RESULTS)
                        .await
                }
                Strategy::TextWithoutYear => match strip_trailing_year(&text) {
                    Some(stripped) => {
                        let outcome = self
                            .by_text(&stripped, query.year, language, RETRY_RESULTS)
                            .await;
                        searched = stripped;
                        outcome
                    }
                    None => StrategyOutcome::Skipped,
                },
            };

            match outcome {
                StrategyOutcome::Hits(hits) => {
                    debug!(strategy = strategy.as_str(), count = hits.len(), "found results");
                    candidates = hits;
                    break;
                }
                StrategyOutcome::Empty => {
                    debug!(strategy = strategy.as_str(), "no results");
                }
                StrategyOutcome::Failed(e) => {
                    warn!(strategy = strategy.as_str(), error = %e, "problem getting data from TMDB");
                }
                StrategyOutcome::Skipped => {}
            }
        }

        for candidate in &mut candidates {
            candidate.score = score(candidate, tmdb_id, imdb_id, &searched);
        }

        info!(count = candidates.len(), "TMDB movie search finished");
        candidates
    }

    async fn by_tmdb_id(&self, id: u64, language: &str) -> StrategyOutcome {
        let result = self.api.movie(id, Some(language), &[]).await.map(|m| vec![m]);
        StrategyOutcome::from_movies(result, self.image_base_url)
    }

    async fn by_imdb_id(&self, imdb_id: &str, language: &str) -> StrategyOutcome {
        let result = self.api.find_by_imdb_id(imdb_id, Some(language)).await;
        StrategyOutcome::from_movies(result, self.image_base_url)
    }

    async fn by_text(
        &self,
        text: &str,
        year: Option<i32>,
        language: &str,
        max_results: usize,
    ) -> StrategyOutcome {
        let search = MovieSearch {
            query: text.to_string(),
            language: Some(language.to_string()),
            include_adult: self.include_adult,
            year,
            primary_release_year: year,
            max_results,
        };
        let result = self.api.search_movies(&search).await;
        StrategyOutcome::from_movies(result, self.image_base_url)
    }
}

/// 1.0 for an id match, otherwise title similarity to `searched`.
fn score(
    candidate: &MediaSearchResult,
    tmdb_id: Option<u64>,
    imdb_id: Option<&str>,
    searched: &str,
) -> f64 {
    let imdb_match = imdb_id.is_some() && candidate.imdb_id.as_deref() == imdb_id;
    let tmdb_match = tmdb_id.is_some_and(|id| candidate.id == id.to_string());

    if imdb_match || tmdb_match {
        1.0
    } else {
        similarity(searched, &candidate.title)
    }
}

pub fn to_search_result(movie: &Movie, image_base_url: &str) -> MediaSearchResult {
    MediaSearchResult {
        provider_id: PROVIDER_ID.to_string(),
        media_type: MediaType::Movie,
        id: movie.id.to_string(),
        imdb_id: movie.imdb_id.clone(),
        title: movie.title.clone().unwrap_or_default(),
        original_title: movie.original_title.clone(),
        poster_url: movie
            .poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| image_url(image_base_url, POSTER_SIZE, p)),
        year: movie.release_date.map(|d| d.year()),
        score: 0.0,
    }
}
