//! TMDB (The Movie Database) HTTP client.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::MetadataError;
use crate::api::{AppendToResponse, MovieSearch, TmdbApi};
use crate::config::TmdbConfig;
use crate::model::{
    Configuration, FindResults, Keyword, Movie, MovieKeywords, MovieResultsPage, Video, Videos,
};

pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, MetadataError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MetadataError::Config(format!("build HTTP client: {e}")))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MetadataError> {
        let mut all_params = vec![("api_key", self.api_key.as_str())];
        all_params.extend_from_slice(params);

        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MetadataError::NotFound);
        }

        if !resp.status().is_success() {
            return Err(MetadataError::Provider(format!(
                "TMDB returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| MetadataError::Provider(format!("parse JSON: {e}")))
    }
}

#[async_trait::async_trait]
impl TmdbApi for TmdbClient {
    async fn movie(
        &self,
        id: u64,
        language: Option<&str>,
        append: &[AppendToResponse],
    ) -> Result<Movie, MetadataError> {
        let append = append
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let mut params = Vec::new();
        if let Some(language) = language {
            params.push(("language", language));
        }
        if !append.is_empty() {
            params.push(("append_to_response", append.as_str()));
        }

        self.get_json(&format!("/movie/{id}"), &params).await
    }

    async fn find_by_imdb_id(
        &self,
        imdb_id: &str,
        language: Option<&str>,
    ) -> Result<Vec<Movie>, MetadataError> {
        let mut params = vec![("external_source", "imdb_id")];
        if let Some(language) = language {
            params.push(("language", language));
        }

        let found: FindResults = self.get_json(&format!("/find/{imdb_id}"), &params).await?;
        Ok(found.movie_results.unwrap_or_default())
    }

    async fn search_movies(&self, search: &MovieSearch) -> Result<Vec<Movie>, MetadataError> {
        let include_adult = search.include_adult.to_string();
        let year = search.year.map(|y| y.to_string());
        let primary_release_year = search.primary_release_year.map(|y| y.to_string());

        let mut movies = Vec::new();
        let mut page = 1u32;

        loop {
            let page_str = page.to_string();
            let mut params = vec![
                ("query", search.query.as_str()),
                ("page", page_str.as_str()),
                ("include_adult", include_adult.as_str()),
                ("search_type", "phrase"),
            ];
            if let Some(ref language) = search.language {
                params.push(("language", language.as_str()));
            }
            if let Some(ref y) = year {
                params.push(("year", y.as_str()));
            }
            if let Some(ref y) = primary_release_year {
                params.push(("primary_release_year", y.as_str()));
            }

            let results: MovieResultsPage = self.get_json("/search/movie", &params).await?;
            let hits = results.results.unwrap_or_default();
            let exhausted = hits.is_empty() || page >= results.total_pages;
            movies.extend(hits);

            if exhausted || movies.len() >= search.max_results {
                break;
            }
            page += 1;
        }

        movies.truncate(search.max_results);
        Ok(movies)
    }

    async fn movie_keywords(&self, id: u64) -> Result<Vec<Keyword>, MetadataError> {
        let keywords: MovieKeywords = self
            .get_json(&format!("/movie/{id}/keywords"), &[])
            .await?;
        Ok(keywords.keywords.unwrap_or_default())
    }

    async fn movie_videos(
        &self,
        id: u64,
        language: Option<&str>,
    ) -> Result<Vec<Video>, MetadataError> {
        let mut params = Vec::new();
        if let Some(language) = language {
            params.push(("language", language));
        }

        let videos: Videos = self
            .get_json(&format!("/movie/{id}/videos"), &params)
            .await?;
        Ok(videos.results.unwrap_or_default())
    }

    async fn configuration(&self) -> Result<Configuration, MetadataError> {
        self.get_json("/configuration", &[]).await
    }
}
