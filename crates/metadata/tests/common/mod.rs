#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use cinemeta_metadata::MetadataError;
use cinemeta_metadata::api::{AppendToResponse, MovieSearch, TmdbApi};
use cinemeta_metadata::model::{Configuration, ImagesConfiguration, Keyword, Movie, Video};
use tracing_subscriber::EnvFilter;

pub const IMAGE_BASE: &str = "http://img/";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Movie { id: u64, language: Option<String> },
    Find { imdb_id: String },
    Search(MovieSearch),
    Keywords(u64),
    Videos { id: u64, language: Option<String> },
    Configuration,
}

/// In-memory TMDB with a call log. Anything not registered is `NotFound`.
#[derive(Default)]
pub struct MockApi {
    movies: HashMap<(u64, String), Movie>,
    find: HashMap<String, Vec<Movie>>,
    searches: HashMap<String, Vec<Movie>>,
    failing_searches: HashSet<String>,
    keywords: HashMap<u64, Vec<Keyword>>,
    videos: HashMap<(u64, Option<String>), Vec<Video>>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie(mut self, language: &str, movie: Movie) -> Self {
        self.movies.insert((movie.id, language.to_string()), movie);
        self
    }

    pub fn with_find(mut self, imdb_id: &str, movies: Vec<Movie>) -> Self {
        self.find.insert(imdb_id.to_string(), movies);
        self
    }

    pub fn with_search(mut self, query: &str, movies: Vec<Movie>) -> Self {
        self.searches.insert(query.to_string(), movies);
        self
    }

    pub fn with_failing_search(mut self, query: &str) -> Self {
        self.failing_searches.insert(query.to_string());
        self
    }

    pub fn with_keywords(mut self, id: u64, names: &[&str]) -> Self {
        let keywords = names
            .iter()
            .enumerate()
            .map(|(i, name)| Keyword {
                id: i as u64,
                name: name.to_string(),
            })
            .collect();
        self.keywords.insert(id, keywords);
        self
    }

    pub fn with_videos(mut self, id: u64, language: Option<&str>, videos: Vec<Video>) -> Self {
        self.videos
            .insert((id, language.map(str::to_string)), videos);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl TmdbApi for MockApi {
    async fn movie(
        &self,
        id: u64,
        language: Option<&str>,
        _append: &[AppendToResponse],
    ) -> Result<Movie, MetadataError> {
        self.record(Call::Movie {
            id,
            language: language.map(str::to_string),
        });
        self.movies
            .get(&(id, language.unwrap_or_default().to_string()))
            .cloned()
            .ok_or(MetadataError::NotFound)
    }

    async fn find_by_imdb_id(
        &self,
        imdb_id: &str,
        _language: Option<&str>,
    ) -> Result<Vec<Movie>, MetadataError> {
        self.record(Call::Find {
            imdb_id: imdb_id.to_string(),
        });
        self.find.get(imdb_id).cloned().ok_or(MetadataError::NotFound)
    }

    async fn search_movies(&self, search: &MovieSearch) -> Result<Vec<Movie>, MetadataError> {
        self.record(Call::Search(search.clone()));
        if self.failing_searches.contains(&search.query) {
            return Err(MetadataError::Network("connection reset".into()));
        }
        Ok(self.searches.get(&search.query).cloned().unwrap_or_default())
    }

    async fn movie_keywords(&self, id: u64) -> Result<Vec<Keyword>, MetadataError> {
        self.record(Call::Keywords(id));
        self.keywords.get(&id).cloned().ok_or(MetadataError::NotFound)
    }

    async fn movie_videos(
        &self,
        id: u64,
        language: Option<&str>,
    ) -> Result<Vec<Video>, MetadataError> {
        let language = language.map(str::to_string);
        self.record(Call::Videos {
            id,
            language: language.clone(),
        });
        self.videos
            .get(&(id, language))
            .cloned()
            .ok_or(MetadataError::NotFound)
    }

    async fn configuration(&self) -> Result<Configuration, MetadataError> {
        self.record(Call::Configuration);
        Ok(Configuration {
            images: ImagesConfiguration {
                base_url: IMAGE_BASE.to_string(),
            },
        })
    }
}

pub fn movie(id: u64, title: &str, release_date: &str) -> Movie {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "original_title": title,
        "release_date": release_date,
    }))
    .unwrap()
}

pub fn trailer(name: &str, key: &str, size: u32) -> Video {
    Video {
        name: name.to_string(),
        site: "YouTube".to_string(),
        kind: "Trailer".to_string(),
        key: key.to_string(),
        size,
    }
}
