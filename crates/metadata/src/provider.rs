use std::sync::Arc;

use cinemeta_core::ids::valid_imdb_id;
use cinemeta_core::{
    MediaMetadata, MediaScrapeOptions, MediaSearchOptions, MediaSearchResult, MediaTrailer,
};
use tracing::{debug, warn};

use crate::api::{AppendToResponse, TmdbApi};
use crate::config::TmdbConfig;
use crate::model::Movie;
use crate::normalize::{
    NormalizeContext, TAG_KEYWORDS, backfill_translations, is_blank, normalize_movie,
};
use crate::resolver::Resolver;
use crate::tmdb::TmdbClient;
use crate::trailers::fetch_trailers;
use crate::{BASE_LANGUAGE, MetadataError, PROVIDER_ID, ensure_movie};

/// A metadata provider that can search movies and fetch their metadata.
#[async_trait::async_trait]
pub trait MovieMetadataProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Search for a movie. Only a non-movie request is an error.
    async fn search(
        &self,
        options: &MediaSearchOptions,
    ) -> Result<Vec<MediaSearchResult>, MetadataError>;

    /// Full metadata for one movie; empty metadata when nothing was found.
    async fn get_metadata(&self, options: &MediaScrapeOptions)
    -> Result<MediaMetadata, MetadataError>;

    /// Trailers for one movie; empty when nothing was found.
    async fn get_trailers(
        &self,
        options: &MediaScrapeOptions,
    ) -> Result<Vec<MediaTrailer>, MetadataError>;
}

/// TMDB-backed [`MovieMetadataProvider`].
pub struct TmdbMovieProvider {
    api: Arc<dyn TmdbApi>,
    image_base_url: String,
    language: String,
    country: Option<String>,
    include_adult: bool,
}

impl TmdbMovieProvider {
    /// Build the HTTP client from `config` and load the image configuration.
    pub async fn from_config(config: &TmdbConfig) -> Result<Self, MetadataError> {
        let client = TmdbClient::new(config)?;
        Self::connect(Arc::new(client), config).await
    }

    /// Load the image configuration once through `api`.
    pub async fn connect(api: Arc<dyn TmdbApi>, config: &TmdbConfig) -> Result<Self, MetadataError> {
        let configuration = api.configuration().await?;
        let image_base_url = configuration.image_base_url().to_string();
        debug!(image_base_url = %image_base_url, "loaded TMDB configuration");
        Ok(Self::with_image_base_url(api, config, image_base_url))
    }

    /// Skip the configuration request and use a known image base URL.
    pub fn with_image_base_url(
        api: Arc<dyn TmdbApi>,
        config: &TmdbConfig,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            api,
            image_base_url: image_base_url.into(),
            language: config.language.clone(),
            country: config.country.clone(),
            include_adult: config.include_adult,
        }
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    fn language_for<'a>(&'a self, requested: &'a str) -> &'a str {
        if requested.trim().is_empty() {
            &self.language
        } else {
            requested
        }
    }

    /// TMDB id from the picked result, the options, or the IMDb id (in that
    /// order).
    async fn resolve_tmdb_id(&self, options: &MediaScrapeOptions) -> Option<u64> {
        let from_result = options
            .result
            .as_ref()
            .and_then(|r| r.id.parse::<u64>().ok());

        if let Some(id) = from_result.or(options.tmdb_id).filter(|id| *id != 0) {
            return Some(id);
        }

        let imdb_id = valid_imdb_id(options.imdb_id.as_deref())?;
        match self.api.find_by_imdb_id(imdb_id, None).await {
            Ok(movies) => movies.first().map(|m| m.id),
            Err(e) => {
                warn!(imdb_id, error = %e, "could not resolve TMDB id from IMDb id");
                None
            }
        }
    }

    async fn fetch_movie(&self, tmdb_id: u64, language: &str) -> Option<Movie> {
        let append = [AppendToResponse::Credits, AppendToResponse::Releases];
        match self.api.movie(tmdb_id, Some(language), &append).await {
            Ok(movie) => Some(movie),
            Err(e) => {
                warn!(tmdb_id, language, error = %e, "problem getting data from TMDB");
                None
            }
        }
    }

    async fn add_keyword_tags(&self, tmdb_id: u64, md: &mut MediaMetadata) {
        match self.api.movie_keywords(tmdb_id).await {
            Ok(keywords) => {
                for keyword in keywords {
                    if TAG_KEYWORDS.contains(&keyword.name.as_str()) {
                        md.add_tag(keyword.name);
                    }
                }
            }
            Err(e) => warn!(tmdb_id, error = %e, "error getting keywords"),
        }
    }

    /// Re-scrape in the base language and backfill what `source` left blank.
    ///
    /// Calls [`Self::fetch_movie`] directly, so the fallback never recurses.
    async fn backfill_from_base_language(
        &self,
        source: &Movie,
        md: &mut MediaMetadata,
        ctx: &NormalizeContext<'_>,
    ) {
        debug!(tmdb_id = source.id, language = ctx.language, "plot empty, falling back to base language");

        let Some(base_movie) = self.fetch_movie(source.id, BASE_LANGUAGE).await else {
            return;
        };
        let base_ctx = NormalizeContext {
            language: BASE_LANGUAGE,
            ..*ctx
        };
        let base = normalize_movie(&base_movie, &base_ctx);
        backfill_translations(source, md, &base);
    }
}

#[async_trait::async_trait]
impl MovieMetadataProvider for TmdbMovieProvider {
    fn name(&self) -> &str {
        PROVIDER_ID
    }

    async fn search(
        &self,
        options: &MediaSearchOptions,
    ) -> Result<Vec<MediaSearchResult>, MetadataError> {
        ensure_movie(options.media_type)?;

        let mut query = options.clone();
        query.language = self.language_for(&options.language).to_string();

        let resolver = Resolver::new(self.api.as_ref(), &self.image_base_url, self.include_adult);
        Ok(resolver.resolve(&query).await)
    }

    async fn get_metadata(
        &self,
        options: &MediaScrapeOptions,
    ) -> Result<MediaMetadata, MetadataError> {
        ensure_movie(options.media_type)?;

        let Some(tmdb_id) = self.resolve_tmdb_id(options).await else {
            warn!("not possible to scrape from TMDB - no tmdbId/imdbId found");
            return Ok(MediaMetadata::new(PROVIDER_ID));
        };

        let language = self.language_for(&options.language);
        debug!(tmdb_id, language, "TMDB get metadata");

        let Some(movie) = self.fetch_movie(tmdb_id, language).await else {
            warn!(tmdb_id, "no result found");
            return Ok(MediaMetadata::new(PROVIDER_ID));
        };

        let ctx = NormalizeContext {
            image_base_url: &self.image_base_url,
            language,
            country: options.country.as_deref().or(self.country.as_deref()),
        };
        let mut md = normalize_movie(&movie, &ctx);

        self.add_keyword_tags(movie.id, &mut md).await;

        if is_blank(movie.overview.as_deref()) && !language.eq_ignore_ascii_case(BASE_LANGUAGE) {
            self.backfill_from_base_language(&movie, &mut md, &ctx).await;
        }

        Ok(md)
    }

    async fn get_trailers(
        &self,
        options: &MediaScrapeOptions,
    ) -> Result<Vec<MediaTrailer>, MetadataError> {
        ensure_movie(options.media_type)?;

        let Some(tmdb_id) = self.resolve_tmdb_id(options).await else {
            warn!("not possible to scrape from TMDB - no tmdbId found");
            return Ok(Vec::new());
        };

        let language = self.language_for(&options.language);
        debug!(tmdb_id, language, "TMDB get trailers");
        Ok(fetch_trailers(self.api.as_ref(), tmdb_id, language).await)
    }
}
