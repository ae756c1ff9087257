//! Trailer lookup for a known TMDB id.

use cinemeta_core::MediaTrailer;
use tracing::{debug, warn};

use crate::api::TmdbApi;
use crate::model::Video;

const TRAILER_TYPE: &str = "Trailer";
const YOUTUBE_WATCH_URL: &str = "http://www.youtube.com/watch?v=";
const HD_MARKER: &str = "&hd=1";
const HD_MIN_SIZE: u32 = 720;

/// Fetch trailers in `language` plus the language-neutral list.
///
/// A failing request only loses its own entries; the result is empty when
/// both fail.
pub async fn fetch_trailers(api: &dyn TmdbApi, tmdb_id: u64, language: &str) -> Vec<MediaTrailer> {
    let mut videos = Vec::new();

    for lang in [Some(language), None] {
        match api.movie_videos(tmdb_id, lang).await {
            Ok(found) => videos.extend(found.into_iter().filter(|v| v.kind == TRAILER_TYPE)),
            Err(e) => warn!(tmdb_id, language = ?lang, error = %e, "could not fetch TMDB videos"),
        }
    }

    let trailers = to_trailers(videos);
    debug!(tmdb_id, count = trailers.len(), "collected trailers");
    trailers
}

/// Map videos to trailers, dropping keyless entries and duplicates.
pub fn to_trailers(videos: impl IntoIterator<Item = Video>) -> Vec<MediaTrailer> {
    let mut trailers: Vec<MediaTrailer> = Vec::new();

    for video in videos {
        if video.key.trim().is_empty() {
            continue;
        }

        let trailer = to_trailer(&video);
        if !trailers.contains(&trailer) {
            trailers.push(trailer);
        }
    }

    trailers
}

fn to_trailer(video: &Video) -> MediaTrailer {
    let url = if video.site.eq_ignore_ascii_case("youtube") {
        let mut url = format!("{YOUTUBE_WATCH_URL}{}", video.key);
        if video.size >= HD_MIN_SIZE && !video.key.contains(HD_MARKER) {
            url.push_str(HD_MARKER);
        }
        url
    } else {
        video.key.clone()
    };

    MediaTrailer {
        name: video.name.clone(),
        url,
        quality: video.size.to_string(),
        provider: video.site.clone(),
    }
}
