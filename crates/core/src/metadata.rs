use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ArtworkType, CastType, Genre, MediaType};

/// Normalized metadata for one title, as produced by a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaMetadata {
    /// Name of the provider that filled this record (e.g. "tmdb").
    pub provider_id: String,
    pub tmdb_id: Option<u64>,
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub plot: Option<String>,
    pub tagline: Option<String>,
    pub year: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub runtime_minutes: Option<u32>,
    pub rating: f64,
    pub vote_count: u32,
    pub spoken_languages: Vec<String>,
    pub countries: Vec<String>,
    pub production_companies: Vec<String>,
    pub certifications: Vec<Certification>,
    pub cast: Vec<CastMember>,
    pub genres: Vec<Genre>,
    pub artwork: Vec<MediaArtwork>,
    pub tags: Vec<String>,
    pub collection_id: Option<u64>,
    pub collection_name: Option<String>,
}

impl MediaMetadata {
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            ..Default::default()
        }
    }

    /// Adds a tag unless it is already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Cast entries of the given role, in insertion order.
    pub fn cast_of(&self, role: CastType) -> impl Iterator<Item = &CastMember> {
        self.cast.iter().filter(move |c| c.role == role)
    }
}

/// Country-specific age rating, e.g. `US` / `PG-13`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub country: String,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub role: CastType,
    pub name: String,
    pub character: Option<String>,
    /// Department or job the person is credited for (crew only).
    pub part: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaArtwork {
    pub provider_id: String,
    pub kind: ArtworkType,
    pub preview_url: String,
    pub default_url: String,
    pub language: String,
    pub tmdb_id: u64,
}

/// A search hit that still has to be confirmed by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSearchResult {
    pub provider_id: String,
    pub media_type: MediaType,
    /// Provider-native id, as a string.
    pub id: String,
    pub imdb_id: Option<String>,
    pub title: String,
    pub original_title: Option<String>,
    pub poster_url: Option<String>,
    pub year: Option<i32>,
    /// Match confidence in `[0, 1]`.
    pub score: f64,
}

/// A playable trailer reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaTrailer {
    pub name: String,
    pub url: String,
    pub quality: String,
    /// Hosting site, e.g. "YouTube".
    pub provider: String,
}
