//! TMDB v3 response records.
//!
//! Only the fields the provider reads are modelled. Collections are kept as
//! `Option<Vec<_>>` because TMDB sends `null` for some of them.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A movie as returned by `/movie/{id}`, `/find` and `/search/movie`.
///
/// Search and find responses only fill a subset of the fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_count: u32,
    pub poster_path: Option<String>,
    pub spoken_languages: Option<Vec<SpokenLanguage>>,
    pub production_countries: Option<Vec<ProductionCountry>>,
    pub production_companies: Option<Vec<ProductionCompany>>,
    pub genres: Option<Vec<TmdbGenre>>,
    pub credits: Option<Credits>,
    pub releases: Option<Releases>,
    pub belongs_to_collection: Option<CollectionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso_639_1: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionCountry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso_3166_1: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TmdbGenre {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    pub cast: Option<Vec<CastCredit>>,
    pub crew: Option<Vec<CrewCredit>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastCredit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewCredit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub job: Option<String>,
    pub department: Option<String>,
    pub profile_path: Option<String>,
}

/// Legacy `releases` append (per-country certifications).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Releases {
    pub countries: Option<Vec<CountryRelease>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryRelease {
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso_3166_1: String,
    pub certification: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionRef {
    pub id: u64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindResults {
    pub movie_results: Option<Vec<Movie>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieResultsPage {
    pub results: Option<Vec<Movie>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieKeywords {
    pub keywords: Option<Vec<Keyword>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Videos {
    pub results: Option<Vec<Video>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub site: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Configuration {
    pub images: ImagesConfiguration,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagesConfiguration {
    pub base_url: String,
}

impl Configuration {
    /// Prefix for image URLs; a size token and a file path are appended to it.
    pub fn image_base_url(&self) -> &str {
        &self.images.base_url
    }
}

// TMDB sends "" for unknown release dates.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

// TMDB sends `null` for scalars it has no value for; `default` only covers
// missing keys.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
