use serde::{Deserialize, Serialize};

/// Kind of media a search or scrape request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Movie,
    MovieSet,
    TvShow,
    TvEpisode,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::MovieSet => "movie_set",
            Self::TvShow => "tv_show",
            Self::TvEpisode => "tv_episode",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artwork slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkType {
    Poster,
}

impl ArtworkType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poster => "poster",
        }
    }
}

impl std::fmt::Display for ArtworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a person in the cast/crew list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastType {
    Actor,
    Director,
    Writer,
    Producer,
}

impl CastType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Director => "director",
            Self::Writer => "writer",
            Self::Producer => "producer",
        }
    }
}

impl std::fmt::Display for CastType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host-side genre vocabulary.
///
/// Providers map their own genre codes onto this list; anything that cannot
/// be mapped becomes [`Genre::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Disaster,
    Documentary,
    Drama,
    Eastern,
    Erotic,
    Family,
    FanFilm,
    Fantasy,
    FilmNoir,
    Foreign,
    History,
    Holiday,
    Horror,
    Indie,
    Music,
    Musical,
    Mystery,
    NeoNoir,
    RoadMovie,
    Romance,
    ScienceFiction,
    Short,
    Sport,
    SportingEvent,
    SportsFilm,
    Suspense,
    TvMovie,
    Thriller,
    War,
    Western,
    Unknown,
}

impl Genre {
    pub const ALL: &'static [Genre] = &[
        Self::Action,
        Self::Adventure,
        Self::Animation,
        Self::Comedy,
        Self::Crime,
        Self::Disaster,
        Self::Documentary,
        Self::Drama,
        Self::Eastern,
        Self::Erotic,
        Self::Family,
        Self::FanFilm,
        Self::Fantasy,
        Self::FilmNoir,
        Self::Foreign,
        Self::History,
        Self::Holiday,
        Self::Horror,
        Self::Indie,
        Self::Music,
        Self::Musical,
        Self::Mystery,
        Self::NeoNoir,
        Self::RoadMovie,
        Self::Romance,
        Self::ScienceFiction,
        Self::Short,
        Self::Sport,
        Self::SportingEvent,
        Self::SportsFilm,
        Self::Suspense,
        Self::TvMovie,
        Self::Thriller,
        Self::War,
        Self::Western,
        Self::Unknown,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Animation => "Animation",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Disaster => "Disaster",
            Self::Documentary => "Documentary",
            Self::Drama => "Drama",
            Self::Eastern => "Eastern",
            Self::Erotic => "Erotic",
            Self::Family => "Family",
            Self::FanFilm => "Fan Film",
            Self::Fantasy => "Fantasy",
            Self::FilmNoir => "Film Noir",
            Self::Foreign => "Foreign",
            Self::History => "History",
            Self::Holiday => "Holiday",
            Self::Horror => "Horror",
            Self::Indie => "Indie",
            Self::Music => "Music",
            Self::Musical => "Musical",
            Self::Mystery => "Mystery",
            Self::NeoNoir => "Neo-noir",
            Self::RoadMovie => "Road Movie",
            Self::Romance => "Romance",
            Self::ScienceFiction => "Science Fiction",
            Self::Short => "Short",
            Self::Sport => "Sport",
            Self::SportingEvent => "Sporting Event",
            Self::SportsFilm => "Sports Film",
            Self::Suspense => "Suspense",
            Self::TvMovie => "TV Movie",
            Self::Thriller => "Thriller",
            Self::War => "War",
            Self::Western => "Western",
            Self::Unknown => "Unknown",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(name: &str) -> Option<Genre> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.label().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
