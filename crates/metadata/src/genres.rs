//! TMDB genre id → host genre table.

use cinemeta_core::Genre;

use crate::model::TmdbGenre;

static GENRE_TABLE: &[(u32, Genre)] = &[
    (28, Genre::Action),
    (12, Genre::Adventure),
    (16, Genre::Animation),
    (35, Genre::Comedy),
    (80, Genre::Crime),
    (105, Genre::Disaster),
    (99, Genre::Documentary),
    (18, Genre::Drama),
    (82, Genre::Eastern),
    (2916, Genre::Erotic),
    (10751, Genre::Family),
    (10750, Genre::FanFilm),
    (14, Genre::Fantasy),
    (10753, Genre::FilmNoir),
    (10769, Genre::Foreign),
    (36, Genre::History),
    (10595, Genre::Holiday),
    (27, Genre::Horror),
    (10756, Genre::Indie),
    (10402, Genre::Music),
    (22, Genre::Musical),
    (9648, Genre::Mystery),
    (10754, Genre::NeoNoir),
    (1115, Genre::RoadMovie),
    (10749, Genre::Romance),
    (878, Genre::ScienceFiction),
    (10755, Genre::Short),
    (9805, Genre::Sport),
    (10758, Genre::SportingEvent),
    (10757, Genre::SportsFilm),
    (10748, Genre::Suspense),
    (10770, Genre::TvMovie),
    (53, Genre::Thriller),
    (10752, Genre::War),
    (37, Genre::Western),
];

/// Map a TMDB genre onto the host vocabulary.
///
/// Falls back to the genre's name and then to [`Genre::Unknown`].
pub fn map_genre(genre: &TmdbGenre) -> Genre {
    GENRE_TABLE
        .iter()
        .find(|(id, _)| *id == genre.id)
        .map(|(_, g)| *g)
        .or_else(|| Genre::from_label(&genre.name))
        .unwrap_or(Genre::Unknown)
}
