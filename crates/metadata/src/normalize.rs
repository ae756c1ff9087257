//! Mapping of TMDB movie records onto [`MediaMetadata`].

use chrono::Datelike;
use cinemeta_core::ids::valid_imdb_id;
use cinemeta_core::{
    ArtworkType, CastMember, CastType, Certification, MediaArtwork, MediaMetadata,
};

use crate::PROVIDER_ID;
use crate::genres::map_genre;
use crate::model::{CrewCredit, Movie};

/// Size token for thumbnails (poster preview, cast portraits).
pub const PREVIEW_SIZE: &str = "w185";
/// Size token for the default poster.
pub const POSTER_SIZE: &str = "w342";

/// Keyword names copied over as tags.
pub const TAG_KEYWORDS: &[&str] = &["aftercreditsstinger", "duringcreditsstinger"];

/// Request-scoped settings for [`normalize_movie`].
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext<'a> {
    pub image_base_url: &'a str,
    pub language: &'a str,
    /// Only keep certifications for this country, if set.
    pub country: Option<&'a str>,
}

pub fn image_url(base: &str, size: &str, path: &str) -> String {
    format!("{base}{size}{path}")
}

pub(crate) fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.trim().is_empty())
}

fn non_empty(path: Option<&str>) -> Option<&str> {
    path.filter(|p| !p.trim().is_empty())
}

/// Build host metadata from a full movie record. Never fails; missing
/// collections simply produce empty lists.
pub fn normalize_movie(movie: &Movie, ctx: &NormalizeContext<'_>) -> MediaMetadata {
    let mut md = MediaMetadata::new(PROVIDER_ID);

    md.tmdb_id = Some(movie.id);
    md.title = movie.title.clone();
    md.original_title = movie.original_title.clone();
    md.plot = movie.overview.clone();
    md.tagline = movie.tagline.clone();
    md.runtime_minutes = movie.runtime;
    md.rating = movie.vote_average;
    md.vote_count = movie.vote_count;
    md.release_date = movie.release_date;
    md.year = movie.release_date.map(|d| d.year());

    let poster_path = movie.poster_path.as_deref().unwrap_or_default();
    md.artwork.push(MediaArtwork {
        provider_id: PROVIDER_ID.to_string(),
        kind: ArtworkType::Poster,
        preview_url: image_url(ctx.image_base_url, PREVIEW_SIZE, poster_path),
        default_url: image_url(ctx.image_base_url, POSTER_SIZE, poster_path),
        language: ctx.language.to_string(),
        tmdb_id: movie.id,
    });

    md.spoken_languages = movie
        .spoken_languages
        .iter()
        .flatten()
        .map(|l| l.iso_639_1.clone())
        .collect();

    md.countries = movie
        .production_countries
        .iter()
        .flatten()
        .map(|c| c.iso_3166_1.clone())
        .collect();

    md.imdb_id = valid_imdb_id(movie.imdb_id.as_deref()).map(str::to_string);

    md.production_companies = movie
        .production_companies
        .iter()
        .flatten()
        .map(|c| c.name.clone())
        .collect();

    md.certifications = certifications(movie, ctx.country);
    md.cast = cast_and_crew(movie, ctx.image_base_url);

    md.genres = movie.genres.iter().flatten().map(map_genre).collect();

    if let Some(collection) = &movie.belongs_to_collection {
        md.collection_id = Some(collection.id);
        md.collection_name = collection.name.clone();
    }

    md
}

fn certifications(movie: &Movie, country: Option<&str>) -> Vec<Certification> {
    let Some(releases) = &movie.releases else {
        return Vec::new();
    };

    releases
        .countries
        .iter()
        .flatten()
        .filter_map(|release| {
            let rating = release.certification.as_deref().filter(|c| !c.is_empty())?;
            let wanted = country.is_none_or(|c| c.eq_ignore_ascii_case(&release.iso_3166_1));
            wanted.then(|| Certification {
                country: release.iso_3166_1.clone(),
                rating: rating.to_string(),
            })
        })
        .collect()
}

fn cast_and_crew(movie: &Movie, image_base_url: &str) -> Vec<CastMember> {
    let Some(credits) = &movie.credits else {
        return Vec::new();
    };

    let portrait = |path: Option<&str>| {
        non_empty(path).map(|p| image_url(image_base_url, PREVIEW_SIZE, p))
    };

    let mut people: Vec<CastMember> = credits
        .cast
        .iter()
        .flatten()
        .map(|actor| CastMember {
            role: CastType::Actor,
            name: actor.name.clone(),
            character: actor.character.clone(),
            part: None,
            image_url: portrait(actor.profile_path.as_deref()),
        })
        .collect();

    for member in credits.crew.iter().flatten() {
        let Some((role, part)) = classify_crew(member) else {
            continue;
        };
        people.push(CastMember {
            role,
            name: member.name.clone(),
            character: None,
            part,
            image_url: portrait(member.profile_path.as_deref()),
        });
    }

    people
}

/// Director by job, writer and producer by department; everyone else is
/// dropped.
fn classify_crew(member: &CrewCredit) -> Option<(CastType, Option<String>)> {
    let job = member.job.as_deref();
    let department = member.department.as_deref();

    if job == Some("Director") {
        Some((CastType::Director, member.department.clone()))
    } else if department == Some("Writing") {
        Some((CastType::Writer, member.department.clone()))
    } else if department == Some("Production") {
        Some((CastType::Producer, member.job.clone()))
    } else {
        None
    }
}

/// Fill the translatable fields that were blank in `source` (the record in
/// the requested language) from metadata scraped in the base language.
pub fn backfill_translations(source: &Movie, target: &mut MediaMetadata, base: &MediaMetadata) {
    fn fill(source_blank: bool, target: &mut Option<String>, base: &Option<String>) {
        if source_blank && !is_blank(base.as_deref()) {
            *target = base.clone();
        }
    }

    fill(is_blank(source.overview.as_deref()), &mut target.plot, &base.plot);
    fill(is_blank(source.title.as_deref()), &mut target.title, &base.title);
    fill(
        is_blank(source.original_title.as_deref()),
        &mut target.original_title,
        &base.original_title,
    );
    fill(is_blank(source.tagline.as_deref()), &mut target.tagline, &base.tagline);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CastCredit, CollectionRef, CountryRelease, Credits, ProductionCompany, ProductionCountry,
        Releases, SpokenLanguage, TmdbGenre,
    };
    use chrono::NaiveDate;
    use cinemeta_core::Genre;

    const CTX: NormalizeContext<'static> = NormalizeContext {
        image_base_url: "http://img/",
        language: "de",
        country: None,
    };

    fn release(country: &str, certification: &str) -> CountryRelease {
        CountryRelease {
            iso_3166_1: country.to_string(),
            certification: Some(certification.to_string()),
            release_date: None,
        }
    }

    fn crew(name: &str, job: &str, department: &str) -> CrewCredit {
        CrewCredit {
            name: name.to_string(),
            job: Some(job.to_string()),
            department: Some(department.to_string()),
            profile_path: None,
        }
    }

    fn inception() -> Movie {
        serde_json::from_value(serde_json::json!({
            "id": 27205,
            "imdb_id": "tt1375666",
            "title": "Inception",
            "original_title": "Inception",
            "overview": "A thief who steals corporate secrets...",
            "tagline": "Your mind is the scene of the crime.",
            "release_date": "2010-07-16",
            "runtime": 148,
            "vote_average": 8.4,
            "vote_count": 35000,
            "poster_path": "/abc.jpg",
            "genres": [
                { "id": 28, "name": "Action" },
                { "id": 878, "name": "Science Fiction" }
            ],
            "production_companies": [
                { "id": 923, "name": "Legendary Pictures" },
                { "id": 9996, "name": "Syncopy" },
                { "id": 923, "name": "Legendary Pictures" }
            ],
            "belongs_to_collection": null,
            "credits": {
                "cast": [
                    { "name": "Leonardo DiCaprio", "character": "Cobb", "profile_path": "/leo.jpg" }
                ],
                "crew": [
                    { "name": "Christopher Nolan", "job": "Director", "department": "Directing", "profile_path": "/nolan.jpg" }
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn copies_direct_fields() {
        let md = normalize_movie(&inception(), &CTX);
        assert_eq!(md.provider_id, "tmdb");
        assert_eq!(md.tmdb_id, Some(27205));
        assert_eq!(md.imdb_id.as_deref(), Some("tt1375666"));
        assert_eq!(md.title.as_deref(), Some("Inception"));
        assert_eq!(md.plot.as_deref(), Some("A thief who steals corporate secrets..."));
        assert_eq!(md.year, Some(2010));
        assert_eq!(md.release_date, NaiveDate::from_ymd_opt(2010, 7, 16));
        assert_eq!(md.runtime_minutes, Some(148));
        assert!((md.rating - 8.4).abs() < 1e-9);
        assert_eq!(md.vote_count, 35000);
        assert_eq!(md.genres, vec![Genre::Action, Genre::ScienceFiction]);
    }

    #[test]
    fn poster_urls_use_size_tokens() {
        let md = normalize_movie(&inception(), &CTX);
        assert_eq!(md.artwork.len(), 1);
        let poster = &md.artwork[0];
        assert_eq!(poster.kind, ArtworkType::Poster);
        assert_eq!(poster.preview_url, "http://img/w185/abc.jpg");
        assert_eq!(poster.default_url, "http://img/w342/abc.jpg");
        assert_eq!(poster.language, "de");
        assert_eq!(poster.tmdb_id, 27205);
    }

    #[test]
    fn companies_are_not_deduplicated() {
        let md = normalize_movie(&inception(), &CTX);
        assert_eq!(
            md.production_companies,
            vec!["Legendary Pictures", "Syncopy", "Legendary Pictures"]
        );
    }

    #[test]
    fn empty_record_still_produces_metadata() {
        let movie = Movie {
            id: 1,
            ..Default::default()
        };
        let md = normalize_movie(&movie, &CTX);
        assert_eq!(md.tmdb_id, Some(1));
        assert!(md.title.is_none());
        assert!(md.year.is_none());
        assert!(md.runtime_minutes.is_none());
        assert_eq!(md.artwork.len(), 1);
        assert_eq!(md.artwork[0].kind, ArtworkType::Poster);
        assert_eq!(md.artwork[0].preview_url, "http://img/w185");
        assert_eq!(md.artwork[0].default_url, "http://img/w342");
        assert_eq!(md.artwork[0].language, "de");
        assert_eq!(md.artwork[0].tmdb_id, 1);
        assert!(md.cast.is_empty());
        assert!(md.genres.is_empty());
        assert!(md.certifications.is_empty());
        assert!(md.spoken_languages.is_empty());
        assert!(md.countries.is_empty());
        assert!(md.production_companies.is_empty());
    }

    #[test]
    fn languages_and_countries_keep_order() {
        let movie = Movie {
            spoken_languages: Some(vec![
                SpokenLanguage {
                    iso_639_1: "en".into(),
                    name: None,
                },
                SpokenLanguage {
                    iso_639_1: "ja".into(),
                    name: None,
                },
            ]),
            production_countries: Some(vec![
                ProductionCountry {
                    iso_3166_1: "US".into(),
                    name: None,
                },
                ProductionCountry {
                    iso_3166_1: "GB".into(),
                    name: None,
                },
            ]),
            production_companies: Some(vec![ProductionCompany {
                id: None,
                name: "Syncopy".into(),
            }]),
            ..Default::default()
        };
        let md = normalize_movie(&movie, &CTX);
        assert_eq!(md.spoken_languages, vec!["en", "ja"]);
        assert_eq!(md.countries, vec!["US", "GB"]);
    }

    #[test]
    fn invalid_imdb_id_is_omitted() {
        let movie = Movie {
            imdb_id: Some("1375666".into()),
            ..Default::default()
        };
        assert!(normalize_movie(&movie, &CTX).imdb_id.is_none());
    }

    #[test]
    fn empty_certifications_are_always_skipped() {
        let movie = Movie {
            releases: Some(Releases {
                countries: Some(vec![
                    release("US", "PG-13"),
                    release("DE", ""),
                    release("GB", "12A"),
                    CountryRelease {
                        iso_3166_1: "FR".into(),
                        certification: None,
                        release_date: None,
                    },
                ]),
            }),
            ..Default::default()
        };

        let all = normalize_movie(&movie, &CTX).certifications;
        assert_eq!(
            all,
            vec![
                Certification {
                    country: "US".into(),
                    rating: "PG-13".into()
                },
                Certification {
                    country: "GB".into(),
                    rating: "12A".into()
                },
            ]
        );

        let ctx = NormalizeContext {
            country: Some("de"),
            ..CTX
        };
        assert!(normalize_movie(&movie, &ctx).certifications.is_empty());
    }

    #[test]
    fn certification_country_filter_is_case_insensitive() {
        let movie = Movie {
            releases: Some(Releases {
                countries: Some(vec![release("US", "PG-13"), release("GB", "12A")]),
            }),
            ..Default::default()
        };
        let ctx = NormalizeContext {
            country: Some("gb"),
            ..CTX
        };
        let certs = normalize_movie(&movie, &ctx).certifications;
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].country, "GB");
        assert_eq!(certs[0].rating, "12A");
    }

    #[test]
    fn crew_is_classified_or_dropped() {
        let movie = Movie {
            credits: Some(Credits {
                cast: Some(vec![CastCredit {
                    name: "Tom Hardy".into(),
                    character: Some("Eames".into()),
                    profile_path: Some("".into()),
                }]),
                crew: Some(vec![
                    crew("Christopher Nolan", "Director", "Directing"),
                    crew("Jonathan Nolan", "Screenplay", "Writing"),
                    crew("Emma Thomas", "Producer", "Production"),
                    crew("Hans Zimmer", "Original Music Composer", "Sound"),
                    crew("Wally Pfister", "Director of Photography", "Camera"),
                ]),
            }),
            ..Default::default()
        };

        let md = normalize_movie(&movie, &CTX);
        let roles: Vec<(CastType, &str)> =
            md.cast.iter().map(|c| (c.role, c.name.as_str())).collect();
        assert_eq!(
            roles,
            vec![
                (CastType::Actor, "Tom Hardy"),
                (CastType::Director, "Christopher Nolan"),
                (CastType::Writer, "Jonathan Nolan"),
                (CastType::Producer, "Emma Thomas"),
            ]
        );

        assert_eq!(md.cast[0].character.as_deref(), Some("Eames"));
        assert_eq!(md.cast[0].image_url, None);
        assert_eq!(md.cast[1].part.as_deref(), Some("Directing"));
        assert_eq!(md.cast[2].part.as_deref(), Some("Writing"));
        assert_eq!(md.cast[3].part.as_deref(), Some("Producer"));
    }

    #[test]
    fn cast_portraits_use_preview_size() {
        let md = normalize_movie(&inception(), &CTX);
        let actor = md.cast_of(CastType::Actor).next().unwrap();
        assert_eq!(actor.image_url.as_deref(), Some("http://img/w185/leo.jpg"));
        let director = md.cast_of(CastType::Director).next().unwrap();
        assert_eq!(director.image_url.as_deref(), Some("http://img/w185/nolan.jpg"));
    }

    #[test]
    fn collection_is_split_into_id_and_name() {
        let movie = Movie {
            belongs_to_collection: Some(CollectionRef {
                id: 263,
                name: Some("The Dark Knight Collection".into()),
            }),
            genres: Some(vec![TmdbGenre {
                id: 4242,
                name: "Something New".into(),
            }]),
            ..Default::default()
        };
        let md = normalize_movie(&movie, &CTX);
        assert_eq!(md.collection_id, Some(263));
        assert_eq!(md.collection_name.as_deref(), Some("The Dark Knight Collection"));
        assert_eq!(md.genres, vec![Genre::Unknown]);
    }

    #[test]
    fn backfill_only_touches_fields_blank_in_source() {
        let source = Movie {
            id: 27205,
            title: Some("Inception".into()),
            original_title: None,
            overview: Some("   ".into()),
            tagline: None,
            ..Default::default()
        };
        let mut target = normalize_movie(&source, &CTX);

        let base = MediaMetadata {
            title: Some("Inception (EN)".into()),
            original_title: Some("Inception".into()),
            plot: Some("English plot".into()),
            tagline: Some("".into()),
            ..MediaMetadata::new("tmdb")
        };

        backfill_translations(&source, &mut target, &base);
        assert_eq!(target.title.as_deref(), Some("Inception"));
        assert_eq!(target.original_title.as_deref(), Some("Inception"));
        assert_eq!(target.plot.as_deref(), Some("English plot"));
        assert_eq!(target.tagline, None);
    }
}
