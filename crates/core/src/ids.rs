//! External identifier helpers.

use regex::Regex;
use std::sync::LazyLock;

// tt0133093, tt10872600
static RE_IMDB_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^tt\d{7,}$").unwrap());

/// Whether `id` looks like an IMDb title id.
pub fn is_valid_imdb_id(id: &str) -> bool {
    RE_IMDB_ID.is_match(id)
}

/// Returns the IMDb id if present and well-formed.
pub fn valid_imdb_id(id: Option<&str>) -> Option<&str> {
    id.filter(|id| is_valid_imdb_id(id))
}
