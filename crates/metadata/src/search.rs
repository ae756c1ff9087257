//! Query text helpers used by the resolver.

use regex::Regex;
use std::sync::LazyLock;

// "Blade Runner 1982" -> "Blade Runner"
static RE_TRAILING_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s[0-9]{4}$").unwrap());

// Separators that only confuse the TMDB search backend.
const SEARCH_SEPARATORS: &[char] = &['[', ']', '(', ')', '{', '}', '_', '.', ':', '|', '/', '\\'];

/// Replace separator characters with spaces and collapse whitespace.
pub fn search_safe(text: &str) -> String {
    text.chars()
        .map(|c| if SEARCH_SEPARATORS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a trailing ` YYYY` token, if the text ends in one.
pub fn strip_trailing_year(text: &str) -> Option<String> {
    if !RE_TRAILING_YEAR.is_match(text) {
        return None;
    }
    let stripped = RE_TRAILING_YEAR.replace(text, "").trim().to_string();
    (!stripped.is_empty()).then_some(stripped)
}

/// Title similarity in `[0, 1]`.
///
/// Case-insensitive; identical strings score 1.0, otherwise the Dice
/// coefficient over the adjacent letter pairs of each word.
pub fn similarity(query: &str, title: &str) -> f64 {
    let query = query.trim().to_lowercase();
    let title = title.trim().to_lowercase();

    if query.is_empty() || title.is_empty() {
        return 0.0;
    }
    if query == title {
        return 1.0;
    }

    let query_pairs = word_letter_pairs(&query);
    let mut title_pairs = word_letter_pairs(&title);
    let total = query_pairs.len() + title_pairs.len();
    if total == 0 {
        return 0.0;
    }

    let mut shared = 0usize;
    for pair in &query_pairs {
        if let Some(pos) = title_pairs.iter().position(|p| p == pair) {
            title_pairs.swap_remove(pos);
            shared += 1;
        }
    }

    (2.0 * shared as f64) / total as f64
}

fn word_letter_pairs(text: &str) -> Vec<[char; 2]> {
    text.split_whitespace()
        .flat_map(|word| {
            let chars: Vec<char> = word.chars().collect();
            chars
                .windows(2)
                .map(|w| [w[0], w[1]])
                .collect::<Vec<_>>()
        })
        .collect()
}
