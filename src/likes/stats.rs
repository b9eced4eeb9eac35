//! Tally-and-top-3 aggregation over the liked-movie store.
//!
//! All three statistics share the same shape: derive one or more keys per
//! record, count occurrences, keep the three highest counts. Ties are broken
//! by the order in which a key was first seen while scanning the store
//! (most recently liked first), which matches what the frontend has always
//! been shown.

use std::collections::HashMap;
use std::hash::Hash;

use crate::db::LikedMovie;

pub const TOP_N: usize = 3;

/// Count key occurrences and return the `limit` most frequent as
/// `(key, count)`, highest count first. Among equal counts, the key that was
/// seen first wins.
pub fn top_counts<K, I>(keys: I, limit: usize) -> Vec<(K, u64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut tallies: Vec<(K, u64)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => tallies[i].1 += 1,
            None => {
                index.insert(key.clone(), tallies.len());
                tallies.push((key, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    tallies.sort_by(|a, b| b.1.cmp(&a.1));
    tallies.truncate(limit);
    tallies
}

/// Top genres. A movie counts once per genre it carries, so a movie with
/// three genres contributes three tallies. Intentional: the statistic is
/// "how often does this genre appear among my likes".
pub fn top_genres(movies: &[LikedMovie]) -> Vec<(i32, u64)> {
    top_counts(
        movies.iter().flat_map(|m| m.genre_ids.iter().copied()),
        TOP_N,
    )
}

/// Top original languages, one tally per movie.
pub fn top_languages(movies: &[LikedMovie]) -> Vec<(String, u64)> {
    top_counts(
        movies
            .iter()
            .filter(|m| !m.original_language.is_empty())
            .map(|m| m.original_language.clone()),
        TOP_N,
    )
}

/// Top release decades. Movies whose release date yields no year are
/// skipped, they neither count nor fail the request.
pub fn top_decades(movies: &[LikedMovie]) -> Vec<(i32, u64)> {
    top_counts(
        movies
            .iter()
            .filter_map(|m| parse_release_year(&m.release_date))
            .map(|year| (year / 10) * 10),
        TOP_N,
    )
}

/// Year from a "YYYY-MM-DD" release date: the segment before the first "-",
/// parsed as an integer. Empty or malformed dates yield `None`.
pub fn parse_release_year(release_date: &str) -> Option<i32> {
    release_date.split('-').next()?.parse().ok()
}

/// "1990s" style label for a decade.
pub fn decade_label(decade: i32) -> String {
    format!("{}s", decade)
}
