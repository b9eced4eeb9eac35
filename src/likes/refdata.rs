use std::collections::HashMap;

/// Lookup tables mapping TMDB genre ids and ISO 639-1 language codes to
/// display names. Built once at startup and shared through `AppState`, so
/// tests (or the config file) can substitute their own mappings.
#[derive(Debug, Clone)]
pub struct RefTables {
    genres: HashMap<i32, String>,
    languages: HashMap<String, String>,
}

/// Official TMDB movie genre ids.
const GENRES: &[(i32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("hi", "Hindi"),
    ("ar", "Arabic"),
];

impl Default for RefTables {
    fn default() -> Self {
        Self {
            genres: GENRES
                .iter()
                .map(|&(id, name)| (id, name.to_string()))
                .collect(),
            languages: LANGUAGES
                .iter()
                .map(|&(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl RefTables {
    pub fn new(genres: HashMap<i32, String>, languages: HashMap<String, String>) -> Self {
        Self { genres, languages }
    }

    pub fn genres_map(&self) -> HashMap<i32, String> {
        self.genres.clone()
    }

    pub fn languages_map(&self) -> HashMap<String, String> {
        self.languages.clone()
    }

    /// Display name for a genre id, "Unknown" if unmapped.
    pub fn genre_name(&self, id: i32) -> String {
        self.genres
            .get(&id)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Display name for a language code. Unmapped codes fall back to the
    /// code itself, upper-cased.
    pub fn language_name(&self, code: &str) -> String {
        self.languages
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_name() {
        let tables = RefTables::default();
        assert_eq!(tables.genre_name(28), "Action");
        assert_eq!(tables.genre_name(878), "Science Fiction");
        assert_eq!(tables.genre_name(99999), "Unknown");
    }

    #[test]
    fn test_language_name() {
        let tables = RefTables::default();
        assert_eq!(tables.language_name("en"), "English");
        assert_eq!(tables.language_name("ko"), "Korean");
        assert_eq!(tables.language_name("xx"), "XX");
    }

    #[test]
    fn test_substituted_tables() {
        let genres = [(1, "Noir".to_string())].into_iter().collect();
        let languages = [("tlh".to_string(), "Klingon".to_string())]
            .into_iter()
            .collect();
        let tables = RefTables::new(genres, languages);
        assert_eq!(tables.genre_name(1), "Noir");
        assert_eq!(tables.genre_name(28), "Unknown");
        assert_eq!(tables.language_name("tlh"), "Klingon");
    }
}
