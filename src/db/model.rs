use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One liked movie, as stored. `id` is the SQLite rowid; `liked_at` is set
/// when the row is inserted during a sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikedMovie {
    pub id: i64,
    pub tmdb_id: i64,
    pub title: String,
    pub genre_ids: Vec<i32>,
    pub poster_path: Option<String>,
    pub overview: String,
    pub release_date: String,
    pub vote_average: f64,
    pub original_language: String,
    pub liked_at: Option<DateTime<Utc>>,
}

/// A liked movie as it arrives in a sync payload. Every field defaults;
/// the frontend forwards whatever TMDB gave it, gaps included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLikedMovie {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default = "default_language")]
    pub original_language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for NewLikedMovie {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            genre_ids: Vec::new(),
            poster_path: None,
            overview: String::new(),
            release_date: String::new(),
            vote_average: 0.0,
            original_language: default_language(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

pub type DbResult<T> = Result<T, DbError>;
