use serde::{Deserialize, Serialize};

use crate::db::NewLikedMovie;

/// Body of POST /api/sync-likes: the frontend's full list of liked movies.
#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    #[serde(default)]
    pub likes: Vec<NewLikedMovie>,
}

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub status: &'static str,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct GenreCount {
    pub id: i32,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct TopGenresResponse {
    pub top_genres: Vec<GenreCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_likes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LanguageCount {
    pub code: String,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct TopLanguagesResponse {
    pub top_languages: Vec<LanguageCount>,
}

#[derive(Debug, Serialize)]
pub struct DecadeCount {
    pub decade: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct TopDecadesResponse {
    pub top_decades: Vec<DecadeCount>,
}
