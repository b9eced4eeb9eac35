use axum::{extract::State, Json};
use tracing::info;

use super::error::ApiError;
use super::stats;
use super::types::*;
use crate::db::LikesRepo;
use crate::server::AppState;

/// POST /api/sync-likes
///
/// Full-replace sync: the store afterwards holds exactly the movies in the
/// payload, nothing else. Missing fields default rather than rejecting the
/// batch.
pub async fn sync_likes(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<SyncResponse>, ApiError> {
    let request: SyncRequest =
        serde_json::from_str(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let count = state.db.replace_all(&request.likes).await?;

    info!(count = count, "Synced liked movies");

    Ok(Json(SyncResponse {
        status: "success",
        count,
    }))
}

/// GET /api/top-genres
///
/// The 3 genres appearing most often across all liked movies. A movie
/// counts once per genre it has.
pub async fn top_genres(
    State(state): State<AppState>,
) -> Result<Json<TopGenresResponse>, ApiError> {
    let movies = state.db.list_all().await?;

    if movies.is_empty() {
        return Ok(Json(TopGenresResponse {
            top_genres: Vec::new(),
            total_likes: None,
            message: Some("No liked movies yet".to_string()),
        }));
    }

    let top_genres = stats::top_genres(&movies)
        .into_iter()
        .map(|(id, count)| GenreCount {
            id,
            name: state.reftables.genre_name(id),
            count,
        })
        .collect();

    let total_likes = state.db.count().await?;

    Ok(Json(TopGenresResponse {
        top_genres,
        total_likes: Some(total_likes),
        message: None,
    }))
}

/// GET /api/top-languages
pub async fn top_languages(
    State(state): State<AppState>,
) -> Result<Json<TopLanguagesResponse>, ApiError> {
    let movies = state.db.list_all().await?;

    let top_languages = stats::top_languages(&movies)
        .into_iter()
        .map(|(code, count)| LanguageCount {
            name: state.reftables.language_name(&code),
            code,
            count,
        })
        .collect();

    Ok(Json(TopLanguagesResponse { top_languages }))
}

/// GET /api/decade-stats
pub async fn decade_stats(
    State(state): State<AppState>,
) -> Result<Json<TopDecadesResponse>, ApiError> {
    let movies = state.db.list_all().await?;

    let top_decades = stats::top_decades(&movies)
        .into_iter()
        .map(|(decade, count)| DecadeCount {
            decade: stats::decade_label(decade),
            count,
        })
        .collect();

    Ok(Json(TopDecadesResponse { top_decades }))
}
