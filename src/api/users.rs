use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::validation::{ApiJson, ApiPath, parse_id};
use super::{AddToWatchlistRequest, ApiError, AppState, UpdateProgressRequest};
use crate::models::{NewWatchProgress, NewWatchlistEntry, Title, WatchProgress, WatchlistEntry};
use crate::services::UserInfo;

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<Json<UserInfo>, ApiError> {
    let Some(user_id) = parse_id(&user_id) else {
        return Err(ApiError::not_found("User"));
    };

    let user = state
        .store()
        .get_user(user_id)
        .await
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(UserInfo::from(user)))
}

// ============================================================================
// Watchlist
// ============================================================================

/// A user id that is not a number owns no entries.
pub async fn get_watchlist(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<String>,
) -> Result<Json<Vec<Title>>, ApiError> {
    let titles = match parse_id(&user_id) {
        Some(user_id) => state.store().get_user_watchlist(user_id).await?,
        None => Vec::new(),
    };
    Ok(Json(titles))
}

pub async fn add_to_watchlist(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<AddToWatchlistRequest>,
) -> Result<(StatusCode, Json<WatchlistEntry>), ApiError> {
    let entry = state
        .store()
        .add_to_watchlist(NewWatchlistEntry {
            user_id,
            movie_id: payload.movie_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Always 204, whether or not an entry was removed.
pub async fn remove_from_watchlist(
    State(state): State<Arc<AppState>>,
    ApiPath((user_id, movie_id)): ApiPath<(String, String)>,
) -> StatusCode {
    let removed = match (parse_id(&user_id), parse_id(&movie_id)) {
        (Some(user_id), Some(movie_id)) => {
            state
                .store()
                .remove_from_watchlist(user_id, movie_id)
                .await
        }
        _ => false,
    };

    if !removed {
        tracing::debug!(%user_id, %movie_id, "Nothing to remove from watchlist");
    }

    StatusCode::NO_CONTENT
}

// ============================================================================
// Watch progress
// ============================================================================

pub async fn get_progress(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<String>,
) -> Json<Vec<WatchProgress>> {
    let progress = match parse_id(&user_id) {
        Some(user_id) => state.store().get_user_watch_progress(user_id).await,
        None => Vec::new(),
    };
    Json(progress)
}

pub async fn update_progress(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateProgressRequest>,
) -> Result<(StatusCode, Json<WatchProgress>), ApiError> {
    let progress = state
        .store()
        .update_watch_progress(NewWatchProgress {
            user_id,
            movie_id: payload.movie_id,
            progress_percentage: payload.progress_percentage,
            current_time: payload.current_time,
            season: payload.season,
            episode: payload.episode,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(progress)))
}
