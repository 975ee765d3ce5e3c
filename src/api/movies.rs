use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::{ApiJson, ApiPath, parse_id, validate_required};
use super::{ApiError, AppState, GenreQuery, UserQuery};
use crate::models::{ContinueWatching, NewTitle, Title};

fn filter_genre(titles: Vec<Title>, genre: Option<&str>) -> Vec<Title> {
    match genre {
        Some(genre) => titles.into_iter().filter(|t| t.genre == genre).collect(),
        None => titles,
    }
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GenreQuery>,
) -> Json<Vec<Title>> {
    let movies = state.store().get_all_movies().await;
    Json(filter_genre(movies, query.genre.as_deref()))
}

/// An id that is not a number matches no title.
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Title>, ApiError> {
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::movie_not_found());
    };

    state
        .store()
        .get_movie_by_id(id)
        .await
        .map(Json)
        .ok_or_else(ApiError::movie_not_found)
}

pub async fn trending_movies(State(state): State<Arc<AppState>>) -> Json<Vec<Title>> {
    Json(state.store().get_trending_movies().await)
}

pub async fn recommended_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Json<Vec<Title>> {
    Json(state.store().get_recommended_movies(query.user_id()).await)
}

/// Without a usable `userId` the row is empty.
pub async fn continue_watching(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Json<Vec<ContinueWatching>> {
    let rows = match query.user_id() {
        Some(user_id) => state.store().get_continue_watching(user_id).await,
        None => Vec::new(),
    };
    Json(rows)
}

pub async fn similar_movies(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Vec<Title>>, ApiError> {
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::movie_not_found());
    };

    state
        .store()
        .get_similar_movies(id)
        .await
        .map(Json)
        .ok_or_else(ApiError::movie_not_found)
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewTitle>,
) -> Result<(StatusCode, Json<Title>), ApiError> {
    validate_required(&payload.title, "Title")?;

    let movie = state.store().create_movie(payload).await;
    tracing::info!(title_id = movie.id, "Added \"{}\" to catalog", movie.title);

    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn list_tv_shows(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GenreQuery>,
) -> Json<Vec<Title>> {
    let shows = state.store().get_tv_shows().await;
    Json(filter_genre(shows, query.genre.as_deref()))
}
