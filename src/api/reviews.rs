use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::validation::{ApiJson, ApiPath, parse_id};
use super::{AddReviewRequest, ApiError, AppState};
use crate::models::{NewReview, Review};

pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    ApiPath(movie_id): ApiPath<String>,
) -> Json<Vec<Review>> {
    let reviews = match parse_id(&movie_id) {
        Some(movie_id) => state.store().get_movie_reviews(movie_id).await,
        None => Vec::new(),
    };
    Json(reviews)
}

/// Rating range is not checked.
pub async fn add_review(
    State(state): State<Arc<AppState>>,
    ApiPath(movie_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<AddReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let review = state
        .store()
        .add_review(NewReview {
            user_id: payload.user_id,
            movie_id,
            rating: payload.rating,
            comment: payload.comment,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}
