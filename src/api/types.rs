use serde::{Deserialize, Serialize};

use crate::models::progress::present;
use crate::services::UserInfo;

/// Body of a successful register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserInfo,
}

impl AuthResponse {
    #[must_use]
    pub const fn new(user: UserInfo) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `userId` comes from the path; a `userId` in the body is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWatchlistRequest {
    pub movie_id: i32,
}

/// `userId` comes from the path; a `userId` in the body is ignored.
/// An explicit `null` season or episode clears the stored value; an absent
/// key keeps it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    pub movie_id: i32,
    pub progress_percentage: i32,
    pub current_time: i32,
    #[serde(default, deserialize_with = "present")]
    pub season: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub episode: Option<Option<i32>>,
}

/// `movieId` comes from the path; a `movieId` in the body is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReviewRequest {
    pub user_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenreQuery {
    pub genre: Option<String>,
}

/// `?userId=` on the personalised movie rows.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    /// Kept as text: a value that is not a number means "no user".
    pub user_id: Option<String>,
}

impl UserQuery {
    #[must_use]
    pub fn user_id(&self) -> Option<i32> {
        self.user_id.as_deref().and_then(super::validation::parse_id)
    }
}
