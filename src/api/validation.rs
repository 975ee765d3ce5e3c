use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::ApiError;

/// JSON body extractor that reports malformed or mistyped payloads as
/// [`ApiError::ValidationError`] (400) instead of axum's 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| ApiError::validation(rejection.body_text()))
    }
}

/// Path extractor with the same error body as [`ApiJson`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| ApiError::validation(rejection.body_text()))
    }
}

/// Lenient id parsing for lookups: text that is not an integer names no row,
/// so reads answer "nothing found" instead of rejecting the request.
#[must_use]
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

pub fn validate_required(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(" 3 "), Some(3));
        assert_eq!(parse_id("-4"), Some(-4));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Neon Dynasty", "Title").is_ok());
        assert!(validate_required("", "Title").is_err());
        assert!(validate_required("   ", "Title").is_err());
    }
}
