use axum::{
    Router,
    http::{HeaderValue, header},
    middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::AuthService;
use crate::state::SharedState;

pub mod auth;
mod error;
pub mod movies;
mod observability;
pub mod reviews;
mod system;
mod types;
pub mod users;
mod validation;

pub use error::{ApiError, FailureKind};
pub use types::*;
pub use validation::{ApiJson, ApiPath, parse_id};

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn auth_service(&self) -> &Arc<dyn AuthService> {
        &self.shared.auth_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route("/movies/trending", get(movies::trending_movies))
        .route("/movies/recommended", get(movies::recommended_movies))
        .route("/movies/continue-watching", get(movies::continue_watching))
        .route("/movies/similar/{id}", get(movies::similar_movies))
        .route("/movies/{id}", get(movies::get_movie))
        .route("/movies/{id}/similar", get(movies::similar_movies))
        .route(
            "/movies/{id}/reviews",
            get(reviews::list_reviews).post(reviews::add_review),
        )
        .route("/tv-shows", get(movies::list_tv_shows))
        .route("/users/{user_id}", get(users::get_user))
        .route(
            "/users/{user_id}/watchlist",
            get(users::get_watchlist).post(users::add_to_watchlist),
        )
        .route(
            "/users/{user_id}/watchlist/{movie_id}",
            delete(users::remove_from_watchlist),
        )
        .route(
            "/users/{user_id}/progress",
            get(users::get_progress).post(users::update_progress),
        )
        .route("/health", get(system::health))
        .route("/metrics", get(observability::render_metrics))
        .route_layer(middleware::from_fn(observability::track_request))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}
