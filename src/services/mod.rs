pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService, UserInfo};
pub use auth_service_impl::StoreAuthService;

pub mod recommender;
pub use recommender::{RandomRecommender, Recommender};
