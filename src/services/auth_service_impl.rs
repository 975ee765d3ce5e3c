//! Store-backed implementation of the `AuthService` trait.

use crate::db::Store;
use crate::models::NewUser;
use crate::services::auth_service::{AuthError, AuthService, UserInfo};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct StoreAuthService {
    store: Store,
    /// Serialises the uniqueness check and the insert across registrations.
    registration: Mutex<()>,
}

impl StoreAuthService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            registration: Mutex::new(()),
        }
    }

    fn validate(data: &NewUser) -> Result<(), AuthError> {
        if data.username.trim().is_empty() {
            return Err(AuthError::Validation("Username is required".to_string()));
        }
        if data.password.is_empty() {
            return Err(AuthError::Validation("Password is required".to_string()));
        }
        if data.email.trim().is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthService for StoreAuthService {
    async fn register(&self, data: NewUser) -> Result<UserInfo, AuthError> {
        Self::validate(&data)?;

        let _guard = self.registration.lock().await;

        if self.store.get_user_by_username(&data.username).await.is_some() {
            return Err(AuthError::UsernameTaken(data.username));
        }

        if self.store.get_user_by_email(&data.email).await.is_some() {
            return Err(AuthError::EmailTaken(data.email));
        }

        let user = self.store.create_user(data).await;
        info!(user_id = user.id, "Registered user: {}", user.username);

        Ok(UserInfo::from(user))
    }

    async fn login(&self, username: &str, password: &str) -> Result<UserInfo, AuthError> {
        let Some(user) = self.store.get_user_by_username(username).await else {
            warn!("Login attempt for unknown user: {username}");
            return Err(AuthError::InvalidCredentials);
        };

        if user.password != password {
            warn!(user_id = user.id, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(UserInfo::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "open-sesame".to_string(),
            email: email.to_string(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let service = StoreAuthService::new(Store::new());

        let registered = service
            .register(new_user("ana", "ana@example.com"))
            .await
            .unwrap();
        assert_eq!(registered.id, 1);

        let logged_in = service.login("ana", "open-sesame").await.unwrap();
        assert_eq!(logged_in, registered);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_user() {
        let service = StoreAuthService::new(Store::new());
        service
            .register(new_user("ana", "ana@example.com"))
            .await
            .unwrap();

        assert_eq!(
            service.login("ana", "wrong").await.unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            service.login("nobody", "open-sesame").await.unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn register_rejects_duplicates() {
        let service = StoreAuthService::new(Store::new());
        service
            .register(new_user("ana", "ana@example.com"))
            .await
            .unwrap();

        assert_eq!(
            service
                .register(new_user("ana", "other@example.com"))
                .await
                .unwrap_err(),
            AuthError::UsernameTaken("ana".to_string())
        );
        assert_eq!(
            service
                .register(new_user("ben", "ana@example.com"))
                .await
                .unwrap_err(),
            AuthError::EmailTaken("ana@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn register_rejects_empty_fields() {
        let service = StoreAuthService::new(Store::new());

        let err = service
            .register(new_user("  ", "ana@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }
}
