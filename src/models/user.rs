use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Stored and compared as plaintext.
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl NewUser {
    #[must_use]
    pub fn into_user(self, id: i32, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            email: self.email,
            avatar: self.avatar,
            created_at,
        }
    }
}
