//! User accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Full user row from database (includes password_hash, never serialized to the API).
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User response DTO, excludes password_hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

/// Self-service registration payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 3, max = 50, message = "must be 3 to 50 characters"))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "must match password"))]
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(password: &str, confirm: &str) -> RegisterUser {
        RegisterUser {
            username: "ana".to_string(),
            email: "ana@fitlife.test".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn user_response_excludes_password() {
        let json = serde_json::to_string(&UserResponse::from(User {
            id: Uuid::nil(),
            username: "ana".to_string(),
            email: "ana@fitlife.test".to_string(),
            password_hash: "secret_hash".to_string(),
            created_at: Utc::now(),
        }))
        .unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("secret_hash"));
    }

    #[test]
    fn registration_validation() {
        assert!(registration("hunter22", "hunter22").validate().is_ok());
        assert!(registration("hunter22", "hunter23").validate().is_err());
        assert!(registration("abc", "abc").validate().is_err());

        let bad_email = RegisterUser {
            email: "not-an-email".to_string(),
            ..registration("hunter22", "hunter22")
        };
        assert!(bad_email.validate().is_err());

        let short_name = RegisterUser {
            username: "ab".to_string(),
            ..registration("hunter22", "hunter22")
        };
        assert!(short_name.validate().is_err());
    }
}
