//! User domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,

    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
            last_login_at: None,
        };
        user.validate()?;
        Ok(user)
    }

    pub fn record_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }
}
