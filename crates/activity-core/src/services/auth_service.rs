//! Authentication service: register, login, session checks

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use activity_security::password::PasswordService;
use activity_security::session::SessionToken;

use crate::domain::{Session, User};
use crate::error::DomainError;
use crate::repositories::{SessionRepository, UserRepository};

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    session_ttl_seconds: i64,
}

/// Result of a successful login; `token` goes into the cookie.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub user: User,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        session_ttl_seconds: i64,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            session_ttl_seconds,
        }
    }

    /// Register a new user.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<RegisterResult, DomainError> {
        info!("Registration attempt for username: {}", username);

        if username.trim().is_empty() || password.is_empty() || email.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "username, password and email are required".to_string(),
            ));
        }

        if self.user_repo.find_by_username(username).await?.is_some() {
            warn!("Registration failed: username already exists: {}", username);
            return Err(DomainError::UsernameAlreadyExists(username.to_string()));
        }

        let password_hash = PasswordService::hash(password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        let user = User::new(username.to_string(), email.to_string(), password_hash)
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        let created = self.user_repo.create(&user).await?;

        info!("Registration successful for: {}", username);
        Ok(RegisterResult { user: created })
    }

    /// Login with username and password, issuing a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, DomainError> {
        info!("Login attempt for username: {}", username);

        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: username not found: {}", username);
                DomainError::InvalidCredentials
            })?;

        let password_valid = PasswordService::verify(password, &user.password_hash)
            .map_err(|_e| DomainError::InvalidCredentials)?;
        if !password_valid {
            warn!("Login failed: invalid password for: {}", username);
            return Err(DomainError::InvalidCredentials);
        }

        let token = SessionToken::generate();
        let session = Session::new(user.id, token.hash, self.session_ttl_seconds);
        self.session_repo.create(&session).await?;

        let mut updated_user = user.clone();
        updated_user.record_login();
        if let Err(e) = self.user_repo.update(&updated_user).await {
            error!("Failed to update last login: {}", e);
            // Don't fail login for this
        }

        info!("Login successful for: {}", username);
        Ok(LoginResult {
            user: updated_user,
            token: token.raw,
        })
    }

    /// Resolve a raw cookie token to the owning user id.
    pub async fn authenticate(&self, raw_token: &str) -> Result<User, DomainError> {
        let hash = SessionToken::fingerprint(raw_token);
        let session = self
            .session_repo
            .find_by_token_hash(&hash)
            .await?
            .ok_or(DomainError::SessionInvalid)?;

        if session.is_expired(Utc::now()) {
            self.session_repo.delete(&hash).await?;
            return Err(DomainError::SessionInvalid);
        }

        self.user_repo
            .find_by_id(&session.user_id)
            .await?
            .ok_or(DomainError::SessionInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::session_repository::MockSessionRepository;
    use crate::repositories::user_repository::MockUserRepository;

    fn service(
        users: MockUserRepository,
        sessions: MockSessionRepository,
    ) -> AuthService {
        AuthService::new(Arc::new(users), Arc::new(sessions), 3600)
    }

    #[tokio::test]
    async fn register_rejects_duplicate_username() {
        let hash = PasswordService::hash("hunter2").unwrap();
        let existing = User::new("AzureDiamond".into(), "test@test.com".into(), hash).unwrap();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(existing.clone())));

        let err = service(users, MockSessionRepository::new())
            .register("AzureDiamond", "hunter2", "test@test.com")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UsernameAlreadyExists(_)));
    }

    #[tokio::test]
    async fn register_rejects_blank_fields() {
        let err = service(MockUserRepository::new(), MockSessionRepository::new())
            .register("", "hunter2", "test@test.com")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn login_issues_session_for_valid_credentials() {
        let hash = PasswordService::hash("hunter2").unwrap();
        let user = User::new("AzureDiamond".into(), "test@test.com".into(), hash).unwrap();

        let mut users = MockUserRepository::new();
        let fixture = user.clone();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(fixture.clone())));
        users.expect_update().returning(|u| Ok(u.clone()));

        let mut sessions = MockSessionRepository::new();
        sessions.expect_create().returning(|s| Ok(s.clone()));

        let result = service(users, sessions)
            .login("AzureDiamond", "hunter2")
            .await
            .unwrap();
        assert_eq!(result.user.username, "AzureDiamond");
        assert!(!result.token.is_empty());
        assert!(result.user.last_login_at.is_some());
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let hash = PasswordService::hash("hunter2").unwrap();
        let user = User::new("AzureDiamond".into(), "test@test.com".into(), hash).unwrap();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user.clone())));

        let err = service(users, MockSessionRepository::new())
            .login("AzureDiamond", "*******")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn authenticate_rejects_unknown_and_expired_tokens() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token_hash()
            .returning(|_| Ok(None));

        let err = service(MockUserRepository::new(), sessions)
            .authenticate("deadbeef")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SessionInvalid));

        let expired = Session::new(uuid::Uuid::new_v4(), "x".into(), -10);
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token_hash()
            .returning(move |_| Ok(Some(expired.clone())));
        sessions.expect_delete().returning(|_| Ok(()));

        let err = service(MockUserRepository::new(), sessions)
            .authenticate("deadbeef")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SessionInvalid));
    }
}
