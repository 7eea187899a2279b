//! Session repository trait (port)

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError>;
    async fn create(&self, session: &Session) -> Result<Session, DomainError>;
    async fn delete(&self, token_hash: &str) -> Result<(), DomainError>;
}
