//! Activity repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Activity, ActivityStatus};
use crate::error::DomainError;

/// Soft-delete aware: `find_by_id` returns deleted records too, callers
/// decide how a deleted record surfaces. `find_all_active` never does.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Activity>, DomainError>;
    async fn find_all_active(&self) -> Result<Vec<Activity>, DomainError>;
    async fn create(&self, activity: &Activity) -> Result<Activity, DomainError>;
    async fn update(&self, activity: &Activity) -> Result<Activity, DomainError>;
    /// Returns `false` when no record carries the id.
    async fn set_status(&self, id: &Uuid, status: ActivityStatus) -> Result<bool, DomainError>;
}
