//! Activity service: create, read, edit, soft-delete/restore, search

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{Activity, ActivityStatus};
use crate::error::DomainError;
use crate::repositories::ActivityRepository;

/// Validated creation input; blank title/description fall back to the
/// documented defaults inside `Activity::new`.
#[derive(Debug, Clone, Default)]
pub struct NewActivity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// Search filters; an unset flag means "no filter".
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFilter {
    pub omit_ended: bool,
    pub omit_started: bool,
}

pub struct ActivityService {
    repo: Arc<dyn ActivityRepository>,
}

impl ActivityService {
    pub fn new(repo: Arc<dyn ActivityRepository>) -> Self {
        Self { repo }
    }

    /// Create a new activity. Rejects `ends_at < starts_at` before
    /// anything is persisted.
    pub async fn create(&self, input: NewActivity) -> Result<Activity, DomainError> {
        let activity = Activity::new(
            input.title,
            input.description,
            input.starts_at,
            input.ends_at,
        )?;

        let created = self.repo.create(&activity).await?;
        info!("Activity created: {}", created.id);
        Ok(created)
    }

    /// Fetch a single activity. Deleted records surface as a distinct
    /// error so the API can answer "Deleted" rather than "Not found".
    pub async fn get(&self, id: &Uuid) -> Result<Activity, DomainError> {
        let activity = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ActivityNotFound)?;

        if activity.is_deleted() {
            return Err(DomainError::ActivityDeleted);
        }
        Ok(activity)
    }

    /// Update the supplied fields, leaving the rest untouched.
    pub async fn edit(
        &self,
        id: &Uuid,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Activity, DomainError> {
        let mut activity = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ActivityNotFound)?;

        if let Some(title) = title {
            activity.title = title;
        }
        if let Some(description) = description {
            activity.description = description;
        }
        activity.modified_at = Some(Utc::now());

        let updated = self.repo.update(&activity).await?;
        info!("Activity updated: {}", updated.id);
        Ok(updated)
    }

    /// Soft-delete. Deleting an already-deleted record is an idempotent
    /// success; only an unknown id fails.
    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let found = self.repo.set_status(id, ActivityStatus::Deleted).await?;
        if !found {
            warn!("Delete failed, activity not found: {}", id);
            return Err(DomainError::ActivityNotFound);
        }
        info!("Activity deleted: {}", id);
        Ok(())
    }

    /// Restore a soft-deleted record. Idempotent on already-active records.
    pub async fn restore(&self, id: &Uuid) -> Result<(), DomainError> {
        let found = self.repo.set_status(id, ActivityStatus::Active).await?;
        if !found {
            warn!("Restore failed, activity not found: {}", id);
            return Err(DomainError::ActivityNotFound);
        }
        info!("Activity restored: {}", id);
        Ok(())
    }

    /// All active records, optionally dropping those already ended or
    /// already started relative to now.
    pub async fn search(&self, filter: SearchFilter) -> Result<Vec<Activity>, DomainError> {
        let now = Utc::now();
        let activities = self.repo.find_all_active().await?;

        let results = activities
            .into_iter()
            .filter(|a| !(filter.omit_ended && a.has_ended(now)))
            .filter(|a| !(filter.omit_started && a.has_started(now)))
            .collect();
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::activity_repository::MockActivityRepository;
    use chrono::Duration;
    use mockall::predicate::eq;

    fn sample(title: &str) -> Activity {
        Activity::new(Some(title.into()), Some("desc".into()), None, None).unwrap()
    }

    #[tokio::test]
    async fn create_applies_defaults_before_persisting() {
        let mut repo = MockActivityRepository::new();
        repo.expect_create()
            .withf(|a: &Activity| {
                a.title == "Unnamed activity" && a.description == "No description offered"
            })
            .returning(|a| Ok(a.clone()));

        let service = ActivityService::new(Arc::new(repo));
        let created = service.create(NewActivity::default()).await.unwrap();
        assert_eq!(created.status, ActivityStatus::Active);
    }

    #[tokio::test]
    async fn create_rejects_inverted_dates_without_touching_store() {
        let repo = MockActivityRepository::new(); // no expectations: must not be called
        let service = ActivityService::new(Arc::new(repo));

        let input = NewActivity {
            starts_at: Some(Utc::now()),
            ends_at: Some(Utc::now() - Duration::seconds(1)),
            ..Default::default()
        };
        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, DomainError::EndBeforeStart));
    }

    #[tokio::test]
    async fn get_distinguishes_deleted_from_missing() {
        let mut deleted = sample("gone");
        deleted.status = ActivityStatus::Deleted;
        let id = deleted.id;

        let mut repo = MockActivityRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(deleted.clone())));
        repo.expect_find_by_id()
            .returning(|_| Ok(None));

        let service = ActivityService::new(Arc::new(repo));
        assert!(matches!(
            service.get(&id).await.unwrap_err(),
            DomainError::ActivityDeleted
        ));
        assert!(matches!(
            service.get(&Uuid::new_v4()).await.unwrap_err(),
            DomainError::ActivityNotFound
        ));
    }

    #[tokio::test]
    async fn edit_updates_only_supplied_fields() {
        let existing = sample("old");
        let id = existing.id;

        let mut repo = MockActivityRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update().returning(|a| Ok(a.clone()));

        let service = ActivityService::new(Arc::new(repo));
        let updated = service.edit(&id, Some("new".into()), None).await.unwrap();
        assert_eq!(updated.title, "new");
        assert_eq!(updated.description, "desc");
        assert!(updated.modified_at.is_some());
    }

    #[tokio::test]
    async fn delete_and_restore_fail_on_unknown_id() {
        let mut repo = MockActivityRepository::new();
        repo.expect_set_status().returning(|_, _| Ok(false));

        let service = ActivityService::new(Arc::new(repo));
        let id = Uuid::new_v4();
        assert!(matches!(
            service.delete(&id).await.unwrap_err(),
            DomainError::ActivityNotFound
        ));
        assert!(matches!(
            service.restore(&id).await.unwrap_err(),
            DomainError::ActivityNotFound
        ));
    }

    #[tokio::test]
    async fn search_filters_ended_and_started() {
        let now = Utc::now();
        let past = now - Duration::hours(2);
        let future = now + Duration::hours(2);

        let ended = Activity::new(Some("ended".into()), None, Some(past), Some(past)).unwrap();
        let ongoing = Activity::new(Some("ongoing".into()), None, Some(past), None).unwrap();
        let upcoming =
            Activity::new(Some("upcoming".into()), None, Some(future), Some(future)).unwrap();
        let dateless = Activity::new(Some("dateless".into()), None, None, None).unwrap();

        let all = vec![ended, ongoing, upcoming, dateless];
        let mut repo = MockActivityRepository::new();
        let fixture = all.clone();
        repo.expect_find_all_active()
            .returning(move || Ok(fixture.clone()));

        let service = ActivityService::new(Arc::new(repo));

        let unfiltered = service.search(SearchFilter::default()).await.unwrap();
        assert_eq!(unfiltered.len(), 4);

        let no_ended = service
            .search(SearchFilter { omit_ended: true, omit_started: false })
            .await
            .unwrap();
        assert_eq!(no_ended.len(), 3);
        assert!(no_ended.iter().all(|a| a.title != "ended"));

        let not_started = service
            .search(SearchFilter { omit_ended: false, omit_started: true })
            .await
            .unwrap();
        assert_eq!(not_started.len(), 2);
        assert!(not_started.iter().all(|a| a.title == "upcoming" || a.title == "dateless"));
    }
}
