//! Activity domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use activity_shared::constants::{DEFAULT_ACTIVITY_DESCRIPTION, DEFAULT_ACTIVITY_TITLE};

use crate::error::DomainError;

/// Activity lifecycle status. Soft delete flips the status; the row
/// itself is never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Active,
    Deleted,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Active => "active",
            ActivityStatus::Deleted => "deleted",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ActivityStatus::Active),
            "deleted" => Some(ActivityStatus::Deleted),
            _ => None,
        }
    }
}

impl Default for ActivityStatus {
    fn default() -> Self {
        ActivityStatus::Active
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub description: String,

    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,

    pub status: ActivityStatus,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Activity {
    /// Build a new active record, substituting defaults for blank
    /// title/description and enforcing date ordering.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        if let (Some(start), Some(end)) = (starts_at, ends_at) {
            if end < start {
                return Err(DomainError::EndBeforeStart);
            }
        }

        let title = match title {
            Some(t) if !t.trim().is_empty() => t,
            _ => DEFAULT_ACTIVITY_TITLE.to_string(),
        };
        let description = match description {
            Some(d) if !d.trim().is_empty() => d,
            _ => DEFAULT_ACTIVITY_DESCRIPTION.to_string(),
        };

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            starts_at,
            ends_at,
            status: ActivityStatus::Active,
            created_at: Utc::now(),
            modified_at: None,
        })
    }

    pub fn is_deleted(&self) -> bool {
        self.status == ActivityStatus::Deleted
    }

    /// An activity with no end date is ongoing.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.ends_at.map(|end| end < now).unwrap_or(false)
    }

    /// An activity with no start date has not started.
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.starts_at.map(|start| start < now).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn blank_fields_get_defaults() {
        let activity = Activity::new(None, None, None, None).unwrap();
        assert_eq!(activity.title, "Unnamed activity");
        assert_eq!(activity.description, "No description offered");
        assert_eq!(activity.status, ActivityStatus::Active);

        let activity = Activity::new(Some("  ".into()), Some("".into()), None, None).unwrap();
        assert_eq!(activity.title, "Unnamed activity");
        assert_eq!(activity.description, "No description offered");
    }

    #[test]
    fn supplied_fields_are_kept() {
        let activity = Activity::new(
            Some("testtitle".into()),
            Some("testdescription".into()),
            None,
            None,
        )
        .unwrap();
        assert_eq!(activity.title, "testtitle");
        assert_eq!(activity.description, "testdescription");
    }

    #[test]
    fn end_before_start_is_rejected() {
        let start = Utc.timestamp_millis_opt(3).unwrap();
        let end = Utc.timestamp_millis_opt(2).unwrap();
        let err = Activity::new(None, None, Some(start), Some(end)).unwrap_err();
        assert_eq!(err.to_string(), "endDateTime is less than startDateTime");
    }

    #[test]
    fn equal_dates_are_allowed() {
        let at = Utc.timestamp_millis_opt(5).unwrap();
        assert!(Activity::new(None, None, Some(at), Some(at)).is_ok());
    }

    #[test]
    fn missing_dates_mean_ongoing_and_not_started() {
        let now = Utc::now();
        let activity = Activity::new(None, None, None, None).unwrap();
        assert!(!activity.has_ended(now));
        assert!(!activity.has_started(now));

        let past = now - chrono::Duration::hours(1);
        let ended = Activity::new(None, None, Some(past), Some(past)).unwrap();
        assert!(ended.has_ended(now));
        assert!(ended.has_started(now));
    }
}
