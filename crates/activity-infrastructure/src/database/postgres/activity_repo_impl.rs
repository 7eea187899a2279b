//! PostgreSQL activity repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use activity_core::domain::{Activity, ActivityStatus};
use activity_core::error::DomainError;
use activity_core::repositories::ActivityRepository;

pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct ActivityRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity {
            id: row.id,
            title: row.title,
            description: row.description,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            status: ActivityStatus::from_str(&row.status).unwrap_or_default(),
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Activity>, DomainError> {
        let row: Option<ActivityRow> = sqlx::query_as(
            r#"
            SELECT
                id, title, description, starts_at, ends_at,
                status, created_at, modified_at
            FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding activity by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all_active(&self) -> Result<Vec<Activity>, DomainError> {
        let rows: Vec<ActivityRow> = sqlx::query_as(
            r#"
            SELECT
                id, title, description, starts_at, ends_at,
                status, created_at, modified_at
            FROM activities
            WHERE status = 'active'
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing activities: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create(&self, activity: &Activity) -> Result<Activity, DomainError> {
        let row: ActivityRow = sqlx::query_as(
            r#"
            INSERT INTO activities (
                id, title, description, starts_at, ends_at,
                status, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id, title, description, starts_at, ends_at,
                status, created_at, modified_at
            "#,
        )
        .bind(activity.id)
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(activity.starts_at)
        .bind(activity.ends_at)
        .bind(activity.status.as_str())
        .bind(activity.created_at)
        .bind(activity.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating activity: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Activity persisted: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, activity: &Activity) -> Result<Activity, DomainError> {
        let row: ActivityRow = sqlx::query_as(
            r#"
            UPDATE activities
            SET
                title = $2,
                description = $3,
                starts_at = $4,
                ends_at = $5,
                status = $6,
                modified_at = $7
            WHERE id = $1
            RETURNING
                id, title, description, starts_at, ends_at,
                status, created_at, modified_at
            "#,
        )
        .bind(activity.id)
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(activity.starts_at)
        .bind(activity.ends_at)
        .bind(activity.status.as_str())
        .bind(activity.modified_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating activity: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn set_status(&self, id: &Uuid, status: ActivityStatus) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE activities
            SET status = $2, modified_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error setting activity status: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected() > 0)
    }
}
