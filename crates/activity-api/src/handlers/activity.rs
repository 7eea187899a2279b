//! Activity HTTP handlers (create, get, edit, delete, restore, search)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use activity_core::domain::{Activity, ActivityStatus};
use activity_core::error::DomainError;
use activity_core::services::{NewActivity, SearchFilter};

use crate::error::ApiError;
use crate::state::AppState;

/// Create request payload; all fields optional, blanks get defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date_time: Option<DateTime<Utc>>,
    pub end_date_time: Option<DateTime<Utc>>,
}

/// Edit request payload; only title and description are editable.
#[derive(Debug, Deserialize)]
pub struct EditActivityRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub omit_ended: bool,
    pub omit_started: bool,
}

/// Activity DTO for responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<Utc>>,
    pub status: ActivityStatus,
}

impl From<Activity> for ActivityDto {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            title: activity.title,
            description: activity.description,
            start_date_time: activity.starts_at,
            end_date_time: activity.ends_at,
            status: activity.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub activity: ActivityDto,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<ActivityDto>,
}

/// Path ids arrive as raw strings; anything that is not a UUID counts
/// as a store-level failure on the wire (500, not 404).
fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| DomainError::MalformedId(id.to_string()).into())
}

/// POST /api/activity/create
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateActivityRequest>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let activity = state
        .activities
        .create(NewActivity {
            title: payload.title,
            description: payload.description,
            starts_at: payload.start_date_time,
            ends_at: payload.end_date_time,
        })
        .await?;

    Ok(Json(ActivityResponse {
        activity: activity.into(),
    }))
}

/// GET /api/activity/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let id = parse_id(&id)?;
    let activity = state.activities.get(&id).await?;
    Ok(Json(ActivityResponse {
        activity: activity.into(),
    }))
}

/// POST /api/activity/edit/{id}
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EditActivityRequest>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let id = parse_id(&id)?;
    let activity = state
        .activities
        .edit(&id, payload.title, payload.description)
        .await?;
    Ok(Json(ActivityResponse {
        activity: activity.into(),
    }))
}

/// POST /api/activity/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.activities.delete(&id).await?;
    Ok(StatusCode::OK)
}

/// POST /api/activity/restore/{id}
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.activities.restore(&id).await?;
    Ok(StatusCode::OK)
}

/// GET /api/activity/search?omitEnded=&omitStarted=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = state
        .activities
        .search(SearchFilter {
            omit_ended: query.omit_ended,
            omit_started: query.omit_started,
        })
        .await?;

    Ok(Json(SearchResponse {
        results: results.into_iter().map(|a| a.into()).collect(),
    }))
}
