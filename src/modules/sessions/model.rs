use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A session: a single scheduled occurrence belonging to a class, with a
/// time window and an optional access code.
///
/// `start_at`/`end_at` are kept as ISO-8601 strings rather than timestamps;
/// the wire contract treats them as opaque and imposes no ordering check
/// between the two.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    /// References `Class.id` logically; existence is not enforced.
    pub class_id: String,
    pub name: String,
    pub start_at: String,
    pub end_at: String,
    pub code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionDto {
    #[validate(length(min = 1, message = "classId must not be empty"))]
    pub class_id: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "startAt must not be empty"))]
    pub start_at: String,
    #[validate(length(min = 1, message = "endAt must not be empty"))]
    pub end_at: String,
    pub code: Option<String>,
}

/// Full-field replacement; omitting `code` clears it.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionDto {
    #[validate(length(min = 1, message = "classId must not be empty"))]
    pub class_id: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "startAt must not be empty"))]
    pub start_at: String,
    #[validate(length(min = 1, message = "endAt must not be empty"))]
    pub end_at: String,
    pub code: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SessionFilterParams {
    /// Filter by parent class.
    pub class_id: Option<String>,
}
