use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Body returned by create endpoints: the id of the new record.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// Body returned by delete endpoints. Deletes are idempotent, so `ok` is
/// always true whether or not the target existed.
#[derive(Debug, Serialize, ToSchema)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Error body, mirroring the `{"error": ...}` shape produced by
/// [`crate::utils::errors::AppError`].
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
