use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::sessions::model::{
    CreateSessionDto, Session, SessionFilterParams, UpdateSessionDto,
};
use crate::modules::sessions::service::SessionService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::responses::{AckResponse, CreatedResponse, ErrorResponse};
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/sessions",
    params(SessionFilterParams),
    responses(
        (status = 200, description = "List of sessions ordered by startAt, capped at 200", body = Vec<Session>)
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_sessions(
    State(state): State<AppState>,
    Query(filters): Query<SessionFilterParams>,
) -> Result<Json<Vec<Session>>, AppError> {
    let sessions = SessionService::get_sessions(&state.db, filters).await?;

    Ok(Json(sessions))
}

#[utoipa::path(
    post,
    path = "/sessions",
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Session created successfully", body = CreatedResponse),
        (status = 400, description = "Missing required field"),
        (status = 422, description = "Invalid field value")
    ),
    tag = "Sessions"
)]
#[instrument(skip(state, dto))]
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSessionDto>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = SessionService::create_session(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

#[utoipa::path(
    put,
    path = "/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    request_body = UpdateSessionDto,
    responses(
        (status = 200, description = "Session updated successfully", body = Session),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    tag = "Sessions"
)]
#[instrument(skip(state, dto))]
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateSessionDto>,
) -> Result<Json<Session>, AppError> {
    let session = SessionService::update_session(&state.db, id, dto).await?;

    Ok(Json(session))
}

#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session deleted (idempotent)", body = AckResponse)
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AckResponse>, AppError> {
    SessionService::delete_session(&state.db, id).await?;

    Ok(Json(AckResponse::ok()))
}
