use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::sessions::model::{
    CreateSessionDto, Session, SessionFilterParams, UpdateSessionDto,
};
use crate::utils::errors::AppError;

/// Hard cap on list results; there is no pagination cursor.
const LIST_LIMIT: i64 = 200;

pub struct SessionService;

impl SessionService {
    /// Inserts a session. The `class_id` is taken as-is; there is no check
    /// that it references an existing class.
    #[instrument(skip(db, dto))]
    pub async fn create_session(db: &PgPool, dto: CreateSessionDto) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"INSERT INTO sessions (class_id, name, start_at, end_at, code)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id"#,
        )
        .bind(&dto.class_id)
        .bind(&dto.name)
        .bind(&dto.start_at)
        .bind(&dto.end_at)
        .bind(&dto.code)
        .fetch_one(db)
        .await?;

        Ok(id)
    }

    /// Lists sessions ordered by `start_at` ascending (lexicographic order on
    /// ISO-8601 strings equals chronological order).
    #[instrument(skip(db))]
    pub async fn get_sessions(
        db: &PgPool,
        filters: SessionFilterParams,
    ) -> Result<Vec<Session>, AppError> {
        const COLUMNS: &str = "id, class_id, name, start_at, end_at, code, created_at, updated_at";

        let sessions = if let Some(class_id) = &filters.class_id {
            sqlx::query_as::<_, Session>(&format!(
                "SELECT {COLUMNS} FROM sessions WHERE class_id = $1 \
                 ORDER BY start_at ASC LIMIT $2"
            ))
            .bind(class_id)
            .bind(LIST_LIMIT)
            .fetch_all(db)
            .await?
        } else {
            sqlx::query_as::<_, Session>(&format!(
                "SELECT {COLUMNS} FROM sessions ORDER BY start_at ASC LIMIT $1"
            ))
            .bind(LIST_LIMIT)
            .fetch_all(db)
            .await?
        };

        Ok(sessions)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_session(
        db: &PgPool,
        id: Uuid,
        dto: UpdateSessionDto,
    ) -> Result<Session, AppError> {
        let session = sqlx::query_as::<_, Session>(
            r#"UPDATE sessions
               SET class_id = $2, name = $3, start_at = $4, end_at = $5, code = $6,
                   updated_at = now()
               WHERE id = $1
               RETURNING id, class_id, name, start_at, end_at, code, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&dto.class_id)
        .bind(&dto.name)
        .bind(&dto.start_at)
        .bind(&dto.end_at)
        .bind(&dto.code)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Session not found")))?;

        Ok(session)
    }

    /// Deletes by id. Idempotent: a missing row is not an error.
    #[instrument(skip(db))]
    pub async fn delete_session(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(())
    }
}
