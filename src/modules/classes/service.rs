use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::model::{Class, ClassFilterParams, CreateClassDto, UpdateClassDto};
use crate::utils::errors::AppError;

/// Hard cap on list results; there is no pagination cursor.
const LIST_LIMIT: i64 = 200;

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto))]
    pub async fn create_class(db: &PgPool, dto: CreateClassDto) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"INSERT INTO classes (name, teacher_id, student_ids, created_at)
               VALUES ($1, $2, $3, COALESCE($4, now()))
               RETURNING id"#,
        )
        .bind(&dto.name)
        .bind(&dto.teacher_id)
        .bind(dto.student_ids.unwrap_or_default())
        .bind(dto.created_at)
        .fetch_one(db)
        .await?;

        Ok(id)
    }

    /// Lists classes newest first. The teacher filter wins when both filters
    /// are supplied; the student filter matches roster membership.
    #[instrument(skip(db))]
    pub async fn get_classes(
        db: &PgPool,
        filters: ClassFilterParams,
    ) -> Result<Vec<Class>, AppError> {
        const COLUMNS: &str = "id, name, teacher_id, student_ids, created_at, updated_at";

        let classes = if let Some(teacher_id) = &filters.teacher_id {
            sqlx::query_as::<_, Class>(&format!(
                "SELECT {COLUMNS} FROM classes WHERE teacher_id = $1 \
                 ORDER BY created_at DESC LIMIT $2"
            ))
            .bind(teacher_id)
            .bind(LIST_LIMIT)
            .fetch_all(db)
            .await?
        } else if let Some(student_id) = &filters.student_id {
            sqlx::query_as::<_, Class>(&format!(
                "SELECT {COLUMNS} FROM classes WHERE $1 = ANY(student_ids) \
                 ORDER BY created_at DESC LIMIT $2"
            ))
            .bind(student_id)
            .bind(LIST_LIMIT)
            .fetch_all(db)
            .await?
        } else {
            sqlx::query_as::<_, Class>(&format!(
                "SELECT {COLUMNS} FROM classes ORDER BY created_at DESC LIMIT $1"
            ))
            .bind(LIST_LIMIT)
            .fetch_all(db)
            .await?
        };

        Ok(classes)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_class(
        db: &PgPool,
        id: Uuid,
        dto: UpdateClassDto,
    ) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(
            r#"UPDATE classes
               SET name = $2, teacher_id = $3, student_ids = $4, updated_at = now()
               WHERE id = $1
               RETURNING id, name, teacher_id, student_ids, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.teacher_id)
        .bind(&dto.student_ids)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))?;

        Ok(class)
    }

    /// Deletes by id. Idempotent: a missing row is not an error, and the
    /// class's sessions are left in place (no cascade).
    #[instrument(skip(db))]
    pub async fn delete_class(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(())
    }
}
