use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A class: a recurring group taught by one teacher with an enrolled
/// student roster.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    pub teacher_id: String,
    pub student_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "teacherId must not be empty"))]
    pub teacher_id: String,
    /// Initial roster; defaults to empty.
    pub student_ids: Option<Vec<String>>,
    /// Client-overridable creation time; defaults to now.
    pub created_at: Option<DateTime<Utc>>,
}

/// Full-field replacement: every writable field must be supplied.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "teacherId must not be empty"))]
    pub teacher_id: String,
    pub student_ids: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ClassFilterParams {
    /// Filter by owning teacher. Wins over `studentId` when both are given.
    pub teacher_id: Option<String>,
    /// Filter by roster membership.
    pub student_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_serializes_with_camel_case_keys() {
        let class = Class {
            id: Uuid::nil(),
            name: "Math 101".to_string(),
            teacher_id: "t1".to_string(),
            student_ids: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&class).unwrap();
        assert_eq!(json["teacherId"], "t1");
        assert_eq!(json["studentIds"], serde_json::json!([]));
        assert!(json.get("teacher_id").is_none());
    }

    #[test]
    fn create_dto_accepts_minimal_payload() {
        let dto: CreateClassDto =
            serde_json::from_str(r#"{"name":"Math 101","teacherId":"t1"}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.student_ids.is_none());
        assert!(dto.created_at.is_none());
    }

    #[test]
    fn create_dto_rejects_empty_name() {
        let dto: CreateClassDto =
            serde_json::from_str(r#"{"name":"","teacherId":"t1"}"#).unwrap();
        assert!(dto.validate().is_err());
    }
}
