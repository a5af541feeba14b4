//! 사용자 요청/응답 DTO
//!
//! 비밀번호는 요청에서만 평문으로 받고, 해시는 응답에 포함하지 않습니다.

use chrono::Utc;
use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::common::to_utc;
use crate::domain::entities::{Record, User};
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::validate_required_string;

/// 사용자 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 5, max = 72, message = "password must be 5-72 characters"))]
    pub password: String,

    /// 역할 ID (ObjectId 16진수)
    pub role_id: String,
}

/// 사용자 수정 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub name: Option<String>,

    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,

    #[validate(length(min = 5, max = 72, message = "password must be 5-72 characters"))]
    pub password: Option<String>,

    pub role_id: Option<String>,
}

impl UpdateUserRequest {
    /// 변경 문서를 만듭니다.
    ///
    /// 비밀번호 해시와 역할 ID는 서비스 계층에서 검증/해싱한 값을 받습니다.
    pub fn into_changes(
        self,
        password_hash: Option<String>,
        role_id: Option<ObjectId>,
    ) -> AppResult<Document> {
        let mut changes = Document::new();

        if let Some(name) = self.name {
            changes.insert("name", validate_required_string(&name, "name")?);
        }
        if let Some(email) = self.email {
            changes.insert("email", email.trim().to_lowercase());
        }
        if let Some(password_hash) = password_hash {
            changes.insert("password_hash", password_hash);
        }
        if let Some(role_id) = role_id {
            changes.insert("role_id", role_id);
        }

        if changes.is_empty() {
            return Err(AppError::ValidationError("no fields to update".to_string()));
        }
        Ok(changes)
    }
}

/// 사용자 응답 DTO (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role_id: String,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string();
        let User {
            name,
            email,
            role_id,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            name,
            email,
            role_id: role_id.to_hex(),
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new(
            "Alice".to_string(),
            "alice@mail.com".to_string(),
            "$2b$04$secret".to_string(),
            ObjectId::new(),
        );
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "alice@mail.com");
    }

    #[test]
    fn test_update_changes_use_prepared_hash() {
        let request = UpdateUserRequest {
            password: Some("new-password".to_string()),
            ..Default::default()
        };
        let changes = request.into_changes(Some("$2b$04$hash".to_string()), None).unwrap();

        assert_eq!(changes.get_str("password_hash").unwrap(), "$2b$04$hash");
        assert!(!changes.contains_key("password"));
    }
}
