//! User Entity Implementation
//!
//! 매장 직원 계정 엔티티입니다. 로그인 주체이며 하나의 역할을 가집니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use super::Record;

/// 사용자 엔티티
///
/// `password_hash`는 bcrypt 해시이며 응답 DTO로 변환할 때 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름 (토큰의 `user_name` 클레임)
    pub name: String,
    /// 로그인 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 소속 역할 ID
    pub role_id: ObjectId,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성 (비밀번호는 이미 해시된 상태여야 함)
    pub fn new(name: String, email: String, password_hash: String, role_id: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash,
            role_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "user";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
