use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use super::Record;

/// 관리자 역할 이름
pub const ADMIN: &str = "admin";
/// 직원 역할 이름
pub const EMPLOYEE: &str = "employee";

/// 역할 엔티티
///
/// 역할 이름은 토큰의 `role_name` 클레임으로 그대로 들어가며,
/// 라우트 권한 검사는 이 문자열의 완전 일치로 이루어집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Role {
    pub fn new(name: &str) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Role {
    const COLLECTION: &'static str = "roles";
    const LABEL: &'static str = "role";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
