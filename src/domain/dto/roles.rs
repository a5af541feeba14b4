use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::domain::dto::common::to_utc;
use crate::domain::entities::{Record, Role};

/// 역할 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id_string(),
            name: role.name,
            created_at: to_utc(role.created_at),
            updated_at: to_utc(role.updated_at),
        }
    }
}
