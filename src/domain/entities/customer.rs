use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use super::Record;

/// 고객 엔티티 (이메일 unique)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Record for Customer {
    const COLLECTION: &'static str = "customers";
    const LABEL: &'static str = "customer";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
