//! Book Entity
//!
//! 판매 도서 엔티티입니다. 가격과 재고는 주문 처리에서 사용됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use super::Record;

/// 도서 엔티티
///
/// `stock`은 주문 처리 경로에서 조건부 원자 연산으로만 감소하므로
/// 주문으로 인해 음수가 되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    /// 단가 (최소 화폐 단위)
    pub price: i64,
    pub description: String,
    pub pages: i32,
    pub isbn: String,
    pub language: String,
    /// 현재 재고 수량
    pub stock: i64,
    pub published_at: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Record for Book {
    const COLLECTION: &'static str = "books";
    const LABEL: &'static str = "book";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
