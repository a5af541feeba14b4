//! 범용 레코드 저장소
//!
//! 도서, 고객, 사용자, 역할, 거래는 모두 같은 CRUD 계약을 따릅니다.
//! [`RecordStore`]가 그 계약이며, 운영 환경에서는 [`MongoRecordStore`]가 구현합니다.
//!
//! ```rust,ignore
//! let books: Arc<dyn RecordStore<Book>> = Arc::new(MongoRecordStore::<Book>::new(&database));
//! let page = books.fetch(&RecordFilter::contains("author", "herbert"), PageRequest::default()).await?;
//! ```

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use crate::domain::entities::Record;
use crate::domain::models::pagination::{Page, PageRequest};
use crate::errors::AppResult;
use crate::utils::string_utils::escape_regex;

pub mod mongo_record_store;

pub use mongo_record_store::MongoRecordStore;

/// 목록/건수 조회 필터
#[derive(Debug, Clone, PartialEq)]
pub enum RecordFilter {
    /// 전체
    All,
    /// 문자열 필드 부분 일치 (대소문자 무시)
    Contains { field: String, value: String },
    /// 필드 값 완전 일치
    Equals { field: String, value: Bson },
}

impl RecordFilter {
    pub fn contains(field: &str, value: &str) -> Self {
        RecordFilter::Contains {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn equals(field: &str, value: impl Into<Bson>) -> Self {
        RecordFilter::Equals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    /// MongoDB 쿼리 문서로 변환합니다.
    pub fn to_document(&self) -> Document {
        match self {
            RecordFilter::All => Document::new(),
            RecordFilter::Contains { field, value } => {
                let mut filter = Document::new();
                filter.insert(field.as_str(), doc! { "$regex": escape_regex(value), "$options": "i" });
                filter
            }
            RecordFilter::Equals { field, value } => {
                let mut filter = Document::new();
                filter.insert(field.as_str(), value.clone());
                filter
            }
        }
    }

    /// 직렬화된 레코드가 필터에 맞는지 확인합니다 (메모리 저장소용).
    #[cfg(test)]
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            RecordFilter::All => true,
            RecordFilter::Contains { field, value } => document
                .get_str(field)
                .map(|text| text.to_lowercase().contains(&value.to_lowercase()))
                .unwrap_or(false),
            RecordFilter::Equals { field, value } => document.get(field) == Some(value),
        }
    }
}

/// 범용 CRUD 저장소 계약
///
/// - `fetch`는 `created_at` 내림차순(최신 우선)으로 한 페이지를 반환합니다.
/// - `update`는 `changes`를 `$set`으로 적용하고 `updated_at`을 갱신합니다.
/// - `update`/`delete`는 대상이 없으면 `None`을 반환합니다.
/// - `delete`는 삭제된 레코드를 원자적으로 꺼내 반환합니다.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    async fn fetch(&self, filter: &RecordFilter, page: PageRequest) -> AppResult<Page<T>>;

    async fn get_by_id(&self, id: &ObjectId) -> AppResult<Option<T>>;

    async fn count(&self, filter: &RecordFilter) -> AppResult<u64>;

    async fn store(&self, record: T) -> AppResult<T>;

    async fn update(&self, id: &ObjectId, changes: Document) -> AppResult<Option<T>>;

    async fn delete(&self, id: &ObjectId) -> AppResult<Option<T>>;
}
