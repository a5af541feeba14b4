//! MongoDB 기반 범용 레코드 저장소

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use crate::db::Database;
use crate::domain::entities::Record;
use crate::domain::models::pagination::{Page, PageRequest};
use crate::errors::{AppError, AppResult};
use crate::repositories::map_write_error;
use super::{RecordFilter, RecordStore};

/// 엔티티 타입별 MongoDB 컬렉션 저장소
///
/// 컬렉션 이름은 [`Record::COLLECTION`]에서 가져옵니다.
pub struct MongoRecordStore<T: Record> {
    collection: Collection<T>,
}

impl<T: Record> MongoRecordStore<T> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<T>(T::COLLECTION),
        }
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MongoRecordStore<T> {
    async fn fetch(&self, filter: &RecordFilter, page: PageRequest) -> AppResult<Page<T>> {
        // 다음 페이지 존재 여부 확인을 위해 한 건 더 조회
        let limit = i64::try_from(page.size.saturating_add(1)).unwrap_or(i64::MAX);

        let items: Vec<T> = self.collection
            .find(filter.to_document())
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(page.offset())
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok(Page::from_overfetch(items, page.size))
    }

    async fn get_by_id(&self, id: &ObjectId) -> AppResult<Option<T>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn count(&self, filter: &RecordFilter) -> AppResult<u64> {
        Ok(self.collection.count_documents(filter.to_document()).await?)
    }

    async fn store(&self, mut record: T) -> AppResult<T> {
        let result = self.collection
            .insert_one(&record)
            .await
            .map_err(|e| map_write_error(e, T::LABEL))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(format!("{} insert returned a non-ObjectId key", T::LABEL))
        })?;
        record.set_id(id);

        log::debug!("📝 {} 저장 완료: {}", T::LABEL, id.to_hex());
        Ok(record)
    }

    async fn update(&self, id: &ObjectId, mut changes: Document) -> AppResult<Option<T>> {
        changes.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": changes })
            .with_options(options)
            .await
            .map_err(|e| map_write_error(e, T::LABEL))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<Option<T>> {
        Ok(self.collection.find_one_and_delete(doc! { "_id": *id }).await?)
    }
}
