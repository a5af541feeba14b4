use std::sync::Arc;
use mongodb::bson::{oid::ObjectId, Document};
use crate::domain::entities::Record;
use crate::domain::models::pagination::{Page, PageRequest};
use crate::errors::{AppError, AppResult};
use crate::repositories::records::{RecordFilter, RecordStore};

/// 레코드 저장소 위의 얇은 서비스
///
/// 저장소의 `Option` 결과를 `NotFound` 에러로 바꾸고, 목록 조회 시 전체 건수를 함께 돌려줍니다.
#[derive(Clone)]
pub struct RecordService<T: Record> {
    store: Arc<dyn RecordStore<T>>,
}

impl<T: Record> RecordService<T> {
    pub fn new(store: Arc<dyn RecordStore<T>>) -> Self {
        Self { store }
    }

    /// 필터에 맞는 한 페이지와 전체 건수
    pub async fn fetch(&self, filter: &RecordFilter, page: PageRequest) -> AppResult<(Page<T>, u64)> {
        let items = self.store.fetch(filter, page).await?;
        let total = self.store.count(filter).await?;
        Ok((items, total))
    }

    pub async fn get(&self, id: &ObjectId) -> AppResult<T> {
        self.store.get_by_id(id).await?.ok_or_else(|| not_found::<T>(id))
    }

    pub async fn find(&self, id: &ObjectId) -> AppResult<Option<T>> {
        self.store.get_by_id(id).await
    }

    pub async fn create(&self, record: T) -> AppResult<T> {
        let created = self.store.store(record).await?;
        log::info!("✅ {} 생성: {}", T::LABEL, created.id_string());
        Ok(created)
    }

    pub async fn update(&self, id: &ObjectId, changes: Document) -> AppResult<T> {
        self.store.update(id, changes).await?.ok_or_else(|| not_found::<T>(id))
    }

    pub async fn delete(&self, id: &ObjectId) -> AppResult<T> {
        let deleted = self.store.delete(id).await?.ok_or_else(|| not_found::<T>(id))?;
        log::info!("🗑️ {} 삭제: {}", T::LABEL, id.to_hex());
        Ok(deleted)
    }
}

fn not_found<T: Record>(id: &ObjectId) -> AppError {
    AppError::NotFound(format!("{} {} not found", T::LABEL, id.to_hex()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use crate::domain::entities::Role;
    use crate::repositories::memory::InMemoryRecordStore;

    fn service() -> RecordService<Role> {
        RecordService::new(Arc::new(InMemoryRecordStore::<Role>::new()))
    }

    #[actix_web::test]
    async fn test_missing_record_is_not_found() {
        let service = service();
        let id = ObjectId::new();

        let expected = AppError::NotFound(format!("role {} not found", id.to_hex()));
        assert_eq!(service.get(&id).await.unwrap_err(), expected);
        assert_eq!(service.update(&id, doc! { "name": "x" }).await.unwrap_err(), expected);
        assert_eq!(service.delete(&id).await.unwrap_err(), expected);
    }

    #[actix_web::test]
    async fn test_fetch_returns_newest_first_with_total() {
        let service = service();
        service.create(Role::new("admin")).await.unwrap();
        service.create(Role::new("employee")).await.unwrap();

        let (page, total) = service.fetch(&RecordFilter::All, PageRequest::new(1, 1)).await.unwrap();

        assert_eq!(total, 2);
        assert_eq!(page.items[0].name, "employee");
        assert!(page.has_next);

        let (filtered, filtered_total) = service
            .fetch(&RecordFilter::contains("name", "ADM"), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(filtered_total, 1);
        assert_eq!(filtered.items[0].name, "admin");
    }

    #[actix_web::test]
    async fn test_update_applies_changes() {
        let service = service();
        let role = service.create(Role::new("employee")).await.unwrap();

        let updated = service.update(&role.id.unwrap(), doc! { "name": "clerk" }).await.unwrap();
        assert_eq!(updated.name, "clerk");
    }
}
