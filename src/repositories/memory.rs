//! 테스트용 메모리 저장소
//!
//! MongoDB 없이 서비스 계층을 검증하기 위한 구현체입니다.
//! 정렬은 삽입 역순(최신 우선)이며 unique 제약은 검사하지 않습니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, DateTime, Document};
use crate::domain::entities::Record;
use crate::domain::models::pagination::{Page, PageRequest};
use crate::errors::{AppError, AppResult};
use super::inventory::{InventoryRepository, Reservation};
use super::records::{RecordFilter, RecordStore};

pub struct InMemoryRecordStore<T: Record> {
    records: Mutex<Vec<T>>,
    fail_writes: AtomicBool,
}

impl<T: Record> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// 이후 `store` 호출이 DatabaseError로 실패하도록 설정
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn matching(&self, filter: &RecordFilter) -> Vec<T> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|record| {
                bson::to_document(*record)
                    .map(|document| filter.matches(&document))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryRecordStore<T> {
    async fn fetch(&self, filter: &RecordFilter, page: PageRequest) -> AppResult<Page<T>> {
        let items = self
            .matching(filter)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize + 1)
            .collect();

        Ok(Page::from_overfetch(items, page.size))
    }

    async fn get_by_id(&self, id: &ObjectId) -> AppResult<Option<T>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|record| record.id() == Some(*id)).cloned())
    }

    async fn count(&self, filter: &RecordFilter) -> AppResult<u64> {
        Ok(self.matching(filter).len() as u64)
    }

    async fn store(&self, mut record: T) -> AppResult<T> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("write failed".to_string()));
        }

        record.set_id(ObjectId::new());
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &ObjectId, changes: Document) -> AppResult<Option<T>> {
        let mut records = self.records.lock().unwrap();
        let Some(slot) = records.iter_mut().find(|record| record.id() == Some(*id)) else {
            return Ok(None);
        };

        let mut document = bson::to_document(&*slot)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        for (key, value) in changes {
            document.insert(key, value);
        }
        document.insert("updated_at", DateTime::now());

        *slot = bson::from_document(document)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<Option<T>> {
        let mut records = self.records.lock().unwrap();
        let position = records.iter().position(|record| record.id() == Some(*id));
        Ok(position.map(|index| records.remove(index)))
    }
}

/// 도서별 (단가, 재고)를 보관하는 재고 저장소
pub struct InMemoryInventory {
    books: Mutex<HashMap<ObjectId, (i64, i64)>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }

    /// 도서를 등록하고 ID를 반환합니다.
    pub fn add_book(&self, price: i64, stock: i64) -> ObjectId {
        let id = ObjectId::new();
        self.books.lock().unwrap().insert(id, (price, stock));
        id
    }

    pub fn stock_of(&self, id: &ObjectId) -> Option<i64> {
        self.books.lock().unwrap().get(id).map(|(_, stock)| *stock)
    }

    pub fn remove(&self, id: &ObjectId) {
        self.books.lock().unwrap().remove(id);
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventory {
    async fn reserve(&self, book_id: &ObjectId, quantity: i64) -> AppResult<Reservation> {
        let mut books = self.books.lock().unwrap();
        match books.get_mut(book_id) {
            Some((price, stock)) if *stock >= quantity => {
                *stock -= quantity;
                Ok(Reservation::Reserved { unit_price: *price })
            }
            Some((_, stock)) => Ok(Reservation::Insufficient { available: *stock }),
            None => Ok(Reservation::Missing),
        }
    }

    async fn release(&self, book_id: &ObjectId, quantity: i64) -> AppResult<bool> {
        let mut books = self.books.lock().unwrap();
        match books.get_mut(book_id) {
            Some((_, stock)) => {
                *stock += quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
