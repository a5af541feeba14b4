use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use crate::db::Database;
use crate::domain::entities::{Book, Record};
use crate::errors::AppResult;
use super::{InventoryRepository, Reservation};

/// `books` 컬렉션 기반 재고 리포지토리
///
/// 예약은 `find_one_and_update({_id, stock: {$gte: qty}}, {$inc: {stock: -qty}})`
/// 한 번으로 처리되므로 서버 측에서 비교와 차감이 원자적으로 일어납니다.
pub struct MongoInventoryRepository {
    books: Collection<Book>,
}

impl MongoInventoryRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            books: database.get_database().collection::<Book>(Book::COLLECTION),
        }
    }
}

#[async_trait]
impl InventoryRepository for MongoInventoryRepository {
    async fn reserve(&self, book_id: &ObjectId, quantity: i64) -> AppResult<Reservation> {
        let book_id = *book_id;
        let decrement = -quantity;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let reserved = self.books
            .find_one_and_update(
                doc! { "_id": book_id, "stock": { "$gte": quantity } },
                doc! {
                    "$inc": { "stock": decrement },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(options)
            .await?;

        if let Some(book) = reserved {
            return Ok(Reservation::Reserved { unit_price: book.price });
        }

        // 조건 불일치: 도서가 없는지, 재고가 부족한지 구분
        match self.books.find_one(doc! { "_id": book_id }).await? {
            Some(book) => Ok(Reservation::Insufficient { available: book.stock }),
            None => Ok(Reservation::Missing),
        }
    }

    async fn release(&self, book_id: &ObjectId, quantity: i64) -> AppResult<bool> {
        let result = self.books
            .update_one(
                doc! { "_id": *book_id },
                doc! {
                    "$inc": { "stock": quantity },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}
