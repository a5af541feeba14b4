//! 재고 리포지토리
//!
//! 주문 처리 경로에서 도서 재고를 예약(차감)하고 반환(복원)합니다.
//! 예약은 "재고가 충분할 때만 차감"하는 단일 조건부 연산이어야 하며,
//! 이 원자성 덕분에 동시에 들어온 주문이 같은 재고를 이중으로 차감하지 않습니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::errors::AppResult;

pub mod mongo_inventory;

pub use mongo_inventory::MongoInventoryRepository;

/// 재고 예약 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reservation {
    /// 차감 완료. 예약 시점의 단가를 함께 반환
    Reserved { unit_price: i64 },
    /// 재고 부족 (차감하지 않음)
    Insufficient { available: i64 },
    /// 도서 없음
    Missing,
}

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// `stock >= quantity`일 때만 `stock -= quantity`를 원자적으로 수행합니다.
    async fn reserve(&self, book_id: &ObjectId, quantity: i64) -> AppResult<Reservation>;

    /// 예약했던 수량을 되돌립니다. 도서가 없으면 `false`를 반환합니다.
    async fn release(&self, book_id: &ObjectId, quantity: i64) -> AppResult<bool>;
}
