//! Order (Transaction) Entity
//!
//! 판매 거래 엔티티입니다. 주문 헤더와 주문 라인을 하나의 문서로 저장하여
//! 헤더와 라인이 항상 함께 생성되고 함께 삭제되도록 합니다.
//!
//! ## 불변 조건
//!
//! - 주문 라인은 최소 1개 이상
//! - 각 라인의 `quantity > 0`, `subtotal == unit_price * quantity`
//! - `total_price == Σ subtotal`
//!
//! 합계와 라인은 생성자([`Order::new`], [`OrderLine::new`])에서만 계산되며
//! 외부에서 직접 설정할 수 없습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::errors::{AppError, AppResult};
use super::Record;

/// 주문 라인 (주문 시점의 단가를 고정)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    book_id: ObjectId,
    quantity: i64,
    unit_price: i64,
    subtotal: i64,
}

impl OrderLine {
    /// 주문 라인 생성
    ///
    /// 수량이 0 이하이거나 소계 계산이 `i64` 범위를 넘으면 ValidationError를 반환합니다.
    pub fn new(book_id: ObjectId, quantity: i64, unit_price: i64) -> AppResult<Self> {
        if quantity <= 0 {
            return Err(AppError::ValidationError(format!(
                "quantity must be positive for book {}", book_id.to_hex()
            )));
        }

        let subtotal = unit_price.checked_mul(quantity).ok_or_else(|| {
            AppError::ValidationError(format!("subtotal overflows for book {}", book_id.to_hex()))
        })?;

        Ok(Self { book_id, quantity, unit_price, subtotal })
    }

    pub fn book_id(&self) -> ObjectId {
        self.book_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> i64 {
        self.unit_price
    }

    pub fn subtotal(&self) -> i64 {
        self.subtotal
    }
}

/// 주문 엔티티 (집합 루트)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 주문을 처리한 직원
    pub user_id: ObjectId,
    /// 구매 고객
    pub customer_id: ObjectId,
    total_price: i64,
    lines: Vec<OrderLine>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Order {
    /// 주문 생성
    ///
    /// 라인이 비어 있거나 합계가 `i64` 범위를 넘으면 ValidationError를 반환합니다.
    pub fn new(user_id: ObjectId, customer_id: ObjectId, lines: Vec<OrderLine>) -> AppResult<Self> {
        if lines.is_empty() {
            return Err(AppError::ValidationError("an order needs at least one line".to_string()));
        }

        let total_price = lines
            .iter()
            .try_fold(0i64, |total, line| total.checked_add(line.subtotal))
            .ok_or_else(|| AppError::ValidationError("order total overflows".to_string()))?;

        let now = DateTime::now();
        Ok(Self {
            id: None,
            user_id,
            customer_id,
            total_price,
            lines,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn total_price(&self) -> i64 {
        self.total_price
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
}

impl Record for Order {
    const COLLECTION: &'static str = "transactions";
    const LABEL: &'static str = "transaction";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_subtotal_is_price_times_quantity() {
        let line = OrderLine::new(ObjectId::new(), 3, 1_250).unwrap();
        assert_eq!(line.subtotal(), 3_750);
        assert_eq!(line.unit_price(), 1_250);
    }

    #[test]
    fn test_line_rejects_non_positive_quantity() {
        assert!(matches!(OrderLine::new(ObjectId::new(), 0, 100), Err(AppError::ValidationError(_))));
        assert!(matches!(OrderLine::new(ObjectId::new(), -2, 100), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_line_rejects_overflowing_subtotal() {
        let result = OrderLine::new(ObjectId::new(), 2, i64::MAX);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_order_total_is_sum_of_subtotals() {
        let lines = vec![
            OrderLine::new(ObjectId::new(), 2, 50).unwrap(),
            OrderLine::new(ObjectId::new(), 1, 30).unwrap(),
        ];
        let order = Order::new(ObjectId::new(), ObjectId::new(), lines).unwrap();

        assert_eq!(order.total_price(), 130);
        assert_eq!(
            order.total_price(),
            order.lines().iter().map(OrderLine::subtotal).sum::<i64>()
        );
    }

    #[test]
    fn test_order_without_lines_is_invalid() {
        let result = Order::new(ObjectId::new(), ObjectId::new(), Vec::new());
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_order_bson_roundtrip_keeps_lines() {
        let order = Order::new(
            ObjectId::new(),
            ObjectId::new(),
            vec![OrderLine::new(ObjectId::new(), 4, 25).unwrap()],
        )
        .unwrap();

        let document = mongodb::bson::to_document(&order).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_i64("total_price").unwrap(), 100);

        let restored: Order = mongodb::bson::from_document(document).unwrap();
        assert_eq!(restored.lines(), order.lines());
    }
}
