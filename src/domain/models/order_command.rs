use mongodb::bson::oid::ObjectId;

/// 주문 요청의 한 라인 (도서, 수량)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedLine {
    pub book_id: ObjectId,
    pub quantity: i64,
}

/// 주문 생성 명령
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrderCommand {
    pub user_id: ObjectId,
    pub customer_id: ObjectId,
    pub lines: Vec<OrderedLine>,
}

/// 주문 헤더 수정 명령 (재고/합계는 건드리지 않음)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOrderCommand {
    pub user_id: Option<ObjectId>,
    pub customer_id: Option<ObjectId>,
}

impl UpdateOrderCommand {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.customer_id.is_none()
    }
}
