//! # 주문 서비스 구현
//!
//! 주문 생성은 다음 순서로 진행됩니다.
//!
//! ```text
//! 라인 검증 ─▶ 고객 확인 ─▶ [분리된 태스크]
//!                              ├─ 라인별 재고 예약 (조건부 차감, 입력 순서대로)
//!                              │    └─ 실패 시: 이미 예약한 라인을 역순으로 반환 후 에러
//!                              └─ 주문 저장
//!                                   └─ 실패 시: 모든 예약 반환 후 에러
//! ```
//!
//! 예약부터 저장까지는 `tokio::spawn`으로 분리된 태스크에서 끝까지 실행됩니다.
//! 클라이언트 연결이 끊겨 핸들러 future가 drop되어도 재고만 차감된 채로
//! 남는 일이 없습니다.

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId};
use crate::domain::entities::{Customer, Order, OrderLine};
use crate::domain::models::order_command::{OrderedLine, PlaceOrderCommand, UpdateOrderCommand};
use crate::domain::models::pagination::{Page, PageRequest};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::inventory::{InventoryRepository, Reservation};
use crate::repositories::records::{RecordFilter, RecordStore};

/// 주문/재고 정합성 서비스
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn RecordStore<Order>>,
    customers: Arc<dyn RecordStore<Customer>>,
    inventory: Arc<dyn InventoryRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn RecordStore<Order>>,
        customers: Arc<dyn RecordStore<Customer>>,
        inventory: Arc<dyn InventoryRepository>,
    ) -> Self {
        Self {
            orders,
            customers,
            inventory,
        }
    }

    /// 재고를 예약하고 주문을 저장합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 라인이 없거나 수량이 0 이하, 금액 overflow
    /// * `NotFound` - 고객 또는 도서가 없음
    /// * `InsufficientStock` - 재고 부족 (이미 예약한 라인은 반환됨)
    pub async fn place_order(&self, command: PlaceOrderCommand) -> AppResult<Order> {
        validate_lines(&command.lines)?;
        self.ensure_customer(&command.customer_id).await?;

        let orders = self.orders.clone();
        let inventory = self.inventory.clone();

        tokio::spawn(async move { reserve_and_store(orders, inventory, command).await })
            .await
            .context("order placement task failed")?
    }

    /// 주문 헤더(처리 직원, 고객)만 수정합니다. 재고와 합계는 변경하지 않습니다.
    pub async fn update_order(&self, id: &ObjectId, command: UpdateOrderCommand) -> AppResult<Order> {
        if command.is_empty() {
            return Err(AppError::ValidationError("nothing to update".to_string()));
        }

        let mut changes = doc! {};
        if let Some(user_id) = command.user_id {
            changes.insert("user_id", user_id);
        }
        if let Some(customer_id) = command.customer_id {
            self.ensure_customer(&customer_id).await?;
            changes.insert("customer_id", customer_id);
        }

        self.orders
            .update(id, changes)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    /// 주문을 삭제하고 각 라인의 수량만큼 재고를 복원합니다.
    ///
    /// 그 사이 삭제된 도서는 경고 로그만 남기고 건너뜁니다.
    pub async fn delete_order(&self, id: &ObjectId) -> AppResult<Order> {
        let orders = self.orders.clone();
        let inventory = self.inventory.clone();
        let id = *id;

        tokio::spawn(async move {
            let order = orders.delete(&id).await?.ok_or_else(|| order_not_found(&id))?;
            release_lines(inventory.as_ref(), order.lines()).await;

            log::info!("🗑️ 거래 삭제 및 재고 복원: {}", id.to_hex());
            Ok::<_, AppError>(order)
        })
        .await
        .context("order deletion task failed")?
    }

    pub async fn get_order(&self, id: &ObjectId) -> AppResult<Order> {
        self.orders
            .get_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    /// 최신순 주문 목록과 전체 건수를 반환합니다. 고객 ID가 있으면 해당 고객의 주문만 조회합니다.
    pub async fn fetch_orders(
        &self,
        customer_id: Option<ObjectId>,
        page: PageRequest,
    ) -> AppResult<(Page<Order>, u64)> {
        let filter = customer_id
            .map(|id| RecordFilter::equals("customer_id", id))
            .unwrap_or(RecordFilter::All);

        let items = self.orders.fetch(&filter, page).await?;
        let total = self.orders.count(&filter).await?;

        Ok((items, total))
    }

    async fn ensure_customer(&self, customer_id: &ObjectId) -> AppResult<()> {
        match self.customers.get_by_id(customer_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("customer {} not found", customer_id.to_hex()))),
        }
    }
}

fn order_not_found(id: &ObjectId) -> AppError {
    AppError::NotFound(format!("transaction {} not found", id.to_hex()))
}

fn validate_lines(lines: &[OrderedLine]) -> AppResult<()> {
    if lines.is_empty() {
        return Err(AppError::ValidationError("transaction_details must not be empty".to_string()));
    }

    if let Some(line) = lines.iter().find(|line| line.quantity <= 0) {
        return Err(AppError::ValidationError(format!(
            "quantity must be positive for book {}",
            line.book_id.to_hex()
        )));
    }

    Ok(())
}

async fn reserve_and_store(
    orders: Arc<dyn RecordStore<Order>>,
    inventory: Arc<dyn InventoryRepository>,
    command: PlaceOrderCommand,
) -> AppResult<Order> {
    let mut reserved: Vec<OrderLine> = Vec::with_capacity(command.lines.len());

    for ordered in &command.lines {
        match reserve_line(inventory.as_ref(), ordered).await {
            Ok(line) => reserved.push(line),
            Err(error) => {
                release_lines(inventory.as_ref(), &reserved).await;
                return Err(error);
            }
        }
    }

    let order = match Order::new(command.user_id, command.customer_id, reserved.clone()) {
        Ok(order) => order,
        Err(error) => {
            release_lines(inventory.as_ref(), &reserved).await;
            return Err(error);
        }
    };

    match orders.store(order).await {
        Ok(stored) => {
            log::info!(
                "🧾 거래 생성: {} (lines={}, total={})",
                stored.id.map(|id| id.to_hex()).unwrap_or_default(),
                stored.lines().len(),
                stored.total_price()
            );
            Ok(stored)
        }
        Err(error) => {
            log::error!("❌ 거래 저장 실패, 예약 재고를 반환합니다: {}", error);
            release_lines(inventory.as_ref(), &reserved).await;
            Err(error)
        }
    }
}

/// 한 라인의 재고를 예약하고 단가가 고정된 주문 라인을 만듭니다.
async fn reserve_line(inventory: &dyn InventoryRepository, ordered: &OrderedLine) -> AppResult<OrderLine> {
    let book_id = ordered.book_id;

    match inventory.reserve(&book_id, ordered.quantity).await? {
        Reservation::Reserved { unit_price } => match OrderLine::new(book_id, ordered.quantity, unit_price) {
            Ok(line) => Ok(line),
            Err(error) => {
                release_quantity(inventory, &book_id, ordered.quantity).await;
                Err(error)
            }
        },
        Reservation::Insufficient { available } => Err(AppError::InsufficientStock {
            book_id: book_id.to_hex(),
            available,
            requested: ordered.quantity,
        }),
        Reservation::Missing => Err(AppError::NotFound(format!("book {} not found", book_id.to_hex()))),
    }
}

/// 라인들의 수량을 역순으로 반환합니다. 실패는 로그로만 남깁니다.
async fn release_lines(inventory: &dyn InventoryRepository, lines: &[OrderLine]) {
    for line in lines.iter().rev() {
        release_quantity(inventory, &line.book_id(), line.quantity()).await;
    }
}

async fn release_quantity(inventory: &dyn InventoryRepository, book_id: &ObjectId, quantity: i64) {
    match inventory.release(book_id, quantity).await {
        Ok(true) => {}
        Ok(false) => log::warn!("⚠️ 재고 반환 대상 도서가 없습니다: {} (+{})", book_id.to_hex(), quantity),
        Err(error) => log::error!("❌ 재고 반환 실패: {} (+{}): {}", book_id.to_hex(), quantity, error),
    }
}
