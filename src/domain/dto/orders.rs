//! 판매 거래(주문) 요청/응답 DTO

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::common::to_utc;
use crate::domain::entities::{Order, OrderLine, Record};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::order_command::{OrderedLine, PlaceOrderCommand, UpdateOrderCommand};
use crate::errors::AppResult;
use crate::utils::string_utils::{clean_optional_string, parse_object_id};

/// 주문 라인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderLineRequest {
    pub book_id: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i64,
}

/// 주문 생성 요청
///
/// `user_id`를 생략하면 인증된 사용자가 주문 처리자가 됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub customer_id: String,
    #[validate(length(min = 1, message = "transaction_details must not be empty"))]
    #[validate(nested)]
    pub transaction_details: Vec<OrderLineRequest>,
}

impl PlaceOrderRequest {
    pub fn into_command(self, requester: &AuthenticatedUser) -> AppResult<PlaceOrderCommand> {
        let user_id = match clean_optional_string(self.user_id) {
            Some(user_id) => parse_object_id(&user_id, "user_id")?,
            None => parse_object_id(&requester.user_id, "user_id")?,
        };
        let customer_id = parse_object_id(&self.customer_id, "customer_id")?;

        let lines = self
            .transaction_details
            .into_iter()
            .map(|line| {
                Ok(OrderedLine {
                    book_id: parse_object_id(&line.book_id, "book_id")?,
                    quantity: line.quantity,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PlaceOrderCommand { user_id, customer_id, lines })
    }
}

/// 주문 헤더 수정 요청
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderRequest {
    pub user_id: Option<String>,
    pub customer_id: Option<String>,
}

impl UpdateOrderRequest {
    pub fn into_command(self) -> AppResult<UpdateOrderCommand> {
        Ok(UpdateOrderCommand {
            user_id: clean_optional_string(self.user_id)
                .map(|id| parse_object_id(&id, "user_id"))
                .transpose()?,
            customer_id: clean_optional_string(self.customer_id)
                .map(|id| parse_object_id(&id, "customer_id"))
                .transpose()?,
        })
    }
}

/// 주문 라인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineResponse {
    pub book_id: String,
    pub quantity: i64,
    pub price: i64,
    pub sub_total: i64,
}

impl From<&OrderLine> for OrderLineResponse {
    fn from(line: &OrderLine) -> Self {
        Self {
            book_id: line.book_id().to_hex(),
            quantity: line.quantity(),
            price: line.unit_price(),
            sub_total: line.subtotal(),
        }
    }
}

/// 주문 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub customer_id: String,
    pub total_price: i64,
    pub transaction_details: Vec<OrderLineResponse>,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id_string(),
            user_id: order.user_id.to_hex(),
            customer_id: order.customer_id.to_hex(),
            total_price: order.total_price(),
            transaction_details: order.lines().iter().map(OrderLineResponse::from).collect(),
            created_at: to_utc(order.created_at),
            updated_at: to_utc(order.updated_at),
        }
    }
}
