//! 판매 거래 핸들러
//!
//! 주문 생성 시 재고를 예약하고, 삭제 시 재고를 복원합니다.
//! 목록 조회의 `q`는 고객 ID로 해석합니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/transactions \
//!   -H "Authorization: Bearer $TOKEN" \
//!   -H "Content-Type: application/json" \
//!   -d '{"customer_id": "...", "transaction_details": [{"book_id": "...", "quantity": 2}]}'
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::AppState;
use crate::domain::dto::common::{ApiResponse, ListQuery};
use crate::domain::dto::orders::{OrderResponse, PlaceOrderRequest, UpdateOrderRequest};
use crate::domain::entities::role::{ADMIN, EMPLOYEE};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::utils::string_utils::parse_object_id;
use super::{paginated, validate_request};

#[get("")]
pub async fn fetch_transactions(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*query)?;

    let customer_id = query
        .q
        .as_deref()
        .map(|id| parse_object_id(id, "customer_id"))
        .transpose()?;
    let request = query.page_request();
    let (page, total) = state.orders.fetch_orders(customer_id, request).await?;

    Ok(paginated("success", page.map(OrderResponse::from), total, request))
}

#[get("/{transaction_id}")]
pub async fn get_transaction(
    state: web::Data<AppState>,
    transaction_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&transaction_id, "transaction_id")?;
    let order = state.orders.get_order(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(OrderResponse::from(order))))
}

/// 주문 생성. `user_id`를 생략하면 토큰의 사용자가 처리자가 됩니다.
#[post("", wrap = "AuthMiddleware::required_with_roles(&[ADMIN, EMPLOYEE])")]
pub async fn place_transaction(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let command = payload.into_inner().into_command(&user)?;
    let order = state.orders.place_order(command).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(OrderResponse::from(order))))
}

#[put("/{transaction_id}", wrap = "AuthMiddleware::required_with_roles(&[ADMIN, EMPLOYEE])")]
pub async fn update_transaction(
    state: web::Data<AppState>,
    transaction_id: web::Path<String>,
    payload: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&transaction_id, "transaction_id")?;
    let order = state
        .orders
        .update_order(&id, payload.into_inner().into_command()?)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(OrderResponse::from(order))))
}

#[delete("/{transaction_id}", wrap = "AuthMiddleware::required_with_role(ADMIN)")]
pub async fn delete_transaction(
    state: web::Data<AppState>,
    transaction_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&transaction_id, "transaction_id")?;
    let order = state.orders.delete_order(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(OrderResponse::from(order))))
}
