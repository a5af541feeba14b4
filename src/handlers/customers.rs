//! 고객 핸들러
//!
//! 등록/수정은 admin, employee 모두 가능하고 삭제는 admin만 가능합니다.
//! 목록 조회의 `q`는 이름 부분 일치로 검색합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::AppState;
use crate::domain::dto::common::{ApiResponse, ListQuery};
use crate::domain::dto::customers::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::domain::entities::role::{ADMIN, EMPLOYEE};
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::repositories::records::RecordFilter;
use crate::utils::string_utils::parse_object_id;
use super::{paginated, validate_request};

#[get("")]
pub async fn fetch_customers(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*query)?;

    let filter = query
        .q
        .as_deref()
        .map(|name| RecordFilter::contains("name", name))
        .unwrap_or(RecordFilter::All);
    let request = query.page_request();
    let (page, total) = state.customers.fetch(&filter, request).await?;

    Ok(paginated("success", page.map(CustomerResponse::from), total, request))
}

#[get("/{customer_id}")]
pub async fn get_customer(
    state: web::Data<AppState>,
    customer_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&customer_id, "customer_id")?;
    let customer = state.customers.get(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CustomerResponse::from(customer))))
}

#[post("", wrap = "AuthMiddleware::required_with_roles(&[ADMIN, EMPLOYEE])")]
pub async fn create_customer(
    state: web::Data<AppState>,
    payload: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let customer = state.customers.create(payload.into_inner().into_entity()?).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(CustomerResponse::from(customer))))
}

#[put("/{customer_id}", wrap = "AuthMiddleware::required_with_roles(&[ADMIN, EMPLOYEE])")]
pub async fn update_customer(
    state: web::Data<AppState>,
    customer_id: web::Path<String>,
    payload: web::Json<UpdateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let id = parse_object_id(&customer_id, "customer_id")?;
    let customer = state
        .customers
        .update(&id, payload.into_inner().into_changes()?)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CustomerResponse::from(customer))))
}

#[delete("/{customer_id}", wrap = "AuthMiddleware::required_with_role(ADMIN)")]
pub async fn delete_customer(
    state: web::Data<AppState>,
    customer_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&customer_id, "customer_id")?;
    let customer = state.customers.delete(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CustomerResponse::from(customer))))
}
