//! 사용자 관리 핸들러
//!
//! 조회는 공개, 등록/수정/삭제는 admin 전용입니다.
//! 응답에는 비밀번호 해시가 포함되지 않습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::AppState;
use crate::domain::dto::common::{ApiResponse, ListQuery};
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::entities::role::ADMIN;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::repositories::records::RecordFilter;
use crate::utils::string_utils::parse_object_id;
use super::{paginated, validate_request};

#[get("")]
pub async fn fetch_users(
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
    let (page, total) = state.users.fetch_users(&filter, request).await?;

    Ok(paginated("success", page.map(UserResponse::from), total, request))
}

#[get("/{user_id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&user_id, "user_id")?;
    let user = state.users.get_user(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UserResponse::from(user))))
}

#[post("", wrap = "AuthMiddleware::required_with_role(ADMIN)")]
pub async fn create_user(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let user = state.users.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(UserResponse::from(user))))
}

#[put("/{user_id}", wrap = "AuthMiddleware::required_with_role(ADMIN)")]
pub async fn update_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let id = parse_object_id(&user_id, "user_id")?;
    let user = state.users.update_user(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UserResponse::from(user))))
}

#[delete("/{user_id}", wrap = "AuthMiddleware::required_with_role(ADMIN)")]
pub async fn delete_user(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&user_id, "user_id")?;
    let user = state.users.delete_user(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UserResponse::from(user))))
}
