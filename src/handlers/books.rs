//! 도서 핸들러
//!
//! | 메서드 | 경로 | 권한 |
//! |--------|------|------|
//! | `GET` | `/api/books` | 공개 |
//! | `GET` | `/api/books/{id}` | 공개 |
//! | `POST` | `/api/books` | admin |
//! | `PUT` | `/api/books/{id}` | admin |
//! | `DELETE` | `/api/books/{id}` | admin |
//!
//! 목록 조회는 `q`와 `filter_by`(title, author, price)로 검색합니다.
//! `filter_by` 없이 `q`만 주면 제목으로 검색합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::AppState;
use crate::domain::dto::books::{BookResponse, CreateBookRequest, UpdateBookRequest};
use crate::domain::dto::common::{ApiResponse, ListQuery};
use crate::domain::entities::role::ADMIN;
use crate::errors::{AppError, AppResult};
use crate::middlewares::AuthMiddleware;
use crate::repositories::records::RecordFilter;
use crate::utils::string_utils::parse_object_id;
use super::{paginated, validate_request};

#[get("")]
pub async fn fetch_books(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*query)?;

    let filter = book_filter(&query)?;
    let request = query.page_request();
    let (page, total) = state.books.fetch(&filter, request).await?;

    Ok(paginated(
        "books fetched successfully",
        page.map(BookResponse::from),
        total,
        request,
    ))
}

#[get("/{book_id}")]
pub async fn get_book(
    state: web::Data<AppState>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&book_id, "book_id")?;
    let book = state.books.get(&id).await?;

    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(BookResponse::from(book)).with_message("book fetched successfully"),
    ))
}

#[post("", wrap = "AuthMiddleware::required_with_role(ADMIN)")]
pub async fn create_book(
    state: web::Data<AppState>,
    payload: web::Json<CreateBookRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let book = state.books.create(payload.into_inner().into_entity()?).await?;

    Ok(HttpResponse::Created().json(
        ApiResponse::created(BookResponse::from(book)).with_message("book created successfully"),
    ))
}

#[put("/{book_id}", wrap = "AuthMiddleware::required_with_role(ADMIN)")]
pub async fn update_book(
    state: web::Data<AppState>,
    book_id: web::Path<String>,
    payload: web::Json<UpdateBookRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let id = parse_object_id(&book_id, "book_id")?;
    let book = state.books.update(&id, payload.into_inner().into_changes()?).await?;

    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(BookResponse::from(book)).with_message("book updated successfully"),
    ))
}

#[delete("/{book_id}", wrap = "AuthMiddleware::required_with_role(ADMIN)")]
pub async fn delete_book(
    state: web::Data<AppState>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&book_id, "book_id")?;
    let book = state.books.delete(&id).await?;

    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(BookResponse::from(book)).with_message("book deleted successfully"),
    ))
}

/// `q`/`filter_by` 쿼리를 검색 조건으로 변환합니다.
fn book_filter(query: &ListQuery) -> AppResult<RecordFilter> {
    let Some(q) = query.q.as_deref() else {
        return Ok(RecordFilter::All);
    };

    match query.filter_by.as_deref().unwrap_or("title") {
        "title" => Ok(RecordFilter::contains("title", q)),
        "author" => Ok(RecordFilter::contains("author", q)),
        "price" => q
            .trim()
            .parse::<i64>()
            .map(|price| RecordFilter::equals("price", price))
            .map_err(|_| AppError::ValidationError("price must be an integer".to_string())),
        other => Err(AppError::ValidationError(format!(
            "filter_by must be one of title, author, price (got '{}')",
            other
        ))),
    }
}
