//! # HTTP Request Handlers
//!
//! 리소스별 HTTP 엔드포인트입니다. 핸들러는 요청을 검증하고 DTO를 명령/엔티티로
//! 변환한 뒤 [`AppState`](crate::core::AppState)의 서비스에 위임합니다.
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`auth`] | `/api/auth` |
//! | [`books`] | `/api/books` |
//! | [`customers`] | `/api/customers` |
//! | [`users`] | `/api/users` |
//! | [`roles`] | `/api/roles` |
//! | [`transactions`] | `/api/transactions` |
//!
//! 목록 응답은 본문 봉투 외에 페이지 정보를 헤더로 전달합니다.
//!
//! - `X-Total-Count`: 필터에 맞는 전체 건수
//! - `X-Max-Page`: 현재 페이지 크기 기준 마지막 페이지
//! - `X-Cursor`: 다음 페이지 번호 (다음 페이지가 있을 때만)

use actix_web::HttpResponse;
use serde::Serialize;
use validator::Validate;
use crate::domain::dto::common::ApiResponse;
use crate::domain::models::pagination::{Page, PageRequest};
use crate::errors::{AppError, AppResult};

pub mod auth;
pub mod books;
pub mod customers;
pub mod roles;
pub mod transactions;
pub mod users;

pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";
pub const MAX_PAGE_HEADER: &str = "X-Max-Page";
pub const CURSOR_HEADER: &str = "X-Cursor";

/// 요청 DTO 유효성 검사
pub(crate) fn validate_request<T: Validate>(payload: &T) -> AppResult<()> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

/// 목록 응답 생성 (페이지 헤더 포함)
pub(crate) fn paginated<T: Serialize>(
    message: &str,
    page: Page<T>,
    total: u64,
    request: PageRequest,
) -> HttpResponse {
    let mut response = HttpResponse::Ok();
    response
        .insert_header((TOTAL_COUNT_HEADER, total.to_string()))
        .insert_header((MAX_PAGE_HEADER, request.max_page(total).to_string()));

    if page.has_next {
        response.insert_header((CURSOR_HEADER, (request.page + 1).to_string()));
    }

    response.json(ApiResponse::ok(page.items).with_message(message))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use actix_web::web;
    use crate::core::{AppState, Stores};
    use crate::domain::entities::{Book, Customer, Order, Role, User};
    use crate::repositories::memory::{InMemoryInventory, InMemoryRecordStore};
    use crate::repositories::users::Credentials;
    use crate::services::auth::rsa_keys::tests::test_key_pair;
    use crate::services::auth::TokenService;

    /// 메모리 저장소로 구성한 애플리케이션 상태
    pub(crate) struct TestApp {
        pub state: AppState,
        pub tokens: Arc<TokenService>,
        pub inventory: Arc<InMemoryInventory>,
        pub books: Arc<InMemoryRecordStore<Book>>,
        pub customers: Arc<InMemoryRecordStore<Customer>>,
        pub roles: Arc<InMemoryRecordStore<Role>>,
    }

    impl TestApp {
        pub fn new() -> Self {
            let tokens = Arc::new(TokenService::new(&test_key_pair(), 24, "book_store_backend").unwrap());
            let inventory = Arc::new(InMemoryInventory::new());
            let books = Arc::new(InMemoryRecordStore::<Book>::new());
            let customers = Arc::new(InMemoryRecordStore::<Customer>::new());
            let roles = Arc::new(InMemoryRecordStore::<Role>::new());

            let stores = Stores {
                books: books.clone(),
                customers: customers.clone(),
                roles: roles.clone(),
                users: Arc::new(InMemoryRecordStore::<User>::new()),
                orders: Arc::new(InMemoryRecordStore::<Order>::new()),
                inventory: inventory.clone(),
            };
            let state = AppState::new(stores, tokens.clone(), 4).unwrap();

            Self { state, tokens, inventory, books, customers, roles }
        }

        pub fn state(&self) -> web::Data<AppState> {
            web::Data::new(self.state.clone())
        }

        pub fn token_data(&self) -> web::Data<TokenService> {
            web::Data::from(self.tokens.clone())
        }

        /// 주어진 역할의 `Authorization` 헤더 값
        pub fn bearer(&self, role_name: &str) -> String {
            let credentials = Credentials {
                user_id: mongodb::bson::oid::ObjectId::new(),
                user_name: "tester".to_string(),
                password_hash: String::new(),
                role_name: role_name.to_string(),
            };
            format!("Bearer {}", self.tokens.issue(&credentials).unwrap().token)
        }
    }
}
