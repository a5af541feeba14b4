//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증/인가 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 RS256 토큰 추출 및 검증
//! - 라우트별 허용 역할 검사 (완전 일치, 계층 없음)
//! - 검증된 사용자 정보를 request extension에 저장
//!
//! 토큰 검증에는 `web::Data<TokenService>`가 앱 데이터로 등록되어 있어야 합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{post, HttpResponse};
//! use crate::domain::entities::role::{ADMIN, EMPLOYEE};
//! use crate::middlewares::AuthMiddleware;
//!
//! #[post("", wrap = "AuthMiddleware::required_with_roles(&[ADMIN, EMPLOYEE])")]
//! async fn create_customer(user: AuthenticatedUser) -> HttpResponse { /* ... */ }
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
