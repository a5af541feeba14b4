//! # Data Transfer Objects
//!
//! API 경계에서 사용하는 요청/응답 구조체입니다.
//!
//! ## 변환 패턴
//! - **Request → Entity**: `into_entity()` (검증 실패 시 `AppError::ValidationError`)
//! - **Update Request → `$set` 문서**: `into_changes()`
//! - **Entity → Response**: `impl From<Entity> for Response`

pub mod auth;
pub mod books;
pub mod common;
pub mod customers;
pub mod orders;
pub mod roles;
pub mod users;
