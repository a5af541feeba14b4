//! 서점 백엔드
//!
//! 도서/고객/사용자/역할 관리와 판매 거래를 제공하는 REST API 서비스입니다.
//! 주문 시 재고를 조건부로 차감하고 실패하면 보상하여 재고가 음수가 되지 않도록 하며,
//! RS256 JWT와 역할 기반 접근 제어로 쓰기 작업을 보호합니다.
//!
//! # Features
//!
//! - **재고 일관성**: 라인별 조건부 차감 + 역순 보상, 주문 삭제 시 재고 복원
//! - **JWT 인증**: RS256 서명 액세스 토큰, 역할 완전 일치 인가
//! - **MongoDB**: 모든 데이터 영구 저장
//! - **생성자 주입**: `AppState`로 조립, 테스트는 메모리 저장소 사용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, DTO 변환, 페이지 헤더
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 주문/재고, 로그인, 사용자 관리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← RecordStore / InventoryRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use book_store_backend::core::{AppState, Stores};
//!
//! let stores = Stores::mongo(&database);
//! let state = AppState::new(stores, tokens, config.bcrypt_cost)?;
//!
//! let order = state.orders.place_order(command).await?;
//! println!("total: {}", order.total_price());
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
