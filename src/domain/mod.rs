//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 엔티티와 API 계약을 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 핵심 엔티티 (Book, Order, ...)
//! ├── dto       - 요청/응답 데이터 전송 객체
//! └── models    - 토큰 클레임, 인증 사용자, 페이지, 주문 명령 등 값 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod dto;
pub mod entities;
pub mod models;
