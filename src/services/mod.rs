//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 리포지토리 trait 객체를 생성자로 주입받으며,
//! `main`에서 한 번 조립되어 [`AppState`](crate::core::state::AppState)로 공유됩니다.
//!
//! # Modules
//!
//! - [`orders`] - 재고 예약과 보상을 포함한 주문 처리
//! - [`auth`] - RS256 토큰 발급/검증, 로그인
//! - [`users`] - 직원 계정 관리 (비밀번호 해싱)
//! - [`records`] - 도서/고객/역할 공통 CRUD

pub mod auth;
pub mod orders;
pub mod records;
pub mod users;
