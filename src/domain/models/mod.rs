//! # Domain Models
//!
//! 영속되지 않는 도메인 값 객체들입니다.
//!
//! - [`auth`] - 인증된 사용자, 라우트 역할 요구사항
//! - [`token`] - JWT 클레임과 발급 결과
//! - [`pagination`] - 페이지 요청/결과
//! - [`order_command`] - 주문 생성/수정 명령

pub mod auth;
pub mod order_command;
pub mod pagination;
pub mod token;
