//! 사용자(직원 계정) 관리 서비스 모듈
//!
//! 비밀번호 해싱, 역할 존재 확인, 이메일 중복 확인을 담당하는
//! [`UserService`](user_service::UserService)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let user = user_service.create_user(request).await?;
//! let response = UserResponse::from(user);
//! ```

pub mod user_service;

pub use user_service::UserService;
