//! 범용 CRUD 서비스 모듈
//!
//! 도서, 고객, 역할처럼 별도 비즈니스 규칙 없이 저장소 계약만 따르는 리소스는
//! [`RecordService`]를 그대로 사용합니다.

pub mod record_service;

pub use record_service::RecordService;
