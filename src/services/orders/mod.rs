//! 주문(거래) 서비스 모듈
//!
//! 주문 생성 시 재고 예약, 실패 시 보상(재고 반환), 주문 삭제 시 재고 복원을
//! 담당하는 [`OrderService`]를 제공합니다.

pub mod order_service;

pub use order_service::OrderService;
