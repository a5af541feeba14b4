//! # Domain Entities Module
//!
//! 서점 도메인의 핵심 엔티티들을 정의합니다.
//! 모든 엔티티는 MongoDB 문서와 1:1로 매핑됩니다.
//!
//! ## 엔티티 목록
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`Book`] | `books` | 판매 도서 (가격, 재고 포함) |
//! | [`Customer`] | `customers` | 구매 고객 |
//! | [`User`] | `users` | 직원 계정 (로그인 주체) |
//! | [`Role`] | `roles` | 직원 역할 (`admin`, `employee`) |
//! | [`Order`] | `transactions` | 판매 거래 (주문 라인 내장) |
//!
//! ## 공통 규칙
//!
//! - `_id`는 `Option<ObjectId>`로 표현하며 저장 전에는 `None`입니다.
//! - `created_at`/`updated_at`은 BSON `DateTime`으로 저장합니다.
//! - 금액은 최소 화폐 단위의 정수(`i64`)로 다룹니다.

use mongodb::bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Serialize};

pub mod book;
pub mod customer;
pub mod order;
pub mod role;
pub mod user;

pub use book::Book;
pub use customer::Customer;
pub use order::{Order, OrderLine};
pub use role::Role;
pub use user::User;

/// 범용 레코드 저장소에 저장 가능한 엔티티
///
/// 컬렉션 이름과 식별자 접근만 정의하며, 나머지는 serde 직렬화에 맡깁니다.
/// 모든 구현체는 `created_at`/`updated_at` 필드를 가져야 합니다.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;
    /// 에러 메시지에 쓰이는 단수형 이름
    const LABEL: &'static str;

    fn id(&self) -> Option<ObjectId>;

    fn set_id(&mut self, id: ObjectId);

    /// 16진수 문자열 ID (저장 전이면 빈 문자열)
    fn id_string(&self) -> String {
        self.id().map(|id| id.to_hex()).unwrap_or_default()
    }
}
