//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 trait 객체(`Arc<dyn ...>`)로 리포지토리에 의존하며,
//! 운영 환경에서는 MongoDB 구현체가, 테스트에서는 메모리 구현체가 주입됩니다.
//!
//! # Modules
//!
//! - [`records`] - 범용 CRUD 저장소 ([`records::RecordStore`])
//! - [`inventory`] - 재고 예약/반환 ([`inventory::InventoryRepository`])
//! - [`users`] - 로그인 자격 증명 조회 ([`users::CredentialStore`])

use mongodb::error::{ErrorKind, WriteFailure};
use crate::errors::AppError;

pub mod inventory;
pub mod records;
pub mod users;

#[cfg(test)]
pub mod memory;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY: i32 = 11000;

/// unique 인덱스 위반 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}

/// 쓰기 에러를 AppError로 변환합니다. 중복 키는 ConflictError가 됩니다.
pub(crate) fn map_write_error(error: mongodb::error::Error, label: &str) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError(format!("{} already exists", label))
    } else {
        AppError::from(error)
    }
}
