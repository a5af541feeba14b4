//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 서점 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러 응답은 `{ "code": <HTTP 상태>, "message": <설명> }` 형태의 JSON으로
//! 직렬화됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn reserve(book: &Book, quantity: i64) -> Result<(), AppError> {
//!     if book.stock < quantity {
//!         return Err(AppError::InsufficientStock {
//!             book_id: book.id_string(),
//!             available: book.stock,
//!             requested: quantity,
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 재고 부족 에러 (409 Conflict)
    ///
    /// 주문 라인의 수량이 현재 재고보다 많을 때 발생합니다.
    #[error("Insufficient stock for book {book_id}: requested {requested}, available {available}")]
    InsufficientStock {
        book_id: String,
        available: i64,
        requested: i64,
    },

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 설정 에러 (기동 단계에서만 발생, 500)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) | AppError::InsufficientStock { .. } => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 에러(DB, 설정, 기타)는 상세 내용을 로그에만 남기고
    /// 클라이언트에는 일반화된 메시지를 반환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("❌ 내부 오류: {}", self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "code": status.as_u16(),
                "message": message
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
