//! 공통 DTO: 응답 봉투, 목록 조회 쿼리, 날짜 변환

use chrono::{NaiveDate, NaiveTime, Utc};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::models::pagination::PageRequest;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::deserialize_optional_string;

/// 성공 응답 봉투 `{ code, message, data }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { code: 200, message: "success".to_string(), data }
    }

    pub fn created(data: T) -> Self {
        Self { code: 201, message: "created".to_string(), data }
    }

    /// 기본 메시지를 바꿉니다.
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }
}

/// 목록 조회 쿼리 파라미터
///
/// `?page=2&size=20&q=tolkien&filter_by=author`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u64,

    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "size must be between 1 and 100"))]
    pub size: u64,

    /// 검색어 (리소스별로 해석)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub q: Option<String>,

    /// 검색 대상 필드 (도서 전용: title, author, price)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub filter_by: Option<String>,
}

fn default_page() -> u64 {
    PageRequest::DEFAULT_PAGE
}

fn default_size() -> u64 {
    PageRequest::DEFAULT_SIZE
}

impl ListQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

/// BSON DateTime을 chrono UTC 시각으로 변환합니다.
pub fn to_utc(value: DateTime) -> chrono::DateTime<Utc> {
    chrono::DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// `YYYY-MM-DD`, `DD-MM-YYYY` 또는 RFC 3339 문자열을 BSON DateTime으로 변환합니다.
pub fn parse_date(value: &str, field_name: &str) -> AppResult<DateTime> {
    let value = value.trim();

    for format in ["%Y-%m-%d", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            let millis = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
            return Ok(DateTime::from_millis(millis));
        }
    }

    chrono::DateTime::parse_from_rfc3339(value)
        .map(|parsed| DateTime::from_millis(parsed.timestamp_millis()))
        .map_err(|_| AppError::ValidationError(format!(
            "{} must be a date (YYYY-MM-DD, DD-MM-YYYY) or RFC 3339 timestamp", field_name
        )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 10);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_list_query_rejects_oversized_page() {
        let query: ListQuery = serde_json::from_str(r#"{"size": 500}"#).unwrap();
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let plain = parse_date("2020-02-01", "published_at").unwrap();
        let rfc = parse_date("2020-02-01T00:00:00Z", "published_at").unwrap();
        let day_first = parse_date("01-02-2020", "published_at").unwrap();
        assert_eq!(plain, rfc);
        assert_eq!(plain, day_first);
        assert_eq!(to_utc(plain).to_rfc3339(), "2020-02-01T00:00:00+00:00");

        assert!(matches!(parse_date("01/02/2020", "published_at"), Err(AppError::ValidationError(_))));
    }
}
