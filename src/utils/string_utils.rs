//! # 문자열 유틸리티
//!
//! 문자열 처리와 식별자 파싱에 관련된 공통 유틸리티 함수들입니다.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use crate::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Dune  ", "title").unwrap(), "Dune");
/// assert!(validate_required_string("   ", "title").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{} must not be blank", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 16진수 문자열을 MongoDB ObjectId로 변환합니다.
///
/// 형식이 잘못된 경우 어떤 필드가 문제인지 담은 ValidationError를 반환합니다.
pub fn parse_object_id(value: &str, field_name: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("{} is not a valid id: {}", field_name, value)))
}

/// 정규식 메타 문자를 이스케이프합니다.
///
/// 사용자 검색어를 `$regex` 부분 일치 필터에 넣을 때 사용합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
