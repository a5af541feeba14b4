//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 키와 토큰 수명 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! 키는 두 가지 방식 중 하나로 제공합니다.
//!
//! ### 1. Base64 인코딩된 PEM (컨테이너/CI 환경 권장)
//! ```bash
//! export JWT_PRIVATE_KEY="$(base64 -w0 jwt_private_key.pem)"
//! export JWT_PUBLIC_KEY="$(base64 -w0 jwt_public_key.pem)"
//! ```
//!
//! ### 2. PEM 파일 경로
//! ```bash
//! export JWT_PRIVATE_KEY_PATH="./secrets/jwt_private_key.pem"
//! export JWT_PUBLIC_KEY_PATH="./secrets/jwt_public_key.pem"
//! ```
//!
//! 두 방식 모두 설정되지 않으면 기본 파일 경로(`./secrets/`)를 사용합니다.
//!
//! ### 토큰 수명
//! ```bash
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_ISSUER="book_store_backend"
//! ```

use std::env;

/// 기본 개인키 경로
pub const DEFAULT_PRIVATE_KEY_PATH: &str = "./secrets/jwt_private_key.pem";
/// 기본 공개키 경로
pub const DEFAULT_PUBLIC_KEY_PATH: &str = "./secrets/jwt_public_key.pem";

/// JWT 서명 키의 출처
#[derive(Debug, Clone, PartialEq)]
pub enum JwtKeySource {
    /// 환경 변수에 직접 담긴 Base64 인코딩 PEM
    Inline {
        private_key_b64: String,
        public_key_b64: String,
    },
    /// 디스크의 PEM 파일
    Files {
        private_key_path: String,
        public_key_path: String,
    },
}

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 만료 시간(시간 단위). 기본값: 24
    pub fn expiration_hours() -> i64 {
        Self::parse_expiration_hours(env::var("JWT_EXPIRATION_HOURS").ok().as_deref())
    }

    /// 토큰 발급자(`iss`). 기본값: "book_store_backend"
    pub fn issuer() -> String {
        env::var("JWT_ISSUER").unwrap_or_else(|_| "book_store_backend".to_string())
    }

    /// 서명 키의 출처를 결정합니다.
    ///
    /// `JWT_PRIVATE_KEY`와 `JWT_PUBLIC_KEY`가 모두 설정되어 있으면 인라인 키를,
    /// 그렇지 않으면 파일 경로를 사용합니다.
    pub fn key_source() -> JwtKeySource {
        Self::resolve_key_source(
            env::var("JWT_PRIVATE_KEY").ok(),
            env::var("JWT_PUBLIC_KEY").ok(),
            env::var("JWT_PRIVATE_KEY_PATH").ok(),
            env::var("JWT_PUBLIC_KEY_PATH").ok(),
        )
    }

    fn parse_expiration_hours(raw: Option<&str>) -> i64 {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(24)
    }

    fn resolve_key_source(
        private_key: Option<String>,
        public_key: Option<String>,
        private_key_path: Option<String>,
        public_key_path: Option<String>,
    ) -> JwtKeySource {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        match (non_empty(private_key), non_empty(public_key)) {
            (Some(private_key_b64), Some(public_key_b64)) => JwtKeySource::Inline {
                private_key_b64,
                public_key_b64,
            },
            _ => JwtKeySource::Files {
                private_key_path: non_empty(private_key_path)
                    .unwrap_or_else(|| DEFAULT_PRIVATE_KEY_PATH.to_string()),
                public_key_path: non_empty(public_key_path)
                    .unwrap_or_else(|| DEFAULT_PUBLIC_KEY_PATH.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_hours_default_and_override() {
        assert_eq!(JwtConfig::parse_expiration_hours(None), 24);
        assert_eq!(JwtConfig::parse_expiration_hours(Some("2")), 2);
        assert_eq!(JwtConfig::parse_expiration_hours(Some("0")), 24);
        assert_eq!(JwtConfig::parse_expiration_hours(Some("soon")), 24);
    }

    #[test]
    fn test_inline_keys_take_precedence() {
        let source = JwtConfig::resolve_key_source(
            Some("cHJpdg==".to_string()),
            Some("cHVi".to_string()),
            Some("/tmp/private.pem".to_string()),
            None,
        );

        assert_eq!(
            source,
            JwtKeySource::Inline {
                private_key_b64: "cHJpdg==".to_string(),
                public_key_b64: "cHVi".to_string(),
            }
        );
    }

    #[test]
    fn test_half_configured_inline_falls_back_to_files() {
        let source = JwtConfig::resolve_key_source(Some("cHJpdg==".to_string()), Some("  ".to_string()), None, None);

        assert_eq!(
            source,
            JwtKeySource::Files {
                private_key_path: DEFAULT_PRIVATE_KEY_PATH.to_string(),
                public_key_path: DEFAULT_PUBLIC_KEY_PATH.to_string(),
            }
        );
    }
}
