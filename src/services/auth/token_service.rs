//! RS256 JWT 토큰 발급/검증 서비스
//!
//! 개인키로 서명하고 공개키로 검증합니다. 검증 시 알고리즘은 RS256만 허용하며,
//! 발급자(`iss`)가 설정값과 다르면 거부합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use mongodb::bson::oid::ObjectId;
use uuid::Uuid;
use crate::domain::models::token::{IssuedToken, TokenClaims};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::Credentials;
use super::rsa_keys::JwtKeyPair;

/// JWT 토큰 관리 서비스
///
/// 서버 시작 시 한 번 생성되어 `AppState`를 통해 공유됩니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration: Duration,
    issuer: String,
}

impl TokenService {
    /// 키 쌍으로 서비스를 생성합니다.
    ///
    /// 생성 직후 시험 토큰을 서명하고 검증해, 키를 사용할 수 없으면
    /// [`AppError::ConfigError`]를 반환합니다.
    pub fn new(keys: &JwtKeyPair, expiration_hours: i64, issuer: &str) -> AppResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(keys.private_pem.as_bytes())
            .map_err(|e| AppError::ConfigError(format!("invalid JWT private key: {}", e)))?;
        let decoding_key = DecodingKey::from_rsa_pem(keys.public_pem.as_bytes())
            .map_err(|e| AppError::ConfigError(format!("invalid JWT public key: {}", e)))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let service = Self {
            encoding_key,
            decoding_key,
            validation,
            expiration: Duration::hours(expiration_hours),
            issuer: issuer.to_string(),
        };

        let probe = Credentials {
            user_id: ObjectId::new(),
            user_name: "probe".to_string(),
            password_hash: String::new(),
            role_name: "probe".to_string(),
        };
        let issued = service.issue(&probe)?;
        service
            .verify(&issued.token)
            .map_err(|e| AppError::ConfigError(format!("JWT key pair self-check failed: {}", e)))?;

        Ok(service)
    }

    /// 사용자에게 액세스 토큰을 발급합니다.
    pub fn issue(&self, credentials: &Credentials) -> AppResult<IssuedToken> {
        self.issue_at(credentials, Utc::now())
    }

    /// 지정한 시각을 발급 시각으로 토큰을 서명합니다.
    pub fn issue_at(&self, credentials: &Credentials, now: DateTime<Utc>) -> AppResult<IssuedToken> {
        let expires_at = now + self.expiration;

        let claims = TokenClaims {
            sub: credentials.user_id.to_hex(),
            user_name: credentials.user_name.clone(),
            role_name: credentials.role_name.clone(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: self.expiration.num_seconds(),
        })
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// 서명/구조/만료/발급자 오류와 빈 `user_name`은 모두
    /// [`AppError::AuthenticationError`]입니다.
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::AuthenticationError("token expired".to_string()),
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("invalid token".to_string())
                }
            })?;

        if claims.user_name.trim().is_empty() {
            return Err(AppError::AuthenticationError("invalid token".to_string()));
        }

        Ok(claims)
    }

    /// `Authorization` 헤더 값에서 토큰 부분을 추출합니다.
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOiJSUzI1NiJ9...")?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.trim().strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("invalid authorization header".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::rsa_keys::tests::{test_key_pair, OTHER_PRIVATE_KEY, TEST_PUBLIC_KEY};
    use jsonwebtoken::EncodingKey;

    fn service() -> TokenService {
        TokenService::new(&test_key_pair(), 24, "book_store_backend").unwrap()
    }

    fn credentials() -> Credentials {
        Credentials {
            user_id: ObjectId::new(),
            user_name: "admin".to_string(),
            password_hash: String::new(),
            role_name: "admin".to_string(),
        }
    }

    fn claims_for(credentials: &Credentials, issuer: &str) -> TokenClaims {
        let now = Utc::now();
        TokenClaims {
            sub: credentials.user_id.to_hex(),
            user_name: credentials.user_name.clone(),
            role_name: credentials.role_name.clone(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = service();
        let credentials = credentials();

        let issued = service.issue(&credentials).unwrap();
        let claims = service.verify(&issued.token).unwrap();

        assert_eq!(issued.expires_in, 24 * 3600);
        assert_eq!(claims.sub, credentials.user_id.to_hex());
        assert_eq!(claims.user_name, "admin");
        assert_eq!(claims.role_name, "admin");
        assert_eq!(claims.iss, "book_store_backend");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let issued = service
            .issue_at(&credentials(), Utc::now() - Duration::days(2))
            .unwrap();

        let result = service.verify(&issued.token);
        assert!(matches!(result, Err(AppError::AuthenticationError(message)) if message == "token expired"));
    }

    #[test]
    fn test_token_signed_with_other_key_is_rejected() {
        let service = service();
        let forged = encode(
            &Header::new(Algorithm::RS256),
            &claims_for(&credentials(), "book_store_backend"),
            &EncodingKey::from_rsa_pem(OTHER_PRIVATE_KEY.as_bytes()).unwrap(),
        )
        .unwrap();

        assert!(matches!(service.verify(&forged), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_hs256_token_is_rejected() {
        let service = service();
        // 공개키를 HMAC 비밀키로 악용하는 경우
        let forged = encode(
            &Header::new(Algorithm::HS256),
            &claims_for(&credentials(), "book_store_backend"),
            &EncodingKey::from_secret(TEST_PUBLIC_KEY.as_bytes()),
        )
        .unwrap();

        assert!(matches!(service.verify(&forged), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_foreign_issuer_is_rejected() {
        let other = TokenService::new(&test_key_pair(), 24, "someone_else").unwrap();
        let issued = other.issue(&credentials()).unwrap();

        assert!(matches!(service().verify(&issued.token), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_empty_user_name_is_rejected() {
        let service = service();
        let mut credentials = credentials();
        credentials.user_name = String::new();

        let issued = service.issue(&credentials).unwrap();
        assert!(matches!(service.verify(&issued.token), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(service().verify("not.a.jwt"), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
