//! 로그인(토큰 발급) 서비스

use std::sync::Arc;
use crate::domain::models::token::IssuedToken;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::CredentialStore;
use super::token_service::TokenService;

/// 로그인 실패 시 공통 메시지 (계정 존재 여부를 드러내지 않음)
const INVALID_CREDENTIALS: &str = "invalid email or password";

/// 이메일/비밀번호 로그인 서비스
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
    /// 존재하지 않는 계정에도 같은 비용의 검증을 수행하기 위한 해시
    dummy_hash: String,
}

impl AuthService {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        tokens: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> AppResult<Self> {
        let dummy_hash = bcrypt::hash("book-store-dummy-password", bcrypt_cost)
            .map_err(|e| AppError::ConfigError(format!("bcrypt setup failed: {}", e)))?;

        Ok(Self {
            credentials,
            tokens,
            dummy_hash,
        })
    }

    /// 자격 증명을 확인하고 액세스 토큰을 발급합니다.
    ///
    /// 계정이 없거나 비밀번호가 틀리면 동일한 401 에러를 반환합니다.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let Some(credentials) = self.credentials.find_by_email(email).await? else {
            let _ = bcrypt::verify(password, &self.dummy_hash);
            log::warn!("🚫 로그인 실패: 알 수 없는 계정");
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        let verified = bcrypt::verify(password, &credentials.password_hash).unwrap_or(false);
        if !verified {
            log::warn!("🚫 로그인 실패: 비밀번호 불일치 (user_id={})", credentials.user_id.to_hex());
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let issued = self.tokens.issue(&credentials)?;
        log::info!("✅ 토큰 발급: {} ({})", credentials.user_name, credentials.role_name);

        Ok(issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;
    use crate::repositories::users::Credentials;
    use crate::services::auth::rsa_keys::tests::test_key_pair;

    struct FixedCredentials(Option<Credentials>);

    #[async_trait]
    impl CredentialStore for FixedCredentials {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<Credentials>> {
            Ok(self.0.clone().filter(|_| email == "admin@mail.com"))
        }
    }

    fn service() -> (AuthService, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new(&test_key_pair(), 24, "book_store_backend").unwrap());
        let credentials = Credentials {
            user_id: ObjectId::new(),
            user_name: "admin".to_string(),
            password_hash: bcrypt::hash("admin", 4).unwrap(),
            role_name: "admin".to_string(),
        };

        let service = AuthService::new(Arc::new(FixedCredentials(Some(credentials))), tokens.clone(), 4).unwrap();
        (service, tokens)
    }

    #[actix_web::test]
    async fn test_login_issues_verifiable_token() {
        let (service, tokens) = service();

        let issued = service.login("admin@mail.com", "admin").await.unwrap();
        let claims = tokens.verify(&issued.token).unwrap();

        assert_eq!(claims.user_name, "admin");
        assert_eq!(claims.role_name, "admin");
    }

    #[actix_web::test]
    async fn test_wrong_password_and_unknown_email_share_message() {
        let (service, _) = service();

        let wrong_password = service.login("admin@mail.com", "nope").await.unwrap_err();
        let unknown_email = service.login("ghost@mail.com", "admin").await.unwrap_err();

        assert_eq!(wrong_password, AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        assert_eq!(unknown_email, wrong_password);
    }
}
