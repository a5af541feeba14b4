use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::models::token::IssuedToken;

/// 토큰 발급(로그인) 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 토큰 발급 응답
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
        }
    }
}
