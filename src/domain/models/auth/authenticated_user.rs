use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::models::token::TokenClaims;

/// 검증된 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 Request Extensions에 넣어두며, 핸들러에서 추출자로 받습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId 16진수)
    pub user_id: String,

    /// 표시 이름
    pub user_name: String,

    /// 역할 이름
    pub role_name: String,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            user_name: claims.user_name,
            role_name: claims.role_name,
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(crate::errors::AppError::AuthenticationError(
                "unauthorized".to_string(),
            ).into())),
        }
    }
}
