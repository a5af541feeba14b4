use serde::{Deserialize, Serialize};

/// JWT 토큰 클레임
///
/// 필수 필드가 누락된 토큰은 역직렬화 단계에서 거부됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자 표시 이름
    pub user_name: String,
    /// 역할 이름 (라우트 권한 검사에 사용)
    pub role_name: String,
    /// 발급자
    pub iss: String,
    /// 토큰 고유 ID
    pub jti: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 발급된 액세스 토큰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
