//! 로그인 자격 증명 조회 리포지토리
//!
//! 토큰 발급 경로는 이메일 하나로 "사용자 + 비밀번호 해시 + 역할 이름"을 한 번에 필요로 합니다.
//! [`CredentialStore`]가 이 조회를 추상화하며, 기본 구현인
//! [`RecordCredentialStore`](credential_store::RecordCredentialStore)는
//! 사용자/역할 레코드 저장소를 조합합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let credentials = RecordCredentialStore::new(users.clone(), roles.clone());
//! let found = credentials.find_by_email("admin@mail.com").await?;
//! ```

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::errors::AppResult;

pub mod credential_store;

pub use credential_store::RecordCredentialStore;

/// 토큰 발급에 필요한 사용자 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: ObjectId,
    pub user_name: String,
    pub password_hash: String,
    pub role_name: String,
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 이메일로 자격 증명을 찾습니다. 이메일 비교는 대소문자를 구분하지 않습니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Credentials>>;
}
