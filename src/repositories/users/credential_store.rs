use std::sync::Arc;
use async_trait::async_trait;
use crate::domain::entities::{Role, User};
use crate::domain::models::pagination::PageRequest;
use crate::errors::AppResult;
use crate::repositories::records::{RecordFilter, RecordStore};
use super::{CredentialStore, Credentials};

/// 사용자/역할 저장소를 조합한 자격 증명 조회
pub struct RecordCredentialStore {
    users: Arc<dyn RecordStore<User>>,
    roles: Arc<dyn RecordStore<Role>>,
}

impl RecordCredentialStore {
    pub fn new(users: Arc<dyn RecordStore<User>>, roles: Arc<dyn RecordStore<Role>>) -> Self {
        Self { users, roles }
    }
}

#[async_trait]
impl CredentialStore for RecordCredentialStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Credentials>> {
        // 이메일은 저장 시 소문자로 정규화됨
        let filter = RecordFilter::equals("email", email.trim().to_lowercase());
        let page = self.users.fetch(&filter, PageRequest::new(1, 1)).await?;

        let Some(user) = page.items.into_iter().next() else {
            return Ok(None);
        };
        let Some(user_id) = user.id else {
            return Ok(None);
        };

        let Some(role) = self.roles.get_by_id(&user.role_id).await? else {
            log::warn!("⚠️ 사용자 {}의 역할({})을 찾을 수 없습니다", user_id.to_hex(), user.role_id.to_hex());
            return Ok(None);
        };

        Ok(Some(Credentials {
            user_id,
            user_name: user.name,
            password_hash: user.password_hash,
            role_name: role.name,
        }))
    }
}
