//! # 사용자 관리 서비스 구현
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost ([`PasswordConfig`](crate::config::PasswordConfig))
//! - **민감 정보 제거**: 응답 DTO 변환 시 비밀번호 해시 제외
//! - **중복 방지**: 이메일은 소문자로 정규화한 뒤 중복을 확인하며, unique 인덱스가 최종 보장

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::oid::ObjectId;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::domain::entities::{Role, User};
use crate::domain::models::pagination::{Page, PageRequest};
use crate::errors::{AppError, AppResult};
use crate::repositories::records::{RecordFilter, RecordStore};
use crate::services::records::RecordService;
use crate::utils::string_utils::{parse_object_id, validate_required_string};

/// 사용자 관리 서비스
#[derive(Clone)]
pub struct UserService {
    users: RecordService<User>,
    roles: RecordService<Role>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        users: Arc<dyn RecordStore<User>>,
        roles: Arc<dyn RecordStore<Role>>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users: RecordService::new(users),
            roles: RecordService::new(roles),
            bcrypt_cost,
        }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 이름이 비었거나 역할 ID가 잘못됨/존재하지 않음
    /// * `ConflictError` - 이미 사용 중인 이메일
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let name = validate_required_string(&request.name, "name")?;
        let email = request.email.trim().to_lowercase();
        let role_id = self.resolve_role(&request.role_id).await?;

        self.ensure_email_available(&email, None).await?;

        let password_hash = self.hash_password(&request.password)?;
        self.users.create(User::new(name, email, password_hash, role_id)).await
    }

    /// 사용자 정보를 수정합니다. 비밀번호가 있으면 다시 해싱합니다.
    pub async fn update_user(&self, id: &ObjectId, request: UpdateUserRequest) -> AppResult<User> {
        let role_id = match request.role_id.as_deref() {
            Some(role_id) => Some(self.resolve_role(role_id).await?),
            None => None,
        };

        if let Some(email) = request.email.as_deref() {
            self.ensure_email_available(&email.trim().to_lowercase(), Some(id)).await?;
        }

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(self.hash_password(password)?),
            None => None,
        };

        let changes = request.into_changes(password_hash, role_id)?;
        self.users.update(id, changes).await
    }

    pub async fn delete_user(&self, id: &ObjectId) -> AppResult<User> {
        self.users.delete(id).await
    }

    pub async fn get_user(&self, id: &ObjectId) -> AppResult<User> {
        self.users.get(id).await
    }

    pub async fn fetch_users(&self, filter: &RecordFilter, page: PageRequest) -> AppResult<(Page<User>, u64)> {
        self.users.fetch(filter, page).await
    }

    async fn resolve_role(&self, raw_role_id: &str) -> AppResult<ObjectId> {
        let role_id = parse_object_id(raw_role_id, "role_id")?;

        match self.roles.find(&role_id).await? {
            Some(_) => Ok(role_id),
            None => Err(AppError::ValidationError(format!("role {} does not exist", role_id.to_hex()))),
        }
    }

    async fn ensure_email_available(&self, email: &str, except: Option<&ObjectId>) -> AppResult<()> {
        let (existing, _) = self
            .users
            .fetch(&RecordFilter::equals("email", email), PageRequest::new(1, 1))
            .await?;

        let taken = existing
            .items
            .iter()
            .any(|user| user.id.as_ref() != except);

        if taken {
            return Err(AppError::ConflictError("user already exists".to_string()));
        }
        Ok(())
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        hash(password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryRecordStore;

    async fn service() -> (UserService, ObjectId) {
        let roles = Arc::new(InMemoryRecordStore::<Role>::new());
        let role = roles.store(Role::new("employee")).await.unwrap();
        let service = UserService::new(Arc::new(InMemoryRecordStore::<User>::new()), roles, 4);
        (service, role.id.unwrap())
    }

    fn request(email: &str, role_id: &ObjectId) -> CreateUserRequest {
        CreateUserRequest {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "secret-password".to_string(),
            role_id: role_id.to_hex(),
        }
    }

    #[actix_web::test]
    async fn test_create_user_hashes_password() {
        let (service, role_id) = service().await;

        let user = service.create_user(request("Alice@Mail.com", &role_id)).await.unwrap();

        assert_eq!(user.email, "alice@mail.com");
        assert_ne!(user.password_hash, "secret-password");
        assert!(bcrypt::verify("secret-password", &user.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let (service, role_id) = service().await;
        service.create_user(request("alice@mail.com", &role_id)).await.unwrap();

        let error = service.create_user(request("ALICE@mail.com", &role_id)).await.unwrap_err();
        assert!(matches!(error, AppError::ConflictError(_)));
    }

    #[actix_web::test]
    async fn test_unknown_role_is_rejected() {
        let (service, _) = service().await;

        let unknown = service.create_user(request("bob@mail.com", &ObjectId::new())).await.unwrap_err();
        let malformed = service
            .create_user(CreateUserRequest { role_id: "not-an-id".to_string(), ..request("bob@mail.com", &ObjectId::new()) })
            .await
            .unwrap_err();

        assert!(matches!(unknown, AppError::ValidationError(_)));
        assert!(matches!(malformed, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_update_rehashes_password_and_keeps_own_email() {
        let (service, role_id) = service().await;
        let user = service.create_user(request("alice@mail.com", &role_id)).await.unwrap();
        let id = user.id.unwrap();

        let updated = service
            .update_user(
                &id,
                UpdateUserRequest {
                    email: Some("alice@mail.com".to_string()),
                    password: Some("another-password".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(bcrypt::verify("another-password", &updated.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_update_to_taken_email_is_conflict() {
        let (service, role_id) = service().await;
        service.create_user(request("alice@mail.com", &role_id)).await.unwrap();
        let bob = service.create_user(request("bob@mail.com", &role_id)).await.unwrap();

        let error = service
            .update_user(
                &bob.id.unwrap(),
                UpdateUserRequest { email: Some("alice@mail.com".to_string()), ..Default::default() },
            )
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::ConflictError(_)));
    }
}
