//! 초기 데이터 시드
//!
//! 기본 역할(`admin`, `employee`)이 없으면 만들고, 사용자가 한 명도 없으면
//! 설정된 관리자 계정을 등록합니다. 여러 번 실행해도 결과가 같습니다.

use mongodb::bson::oid::ObjectId;
use crate::config::SeedConfig;
use crate::domain::dto::users::CreateUserRequest;
use crate::domain::entities::role::{ADMIN, EMPLOYEE};
use crate::domain::entities::Role;
use crate::domain::models::pagination::PageRequest;
use crate::errors::{AppError, AppResult};
use crate::repositories::records::{RecordFilter, RecordStore};
use crate::services::users::UserService;
use super::Stores;

pub async fn seed_initial_data(stores: &Stores, seed: &SeedConfig, bcrypt_cost: u32) -> AppResult<()> {
    let admin_role_id = ensure_role(stores.roles.as_ref(), ADMIN).await?;
    ensure_role(stores.roles.as_ref(), EMPLOYEE).await?;

    if stores.users.count(&RecordFilter::All).await? > 0 {
        return Ok(());
    }

    let users = UserService::new(stores.users.clone(), stores.roles.clone(), bcrypt_cost);
    users
        .create_user(CreateUserRequest {
            name: seed.admin_name.clone(),
            email: seed.admin_email.clone(),
            password: seed.admin_password.clone(),
            role_id: admin_role_id.to_hex(),
        })
        .await?;

    log::info!("👤 초기 관리자 계정 생성: {}", seed.admin_email);
    Ok(())
}

async fn ensure_role(roles: &dyn RecordStore<Role>, name: &str) -> AppResult<ObjectId> {
    let existing = roles
        .fetch(&RecordFilter::equals("name", name), PageRequest::new(1, 1))
        .await?;

    if let Some(id) = existing.items.first().and_then(|role| role.id) {
        return Ok(id);
    }

    let role = roles.store(Role::new(name)).await?;
    log::info!("🌱 역할 생성: {}", name);

    role.id
        .ok_or_else(|| AppError::InternalError(format!("role {} stored without id", name)))
}
