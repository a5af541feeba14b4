use std::sync::Arc;
use crate::db::Database;
use crate::domain::entities::{Book, Customer, Order, Role, User};
use crate::errors::AppResult;
use crate::repositories::inventory::{InventoryRepository, MongoInventoryRepository};
use crate::repositories::records::{MongoRecordStore, RecordStore};
use crate::repositories::users::RecordCredentialStore;
use crate::services::auth::{AuthService, TokenService};
use crate::services::orders::OrderService;
use crate::services::records::RecordService;
use crate::services::users::UserService;

/// 리포지토리 묶음
#[derive(Clone)]
pub struct Stores {
    pub books: Arc<dyn RecordStore<Book>>,
    pub customers: Arc<dyn RecordStore<Customer>>,
    pub roles: Arc<dyn RecordStore<Role>>,
    pub users: Arc<dyn RecordStore<User>>,
    pub orders: Arc<dyn RecordStore<Order>>,
    pub inventory: Arc<dyn InventoryRepository>,
}

impl Stores {
    /// MongoDB 컬렉션 기반 저장소
    pub fn mongo(database: &Database) -> Self {
        Self {
            books: Arc::new(MongoRecordStore::<Book>::new(database)),
            customers: Arc::new(MongoRecordStore::<Customer>::new(database)),
            roles: Arc::new(MongoRecordStore::<Role>::new(database)),
            users: Arc::new(MongoRecordStore::<User>::new(database)),
            orders: Arc::new(MongoRecordStore::<Order>::new(database)),
            inventory: Arc::new(MongoInventoryRepository::new(database)),
        }
    }
}

/// 핸들러가 공유하는 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub auth: Arc<AuthService>,
    pub orders: OrderService,
    pub books: RecordService<Book>,
    pub customers: RecordService<Customer>,
    pub roles: RecordService<Role>,
    pub users: UserService,
}

impl AppState {
    pub fn new(stores: Stores, tokens: Arc<TokenService>, bcrypt_cost: u32) -> AppResult<Self> {
        let credentials = Arc::new(RecordCredentialStore::new(stores.users.clone(), stores.roles.clone()));
        let auth = Arc::new(AuthService::new(credentials, tokens.clone(), bcrypt_cost)?);

        Ok(Self {
            tokens,
            auth,
            orders: OrderService::new(stores.orders, stores.customers.clone(), stores.inventory),
            books: RecordService::new(stores.books),
            customers: RecordService::new(stores.customers),
            roles: RecordService::new(stores.roles.clone()),
            users: UserService::new(stores.users, stores.roles, bcrypt_cost),
        })
    }
}
