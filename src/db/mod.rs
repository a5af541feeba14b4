//! MongoDB 연결 관리
//!
//! 서버 시작 시 한 번 연결하고 `ping`으로 확인합니다.
//! 연결 타임아웃과 서버 선택 타임아웃은 같은 값을 사용합니다.

use std::time::Duration;
use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};
use crate::errors::{AppError, AppResult};

pub mod indexes;

/// MongoDB 클라이언트와 데이터베이스 이름
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    pub async fn connect(uri: &str, database_name: &str, timeout: Duration) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::ConfigError(format!("invalid MONGODB_URI: {}", e)))?;

        client_options.app_name = Some("book_store_backend".to_string());
        client_options.connect_timeout = Some(timeout);
        client_options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
