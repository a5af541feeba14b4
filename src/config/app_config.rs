//! 기동 시 한 번 읽는 전체 설정

use std::time::Duration;
use super::{
    DatabaseConfig, Environment, JwtConfig, JwtKeySource, PasswordConfig, RateLimitConfig,
    SeedConfig, ServerConfig,
};

/// 환경 변수에서 모은 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub mongodb_uri: String,
    pub database_name: String,
    pub database_timeout: Duration,
    pub jwt_key_source: JwtKeySource,
    pub jwt_expiration_hours: i64,
    pub jwt_issuer: String,
    pub bcrypt_cost: u32,
    pub rate_limit: RateLimitConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: Environment::current(),
            host: ServerConfig::host(),
            port: ServerConfig::port(),
            workers: ServerConfig::workers(),
            mongodb_uri: DatabaseConfig::uri(),
            database_name: DatabaseConfig::database_name(),
            database_timeout: DatabaseConfig::timeout(),
            jwt_key_source: JwtConfig::key_source(),
            jwt_expiration_hours: JwtConfig::expiration_hours(),
            jwt_issuer: JwtConfig::issuer(),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            rate_limit: RateLimitConfig::from_env(),
            seed: SeedConfig::from_env(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
