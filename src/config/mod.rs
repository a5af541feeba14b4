//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 읽어옵니다.
//! 설정값은 `main`에서 한 번 읽혀 각 서비스의 생성자로 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, Rate Limiting, 초기 데이터 설정
//! - [`auth_config`] - JWT 서명 키와 토큰 수명 설정
//! - [`app_config`] - 위 설정을 한 번에 읽어 모은 [`AppConfig`]
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="book_store"
//!
//! # JWT 설정
//! export JWT_PRIVATE_KEY_PATH="./secrets/jwt_private_key.pem"
//! export JWT_PUBLIC_KEY_PATH="./secrets/jwt_public_key.pem"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 환경 및 보안
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;
pub mod app_config;

pub use data_config::*;
pub use auth_config::*;
pub use app_config::AppConfig;
