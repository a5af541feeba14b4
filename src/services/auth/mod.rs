//! 인증 서비스 모듈
//!
//! RS256 서명 JWT의 발급과 검증, 이메일/비밀번호 로그인을 담당합니다.
//!
//! # Features
//!
//! - 시작 시 RSA 키 쌍 로딩 및 검증 ([`rsa_keys`])
//! - 액세스 토큰 발급/검증 ([`TokenService`])
//! - 로그인 시 타이밍 차이를 줄이는 더미 해시 검증 ([`AuthService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! let keys = load_key_pair(&JwtConfig::key_source(), &Environment::current())?;
//! let tokens = Arc::new(TokenService::new(&keys, JwtConfig::expiration_hours(), &JwtConfig::issuer())?);
//! let auth = AuthService::new(credentials, tokens.clone(), PasswordConfig::bcrypt_cost())?;
//!
//! let issued = auth.login("admin@mail.com", "admin").await?;
//! let claims = tokens.verify(&issued.token)?;
//! ```

pub mod auth_service;
pub mod rsa_keys;
pub mod token_service;

pub use auth_service::AuthService;
pub use rsa_keys::{load_key_pair, JwtKeyPair};
pub use token_service::TokenService;
