//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, Rate Limiting, 초기 데이터 관련 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 개발용 편의 기능(키 자동 생성 등)이 허용되는 환경인지 확인합니다.
    pub fn allows_dev_fallbacks(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그대로 사용하고,
    /// 그렇지 않으면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref())
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    fn parse_cost(raw: Option<&str>) -> Option<u32> {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|workers| workers.parse().ok())
            .filter(|workers: &usize| *workers > 0)
            .unwrap_or(4)
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름. 기본값: "book_store_dev"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "book_store_dev".to_string())
    }

    /// 연결 및 서버 선택 타임아웃. 기본값: 5초
    pub fn timeout() -> Duration {
        let secs = env::var("DB_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(5);

        Duration::from_secs(secs)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self::parse(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        )
    }

    fn parse(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = per_second
            .map(|raw| {
                raw.parse::<u64>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                    100
                })
            })
            .unwrap_or(100);

        let burst_size = burst_size
            .map(|raw| {
                raw.parse::<u32>().unwrap_or_else(|e| {
                    log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                    200
                })
            })
            .unwrap_or(200);

        Self { per_second, burst_size }
    }
}

/// 초기 관리자 계정 설정
///
/// 사용자 컬렉션이 비어 있을 때만 사용됩니다.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self {
            admin_name: env::var("SEED_ADMIN_NAME").unwrap_or_else(|_| "admin".to_string()),
            admin_email: env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@mail.com".to_string()),
            admin_password: env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
        }
    }
}
