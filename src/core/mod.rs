//! # Core Module
//!
//! 애플리케이션 구성 요소를 조립하는 모듈입니다.
//!
//! ### [`state`] - 애플리케이션 상태
//! - **Stores**: 리포지토리 trait 객체 묶음 (MongoDB 또는 테스트용 메모리 구현)
//! - **AppState**: 서비스 묶음. `main`에서 한 번 만들어 `web::Data`로 공유
//!
//! ### [`seed`] - 초기 데이터
//! - 기본 역할과 첫 관리자 계정
//!
//! 전역 컨테이너 없이 생성자 주입만 사용하므로, 테스트에서는
//! 같은 조립 경로에 메모리 저장소를 넣어 HTTP 계층까지 검증할 수 있습니다.
//!
//! ```rust,ignore
//! let stores = Stores::mongo(&database);
//! let state = AppState::new(stores, tokens, PasswordConfig::bcrypt_cost())?;
//!
//! App::new()
//!     .app_data(web::Data::new(state.clone()))
//!     .app_data(web::Data::from(state.tokens.clone()))
//!     .configure(configure_all_routes)
//! ```

pub mod seed;
pub mod state;

pub use seed::seed_initial_data;
pub use state::{AppState, Stores};
