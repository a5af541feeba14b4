use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use book_store_backend::config::AppConfig;
use book_store_backend::core::{seed_initial_data, AppState, Stores};
use book_store_backend::db::{indexes::ensure_indexes, Database};
use book_store_backend::errors::AppResult;
use book_store_backend::handlers::{CURSOR_HEADER, MAX_PAGE_HEADER, TOTAL_COUNT_HEADER};
use book_store_backend::routes::configure_all_routes;
use book_store_backend::services::auth::{load_key_pair, TokenService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 서점 백엔드 시작중...");

    let config = AppConfig::from_env();

    let state = build_state(&config).await.map_err(|e| {
        error!("❌ 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(&config, state).await
}

/// 저장소 연결, 인덱스/시드, 서명 키 로딩을 거쳐 애플리케이션 상태를 만듭니다.
///
/// 키가 없거나 서로 맞지 않으면 여기서 실패하며 서버는 시작되지 않습니다.
async fn build_state(config: &AppConfig) -> AppResult<AppState> {
    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(
        &config.mongodb_uri,
        &config.database_name,
        config.database_timeout,
    )
    .await?;

    ensure_indexes(&database).await?;

    let stores = Stores::mongo(&database);
    seed_initial_data(&stores, &config.seed, config.bcrypt_cost).await?;

    let keys = load_key_pair(&config.jwt_key_source, &config.environment)?;
    let tokens = Arc::new(TokenService::new(
        &keys,
        config.jwt_expiration_hours,
        &config.jwt_issuer,
    )?);

    AppState::new(stores, tokens, config.bcrypt_cost)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 적용합니다.
async fn start_http_server(config: &AppConfig, state: AppState) -> io::Result<()> {
    let bind_address = config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("invalid rate limit configuration"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let tokens = web::Data::from(state.tokens.clone());
    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .app_data(tokens.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(config.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 목록 응답의 페이지 헤더를 브라우저에 노출
        .expose_headers(vec![TOTAL_COUNT_HEADER, MAX_PAGE_HEADER, CURSOR_HEADER])
        .max_age(3600)
}
