//! 라우트 설정
//!
//! 리소스별 스코프를 등록합니다. 역할 제한은 각 핸들러의 `wrap` 속성에서
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)로 지정합니다.

use actix_web::web;
use serde_json::json;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_book_routes(cfg);
    configure_customer_routes(cfg);
    configure_user_routes(cfg);
    configure_role_routes(cfg);
    configure_transaction_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/auth").service(handlers::auth::issue_token));
}

fn configure_book_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/books")
            .service(handlers::books::fetch_books)
            .service(handlers::books::get_book)
            .service(handlers::books::create_book)
            .service(handlers::books::update_book)
            .service(handlers::books::delete_book),
    );
}

fn configure_customer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/customers")
            .service(handlers::customers::fetch_customers)
            .service(handlers::customers::get_customer)
            .service(handlers::customers::create_customer)
            .service(handlers::customers::update_customer)
            .service(handlers::customers::delete_customer),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::fetch_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_role_routes(cfg: &mut web::ServiceConfig) {
    // 역할은 시드로만 생성됨
    cfg.service(
        web::scope("/api/roles")
            .service(handlers::roles::fetch_roles)
            .service(handlers::roles::get_role),
    );
}

fn configure_transaction_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/transactions")
            .service(handlers::transactions::fetch_transactions)
            .service(handlers::transactions::get_transaction)
            .service(handlers::transactions::place_transaction)
            .service(handlers::transactions::update_transaction)
            .service(handlers::transactions::delete_transaction),
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "book_store_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
