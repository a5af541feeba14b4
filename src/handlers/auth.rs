//! 인증 핸들러
//!
//! `POST /api/auth/token` 하나만 제공합니다. 발급된 토큰은 이후 요청의
//! `Authorization: Bearer <token>` 헤더로 전달합니다.

use actix_web::{post, web, HttpResponse};
use crate::core::AppState;
use crate::domain::dto::auth::{TokenRequest, TokenResponse};
use crate::domain::dto::common::ApiResponse;
use crate::errors::AppError;
use super::validate_request;

/// 이메일/비밀번호로 액세스 토큰을 발급합니다.
///
/// 계정이 없거나 비밀번호가 틀리면 동일하게 401을 반환합니다.
#[post("/token")]
pub async fn issue_token(
    state: web::Data<AppState>,
    payload: web::Json<TokenRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let issued = state.auth.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(TokenResponse::from(issued))))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use crate::domain::dto::users::CreateUserRequest;
    use crate::domain::entities::role::ADMIN;
    use crate::domain::entities::Role;
    use crate::handlers::test_support::TestApp;
    use crate::repositories::records::RecordStore;
    use crate::routes::configure_all_routes;

    async fn app_with_admin() -> TestApp {
        let app = TestApp::new();
        let role = app.roles.store(Role::new(ADMIN)).await.unwrap();
        app.state
            .users
            .create_user(CreateUserRequest {
                name: "admin".to_string(),
                email: "admin@mail.com".to_string(),
                password: "admin-password".to_string(),
                role_id: role.id.unwrap().to_hex(),
            })
            .await
            .unwrap();
        app
    }

    #[actix_web::test]
    async fn test_token_grants_access_to_admin_routes() {
        let app = app_with_admin().await;
        let service = test::init_service(
            App::new()
                .app_data(app.state())
                .app_data(app.token_data())
                .configure(configure_all_routes),
        )
        .await;

        let login = test::TestRequest::post()
            .uri("/api/auth/token")
            .set_json(json!({ "email": "admin@mail.com", "password": "admin-password" }))
            .to_request();
        let response = test::call_service(&service, login).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["data"]["token_type"], "Bearer");
        let token = body["data"]["token"].as_str().unwrap().to_string();

        let claims = app.tokens.verify(&token).unwrap();
        assert_eq!(claims.user_name, "admin");
        assert_eq!(claims.role_name, ADMIN);

        let delete = test::TestRequest::delete()
            .uri(&format!("/api/books/{}", mongodb::bson::oid::ObjectId::new().to_hex()))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        // 인가는 통과하고 대상 도서가 없어 404
        assert_eq!(test::call_service(&service, delete).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_bad_credentials_are_unauthorized() {
        let app = app_with_admin().await;
        let service = test::init_service(
            App::new()
                .app_data(app.state())
                .app_data(app.token_data())
                .configure(configure_all_routes),
        )
        .await;

        for (email, password) in [("admin@mail.com", "wrong"), ("ghost@mail.com", "admin-password")] {
            let request = test::TestRequest::post()
                .uri("/api/auth/token")
                .set_json(json!({ "email": email, "password": password }))
                .to_request();
            let response = test::call_service(&service, request).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let body: Value = test::read_body_json(response).await;
            assert_eq!(body["message"], "Authentication error: invalid email or password");
        }

        let malformed = test::TestRequest::post()
            .uri("/api/auth/token")
            .set_json(json!({ "email": "not-an-email", "password": "" }))
            .to_request();
        assert_eq!(test::call_service(&service, malformed).await.status(), StatusCode::BAD_REQUEST);
    }
}
