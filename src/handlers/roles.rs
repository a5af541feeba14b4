//! 역할 조회 핸들러 (읽기 전용)

use actix_web::{get, web, HttpResponse};
use crate::core::AppState;
use crate::domain::dto::common::{ApiResponse, ListQuery};
use crate::domain::dto::roles::RoleResponse;
use crate::errors::AppError;
use crate::repositories::records::RecordFilter;
use crate::utils::string_utils::parse_object_id;
use super::{paginated, validate_request};

#[get("")]
pub async fn fetch_roles(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*query)?;

    let filter = query
        .q
        .as_deref()
        .map(|name| RecordFilter::contains("name", name))
        .unwrap_or(RecordFilter::All);
    let request = query.page_request();
    let (page, total) = state.roles.fetch(&filter, request).await?;

    Ok(paginated("success", page.map(RoleResponse::from), total, request))
}

#[get("/{role_id}")]
pub async fn get_role(
    state: web::Data<AppState>,
    role_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_object_id(&role_id, "role_id")?;
    let role = state.roles.get(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(RoleResponse::from(role))))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use crate::domain::entities::role::{ADMIN, EMPLOYEE};
    use crate::domain::entities::Role;
    use crate::handlers::test_support::TestApp;
    use crate::repositories::records::RecordStore;
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_roles_are_listed_publicly() {
        let app = TestApp::new();
        app.roles.store(Role::new(ADMIN)).await.unwrap();
        app.roles.store(Role::new(EMPLOYEE)).await.unwrap();
        let service = test::init_service(
            App::new()
                .app_data(app.state())
                .app_data(app.token_data())
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/api/roles").to_request();
        let response = test::call_service(&service, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get("X-Total-Count").unwrap(), "2");
        assert!(response.headers().get("X-Cursor").is_none());

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["data"][0]["name"], EMPLOYEE);
    }

    #[actix_web::test]
    async fn test_roles_cannot_be_created() {
        let app = TestApp::new();
        let service = test::init_service(
            App::new()
                .app_data(app.state())
                .app_data(app.token_data())
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/roles")
            .insert_header(("Authorization", app.bearer(ADMIN)))
            .set_json(serde_json::json!({ "name": "auditor" }))
            .to_request();
        let response = test::call_service(&service, request).await;

        assert!(response.status().is_client_error());
        assert_eq!(app.roles.len(), 0);
    }
}
