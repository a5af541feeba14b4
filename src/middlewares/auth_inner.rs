//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: RequiredRole,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate(&req) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("🚫 인증 실패: {} {} ({})", req.method(), req.path(), err);
                    return Ok(reject(req, err));
                }
            };

            if !required_role.is_satisfied(&user.role_name) {
                log::warn!(
                    "🚫 권한 부족: 사용자 {} ({}), 필요 권한: {:?}",
                    user.user_id, user.role_name, required_role
                );
                let err = AppError::AuthorizationError(
                    "this role is not allowed to access this resource".to_string(),
                );
                return Ok(reject(req, err));
            }

            log::debug!("인증 성공: 사용자 ID {}", user.user_id);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 Bearer 토큰을 검증해 사용자 정보를 만듭니다.
fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("token service is not registered".to_string()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("missing authorization header".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify(token)?;

    Ok(AuthenticatedUser::from(claims))
}

/// 핸들러를 호출하지 않고 에러 응답으로 요청을 종료합니다.
fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
