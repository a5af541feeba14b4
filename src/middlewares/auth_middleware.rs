//! JWT 인증/인가 미들웨어
//!
//! 요청 파이프라인에서 토큰을 검증하고, 라우트가 요구하는 역할인지 확인합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 접근에 필요한 역할
    required_role: RequiredRole,
}

impl AuthMiddleware {
    pub fn new(required_role: RequiredRole) -> Self {
        Self { required_role }
    }

    /// 특정 역할만 허용
    pub fn required_with_role(role: &str) -> Self {
        Self::new(RequiredRole::Single(role.to_string()))
    }

    /// 나열된 역할 중 하나면 허용
    pub fn required_with_roles(roles: &[&str]) -> Self {
        Self::new(RequiredRole::Any(roles.iter().map(|role| role.to_string()).collect()))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}
