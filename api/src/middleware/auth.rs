//! JWT authentication middleware.
//!
//! Extracts the bearer token from the Authorization header, validates it
//! with the token service, and injects the authenticated user id into
//! request extensions. Handlers receive it through the `AuthUser`
//! extractor.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use fk_core::errors::{DomainError, TokenError};
use fk_core::services::token::TokenService;

use crate::handlers::ApiError;

/// The authenticated user id, injected by `JwtAuth`
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthUser>().copied();
        ready(user.ok_or_else(|| {
            ApiError(DomainError::Token(TokenError::InvalidToken)).into()
        }))
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    tokens: Arc<TokenService>,
}

impl JwtAuth {
    /// Create a middleware factory around a token service
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = Arc::clone(&self.tokens);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let res = req
                        .error_response(ApiError(DomainError::Token(TokenError::InvalidToken)));
                    return Ok(res.map_into_right_body());
                }
            };

            let user_id = match tokens.validate(&token) {
                Ok(user_id) => user_id,
                Err(e) => {
                    return Ok(req.error_response(ApiError(e)).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthUser(user_id));
            service.call(req).await.map(|res| res.map_into_left_body())
        })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
