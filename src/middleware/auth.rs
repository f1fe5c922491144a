use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header,
    web, Error, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::session::{SessionStore, SESSION_COOKIE};

/// Gate for routes that require an authenticated identity. A missing or
/// unknown session token redirects to the login entry point rather than
/// failing with an authorization error (soft-redirect policy).
pub struct SessionGate;

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGateService { service }))
    }
}

pub struct SessionGateService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());
        let sessions = req.app_data::<web::Data<SessionStore>>().cloned();

        let authenticated = match (token, sessions) {
            (Some(token), Some(store)) => store.username_for(&token).is_some(),
            _ => false,
        };

        if authenticated {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await });
        }

        log::info!("🔒 {} without a live session, redirecting to /login", req.path());

        Box::pin(async move {
            let redirect = HttpResponse::Found()
                .append_header((header::LOCATION, "/login"))
                .finish();
            Err(InternalError::from_response("authentication required", redirect).into())
        })
    }
}
