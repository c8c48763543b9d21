//! Rate limiting middleware for the verify endpoint
//!
//! Every request counts against the client's fixed-window quota before the
//! body is read. Admitted responses carry `X-RateLimit-*` headers; rejected
//! requests get a 429 with `Retry-After`.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use ov_core::errors::DomainError;
use ov_core::services::{RateLimitDecision, RateLimiter};
use ov_shared::config::Environment;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::{handle_domain_error, ErrorContext};
use crate::middleware::client_ip::client_address;

const LIMIT_HEADER: &str = "x-ratelimit-limit";
const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate limiter middleware factory
#[derive(Clone)]
pub struct VerifyRateLimit {
    limiter: Arc<RateLimiter>,
    trust_proxy: bool,
    environment: Environment,
}

impl VerifyRateLimit {
    pub fn new(limiter: Arc<RateLimiter>, trust_proxy: bool, environment: Environment) -> Self {
        Self {
            limiter,
            trust_proxy,
            environment,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for VerifyRateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = VerifyRateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(VerifyRateLimitMiddleware {
            service: Rc::new(service),
            limiter: Arc::clone(&self.limiter),
            trust_proxy: self.trust_proxy,
            environment: self.environment,
        }))
    }
}

/// Rate limiter middleware service
pub struct VerifyRateLimitMiddleware<S> {
    service: Rc<S>,
    limiter: Arc<RateLimiter>,
    trust_proxy: bool,
    environment: Environment,
}

impl<S, B> Service<ServiceRequest> for VerifyRateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let limiter = Arc::clone(&self.limiter);
        let trust_proxy = self.trust_proxy;
        let environment = self.environment;

        Box::pin(async move {
            if !limiter.is_enabled() {
                return service.call(req).await.map(|res| res.map_into_left_body());
            }

            let client = client_address(req.request(), trust_proxy);
            match limiter.check(&client).await {
                Ok(decision) => {
                    let mut response = service.call(req).await?.map_into_left_body();
                    insert_quota_headers(&mut response, &decision);
                    Ok(response)
                }
                Err(error) => {
                    let quota = match &error {
                        DomainError::RateLimited {
                            limit, reset_at, ..
                        } => Some(RateLimitDecision {
                            limit: *limit,
                            remaining: 0,
                            reset_at: *reset_at,
                        }),
                        _ => None,
                    };
                    let ctx = ErrorContext::from_request(req.request(), environment, trust_proxy);
                    let mut response =
                        req.into_response(handle_domain_error(error, &ctx)).map_into_right_body();
                    if let Some(decision) = quota {
                        insert_quota_headers(&mut response, &decision);
                    }
                    Ok(response)
                }
            }
        })
    }
}

fn insert_quota_headers<B>(response: &mut ServiceResponse<B>, decision: &RateLimitDecision) {
    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static(LIMIT_HEADER),
        HeaderValue::from(decision.limit),
    );
    headers.insert(
        HeaderName::from_static(REMAINING_HEADER),
        HeaderValue::from(decision.remaining),
    );
    headers.insert(
        HeaderName::from_static(RESET_HEADER),
        HeaderValue::from(decision.reset_at.timestamp()),
    );
}
