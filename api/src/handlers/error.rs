//! Rendering of domain errors into HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::header,
    Error, HttpRequest, HttpResponse,
};
use chrono::{DateTime, Utc};
use ov_core::errors::{DomainError, ValidationError, INTERNAL_ERROR_MESSAGE};
use ov_shared::config::Environment;
use ov_shared::errors::{
    error_codes, FieldError, RateLimitResponse, StatusErrorResponse, ValidationErrorResponse,
};

use crate::middleware::client_ip::client_address;

const MALFORMED_BODY_MESSAGE: &str = "Request body must be a JSON object";

/// Request facts attached to error logs
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub environment: Environment,
    pub client: String,
    pub method: String,
    pub path: String,
    pub user_agent: Option<String>,
}

impl ErrorContext {
    pub fn from_request(req: &HttpRequest, environment: Environment, trust_proxy: bool) -> Self {
        Self {
            environment,
            client: client_address(req, trust_proxy),
            method: req.method().to_string(),
            path: req.path().to_string(),
            user_agent: req
                .headers()
                .get(header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .map(String::from),
        }
    }
}

/// Map a domain error to its HTTP response
pub fn handle_domain_error(error: DomainError, ctx: &ErrorContext) -> HttpResponse {
    match error {
        DomainError::Validation(validation) => {
            tracing::debug!(
                event = "verification_invalid",
                client = %ctx.client,
                reason = %validation,
                "Verification request failed validation"
            );
            HttpResponse::BadRequest().json(ValidationErrorResponse::new(
                validation.into_field_errors(),
            ))
        }
        DomainError::VerificationFailed => {
            tracing::info!(
                event = "verification_rejected",
                client = %ctx.client,
                "Verification code rejected"
            );
            HttpResponse::BadRequest().json(StatusErrorResponse::new(error.to_string()))
        }
        DomainError::RateLimited { reset_at, .. } => {
            let retry_after = retry_after_seconds(reset_at, Utc::now());
            HttpResponse::TooManyRequests()
                .insert_header((header::RETRY_AFTER, retry_after.to_string()))
                .json(RateLimitResponse::new(error.to_string()))
        }
        DomainError::Internal { ref message } => {
            tracing::error!(
                event = "internal_error",
                error = %message,
                client = %ctx.client,
                method = %ctx.method,
                path = %ctx.path,
                user_agent = ctx.user_agent.as_deref().unwrap_or("-"),
                "Unexpected error while handling request"
            );
            let mut body = StatusErrorResponse::new(INTERNAL_ERROR_MESSAGE);
            if ctx.environment.exposes_error_detail() {
                body = body.with_detail(error.to_string());
            }
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Whole seconds until `reset_at`, rounded up and never below one
fn retry_after_seconds(reset_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (reset_at - now).num_milliseconds().max(0);
    ((millis + 999) / 1000).max(1)
}

/// Answer undecodable JSON bodies with a validation-shaped 400
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::debug!(
        event = "malformed_body",
        path = %req.path(),
        error = %err,
        "Request body could not be decoded"
    );
    let validation = ValidationError::new(vec![FieldError::new(
        "body",
        error_codes::MALFORMED_BODY,
        MALFORMED_BODY_MESSAGE,
    )]);
    let response =
        HttpResponse::BadRequest().json(ValidationErrorResponse::new(validation.into_field_errors()));
    InternalError::from_response(err, response).into()
}
