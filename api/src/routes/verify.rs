use actix_web::{web, HttpRequest, HttpResponse};
use ov_core::errors::ValidationError;
use ov_shared::types::VerifyResponse;
use validator::Validate;

use crate::app::AppState;
use crate::dto::VerifyCodeRequest;
use crate::handlers::error::{handle_domain_error, ErrorContext};

/// Handler for POST {API_PREFIX}/verify
///
/// # Request Body
///
/// ```json
/// { "code": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "status": "success", "message": "Verification Successful" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed code (with `errors`) or rejected code
/// - 429 Too Many Requests: per-client quota exhausted (set by the rate limit middleware)
/// - 500 Internal Server Error: rate limit store failure
pub async fn verify_code(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse {
    let ctx = ErrorContext::from_request(
        &req,
        state.config.environment,
        state.config.server.trust_proxy,
    );
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        let error = ValidationError::new(request.field_errors(&errors));
        return handle_domain_error(error.into(), &ctx);
    }

    match state.verification.verify(&request.code) {
        Ok(result) => {
            tracing::info!(
                event = "verification_succeeded",
                client = %ctx.client,
                "Verification code accepted"
            );
            HttpResponse::Ok().json(VerifyResponse::success(result.message))
        }
        Err(error) => handle_domain_error(error, &ctx),
    }
}
