use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::core::{build_prompt, CompatibilityError, CompatibilityEvaluator, ProviderError};
use crate::models::{ErrorResponse, EvaluateRequest, EvaluateResponse, HealthResponse, PromptResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: CompatibilityEvaluator,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/evaluate", web::post().to(evaluate))
        .route("/compatibility/prompt", web::post().to(preview_prompt));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.evaluator.model().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Evaluate compatibility endpoint
///
/// POST /api/v1/compatibility/evaluate
///
/// Request body (each side is either text or a profile sheet):
/// ```json
/// {
///   "profile1": "Name: Ana\nAge: 29\n...",
///   "profile2": { "displayName": "Ben", "age": 31, "interests": ["jazz"] }
/// }
/// ```
async fn evaluate(
    state: web::Data<AppState>,
    req: web::Json<EvaluateRequest>,
) -> impl Responder {
    let request = match req.into_inner().into_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::info!("Rejected compatibility request: {}", e);
            return error_response(&e);
        }
    };

    tracing::info!(
        "Evaluating compatibility (profile sizes: {} / {} bytes)",
        request.profile1.as_str().len(),
        request.profile2.as_str().len()
    );

    match state.evaluator.evaluate(request).await {
        Ok(result) => {
            tracing::info!(
                "Compatibility evaluated: global={}, love={}, friendship={}, carnal={}",
                result.global,
                result.love,
                result.friendship,
                result.carnal
            );
            HttpResponse::Ok().json(EvaluateResponse {
                evaluation_id: uuid::Uuid::new_v4().to_string(),
                result,
                model: state.evaluator.model().to_string(),
                evaluated_at: chrono::Utc::now(),
            })
        }
        Err(e) => error_response(&e),
    }
}

/// Prompt preview endpoint
///
/// POST /api/v1/compatibility/prompt
///
/// Returns the exact instruction text that would be sent to the model.
async fn preview_prompt(req: web::Json<EvaluateRequest>) -> impl Responder {
    let prompt = req
        .into_inner()
        .into_request()
        .and_then(|r| build_prompt(r.profile1.as_str(), r.profile2.as_str()));

    match prompt {
        Ok(prompt) => HttpResponse::Ok().json(PromptResponse { prompt }),
        Err(e) => error_response(&e),
    }
}

/// HTTP status for each failure kind
///
/// Bad input is the caller's fault (400). Anything the provider or the model
/// got wrong is an upstream failure (502), except timeouts (504).
pub fn status_for(err: &CompatibilityError) -> StatusCode {
    match err {
        CompatibilityError::Argument(_) => StatusCode::BAD_REQUEST,
        CompatibilityError::Provider(ProviderError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
        CompatibilityError::Provider(_)
        | CompatibilityError::MalformedResponse(_)
        | CompatibilityError::MissingField(_)
        | CompatibilityError::OutOfRangeScore { .. }
        | CompatibilityError::EmptyInsight => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(err: &CompatibilityError) -> HttpResponse {
    let status = status_for(err);
    HttpResponse::build(status).json(ErrorResponse {
        error: err.kind().to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}
