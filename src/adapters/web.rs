use crate::core::lookup::LookupService;
use crate::core::{AddressResolver, LookupError};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

fn status_for(err: &LookupError) -> StatusCode {
    match err {
        LookupError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
        LookupError::UpstreamUnavailable { .. } | LookupError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status_for(&self), Json(body)).into_response()
    }
}

/// Routes of the lookup service, sharing one [`LookupService`] across requests.
pub fn router<R>(service: Arc<LookupService<R>>) -> Router
where
    R: AddressResolver + 'static,
{
    Router::new()
        .route("/address/{postal_code}", get(get_address::<R>))
        .route("/health", get(health))
        .fallback(fallback)
        .with_state(service)
}

async fn get_address<R>(
    State(service): State<Arc<LookupService<R>>>,
    postal_code: Result<Path<String>, PathRejection>,
) -> Response
where
    R: AddressResolver + 'static,
{
    let postal_code = match postal_code {
        Ok(Path(postal_code)) => postal_code,
        Err(rejection) => {
            tracing::debug!("Rejected address path: {}", rejection.body_text());
            return LookupError::InvalidInput {
                input: String::new(),
            }
            .into_response();
        }
    };

    match service.lookup(&postal_code).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Empty or multi-segment postal codes under `/address` are malformed input.
async fn fallback(uri: Uri) -> Response {
    let path = uri.path();
    if path == "/address" || path.starts_with("/address/") {
        return LookupError::InvalidInput {
            input: path.to_string(),
        }
        .into_response();
    }
    (StatusCode::NOT_FOUND, Json(ErrorBody { error: "not found" })).into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
