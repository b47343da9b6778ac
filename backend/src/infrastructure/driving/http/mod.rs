use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use axum::Router;
use serde_json::json;
use tera::{Context, Tera};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::application::errors::OpError;
use crate::infrastructure::AppState;

pub mod admin;
pub mod api;
pub mod middleware;
pub mod report;
pub mod survey;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(admin::routes())
        .merge(survey::routes())
        .merge(report::routes())
        .merge(api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Maps application errors onto JSON responses. Storage details stay in
/// the logs, never in the body.
pub(crate) fn error_response(err: OpError) -> Response {
    match err {
        OpError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": errors.to_string(),
                "fields": errors.fields(),
            })),
        )
            .into_response(),
        OpError::Rejected(message) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": message })),
        )
            .into_response(),
        OpError::NotFound(message) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": message })),
        )
            .into_response(),
        OpError::Storage(message) => {
            tracing::error!(error = %message, "storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}

pub(crate) fn render_page(templates: &Tera, name: &str, context: &Context) -> Response {
    match templates.render(name, context) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(template = name, error = %e, "template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
