use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use crate::application::forms::SubmitSurveyRequest;
use crate::application::{leader, participant};
use crate::infrastructure::driving::http::error_response;
use crate::infrastructure::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/survey/:token/submit", post(submit_handler))
}

/// Single submission endpoint for both audiences. A body carrying an
/// `invitation_token` is a participant response; otherwise the path
/// token is treated as the leader's self-assessment link.
async fn submit_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(request): Json<SubmitSurveyRequest>,
) -> Response {
    let result = match request.invitation_token.clone() {
        Some(invitation_token) => {
            participant::commands::submit_response::execute(
                &*state.invitation_repo,
                &*state.response_repo,
                &invitation_token,
                &request,
            )
            .await
        }
        None => {
            leader::commands::submit_self_assessment::execute(
                &*state.survey_repo,
                &*state.response_repo,
                &token,
                &request,
            )
            .await
        }
    };

    match result {
        Ok(()) => Json(json!({
            "success": true,
            "message": "Survey submitted successfully",
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}
