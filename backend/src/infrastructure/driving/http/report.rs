use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tera::Context;

use crate::domain::reporting;
use crate::infrastructure::driving::http::render_page;
use crate::infrastructure::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/report/:report_token", get(report_page))
}

async fn report_page(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    let report = match state.report_repo.find_by_token(&token).await {
        Ok(Some(report)) => report,
        Ok(None) => return (StatusCode::NOT_FOUND, "Report not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load report");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    let survey = match state.survey_repo.find_by_id(&report.survey_id).await {
        Ok(Some(survey)) => survey,
        Ok(None) => return (StatusCode::NOT_FOUND, "Report not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load survey");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    let responses = match state.response_repo.find_by_survey(&survey.id).await {
        Ok(responses) => responses,
        Err(e) => {
            tracing::error!(error = %e, "failed to load responses");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    // Aggregation happens on every view so a freshly submitted response
    // is reflected without regenerating the report.
    let stats = reporting::aggregate(&responses);

    let mut context = Context::new();
    context.insert("survey_title", &survey.title);
    context.insert("leader_name", &survey.leader_name);
    context.insert(
        "generated_at",
        &report.generated_at.format("%B %e, %Y").to_string(),
    );
    context.insert("stats", &stats);
    render_page(&state.templates, "pages/report.html", &context)
}
