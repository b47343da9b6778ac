use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::application::admin::commands::{
    create_survey, dashboard, generate_report, list_surveys, login, send_report, survey_detail,
};
use crate::infrastructure::driving::http::middleware::auth::AuthenticatedAdmin;
use crate::infrastructure::driving::http::error_response;
use crate::infrastructure::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(login_handler))
        .route("/api/admin/dashboard", get(dashboard_handler))
        .route("/api/admin/surveys", get(list_handler).post(create_handler))
        .route("/api/admin/surveys/:survey_id", get(detail_handler))
        .route(
            "/api/admin/surveys/:survey_id/send-report",
            post(send_report_handler),
        )
        .route(
            "/api/admin/generate-report/:survey_id",
            post(generate_report_handler),
        )
}

#[derive(Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = login::LoginCommand {
        username: req.username,
        password: req.password,
    };
    match login::execute(&*state.user_repo, &state.settings.jwt_secret, cmd).await {
        Ok(result) => Json(json!({
            "token": result.token,
            "display_name": result.display_name,
        }))
        .into_response(),
        Err(message) => {
            (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
        }
    }
}

async fn dashboard_handler(State(state): State<AppState>, _admin: AuthenticatedAdmin) -> Response {
    match dashboard::execute(&*state.survey_repo).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
struct ListQuery {
    status: Option<String>,
}

async fn list_handler(
    State(state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = query
        .status
        .as_deref()
        .and_then(list_surveys::StatusFilter::parse);
    match list_surveys::execute(
        &*state.survey_repo,
        &*state.invitation_repo,
        &*state.response_repo,
        filter,
    )
    .await
    {
        Ok(overviews) => Json(overviews).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
struct CreateSurveyRequest {
    title: String,
    leader_name: String,
    leader_email: String,
}

async fn create_handler(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Json(req): Json<CreateSurveyRequest>,
) -> Response {
    // The email template greets the leader with the admin's display name,
    // which the token does not carry.
    let display_name = match state.user_repo.find_by_id(&admin.id).await {
        Ok(Some(user)) => user.display_name,
        Ok(None) => admin.username.clone(),
        Err(e) => return error_response(crate::application::errors::OpError::Storage(e)),
    };

    let cmd = create_survey::CreateSurveyCommand {
        admin_id: admin.id,
        admin_display_name: display_name,
        title: req.title,
        leader_name: req.leader_name,
        leader_email: req.leader_email,
    };
    match create_survey::execute(
        &*state.survey_repo,
        &*state.mailer,
        &state.templates,
        &state.settings.base_url,
        cmd,
    )
    .await
    {
        Ok(result) => {
            let message = if result.email_sent {
                "Survey created and self-assessment email sent to the leader."
            } else {
                "Survey created, but the self-assessment email could not be sent."
            };
            Json(json!({
                "survey_id": result.survey_id,
                "leader_token": result.leader_token,
                "email_sent": result.email_sent,
                "message": message,
            }))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}

async fn detail_handler(
    State(state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(survey_id): Path<Uuid>,
) -> Response {
    match survey_detail::execute(
        &*state.survey_repo,
        &*state.invitation_repo,
        &*state.response_repo,
        &*state.report_repo,
        &survey_id,
    )
    .await
    {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => error_response(e),
    }
}

async fn generate_report_handler(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(survey_id): Path<Uuid>,
) -> Response {
    match generate_report::execute(
        &*state.survey_repo,
        &*state.report_repo,
        admin.id,
        &survey_id,
        &state.settings.base_url,
    )
    .await
    {
        Ok(result) => Json(json!({
            "success": true,
            "report_token": result.report_token,
            "report_url": result.report_url,
            "created": result.created,
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}

async fn send_report_handler(
    State(state): State<AppState>,
    _admin: AuthenticatedAdmin,
    Path(survey_id): Path<Uuid>,
) -> Response {
    match send_report::execute(
        &*state.survey_repo,
        &*state.report_repo,
        &*state.mailer,
        &state.templates,
        &state.settings.base_url,
        &survey_id,
    )
    .await
    {
        Ok(result) => {
            let message = if result.sent {
                format!("Report emailed to {}", result.leader_email)
            } else {
                format!("Failed to email report to {}", result.leader_email)
            };
            Json(json!({
                "success": result.sent,
                "message": message,
            }))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}
