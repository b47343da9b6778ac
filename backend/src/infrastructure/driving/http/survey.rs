use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use tera::Context;

use crate::application::errors::OpError;
use crate::application::leader::commands::send_invitations::{
    self, SendInvitationsCommand, SendInvitationsResult,
};
use crate::domain::catalog;
use crate::domain::entities::{Invitation, Survey};
use crate::domain::value_objects::{LikertScale, Relationship};
use crate::infrastructure::driving::http::render_page;
use crate::infrastructure::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/survey/leader/:token", get(self_assessment_page))
        .route(
            "/survey/leader/:token/dashboard",
            get(leader_dashboard_page).post(send_invitations_handler),
        )
        .route("/survey/:token", get(participant_page))
        .route("/thank-you", get(thank_you_page))
}

/// Context shared by the self-assessment and participant renditions of
/// the survey form.
fn form_context(survey: &Survey, submit_token: &str, is_self_assessment: bool) -> Context {
    let questions: Vec<_> = catalog::question_numbers()
        .map(|number| {
            json!({
                "number": number,
                "field": format!("q{}", number),
                "text": catalog::question_text(number),
            })
        })
        .collect();
    let likert_levels: Vec<_> = LikertScale::ALL
        .iter()
        .map(|level| json!({ "value": level.as_str(), "label": level.label() }))
        .collect();
    let relationships: Vec<_> = Relationship::PARTICIPANT
        .iter()
        .map(|r| json!({ "value": r.as_str(), "label": r.label() }))
        .collect();

    let mut context = Context::new();
    context.insert("survey_title", &survey.title);
    context.insert("leader_name", &survey.leader_name);
    context.insert("is_self_assessment", &is_self_assessment);
    context.insert("submit_token", submit_token);
    context.insert("questions", &questions);
    context.insert("likert_levels", &likert_levels);
    context.insert("relationships", &relationships);
    context.insert("strength_choices", &catalog::STRENGTH_CHOICES);
    context.insert("opportunity_choices", &catalog::OPPORTUNITY_CHOICES);
    context.insert("rankings_per_category", &catalog::RANKINGS_PER_CATEGORY);
    context
}

fn invalid_link_page(state: &AppState) -> Response {
    let mut context = Context::new();
    context.insert("contact_email", &state.settings.smtp.from_address);
    render_page(&state.templates, "pages/invalid_link.html", &context)
}

async fn self_assessment_page(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Response {
    let survey = match state.survey_repo.find_by_leader_token(&token).await {
        Ok(Some(survey)) => survey,
        Ok(None) => return (StatusCode::NOT_FOUND, "Survey not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load survey");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    if survey.leader_completed_self {
        return Redirect::to(&format!("/survey/leader/{}/dashboard", token)).into_response();
    }

    let context = form_context(&survey, survey.leader_token.as_str(), true);
    render_page(&state.templates, "pages/survey_form.html", &context)
}

async fn participant_page(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    let invitation = match state.invitation_repo.find_by_token(&token).await {
        Ok(Some(invitation)) => invitation,
        Ok(None) => return invalid_link_page(&state),
        Err(e) => {
            tracing::error!(error = %e, "failed to load invitation");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    // Used and expired links get the same page as unknown tokens.
    if !invitation.is_valid() {
        return invalid_link_page(&state);
    }

    let survey = match state.survey_repo.find_by_id(&invitation.survey_id).await {
        Ok(Some(survey)) => survey,
        Ok(None) => return invalid_link_page(&state),
        Err(e) => {
            tracing::error!(error = %e, "failed to load survey");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    let context = form_context(&survey, invitation.token.as_str(), false);
    render_page(&state.templates, "pages/survey_form.html", &context)
}

fn invitation_row(invitation: &Invitation) -> serde_json::Value {
    json!({
        "email": invitation.email.as_str(),
        "sent_at": invitation.sent_at.format("%B %e, %Y").to_string(),
        "expires_at": invitation.expires_at.format("%B %e, %Y").to_string(),
        "used": invitation.used,
        "expired": invitation.is_expired(),
    })
}

async fn render_leader_dashboard(
    state: &AppState,
    survey: &Survey,
    messages: Vec<String>,
) -> Response {
    let invitations = match state.invitation_repo.find_by_survey(&survey.id).await {
        Ok(invitations) => invitations,
        Err(e) => {
            tracing::error!(error = %e, "failed to load invitations");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };
    let rows: Vec<_> = invitations.iter().map(invitation_row).collect();

    let mut context = Context::new();
    context.insert("survey_title", &survey.title);
    context.insert("leader_name", &survey.leader_name);
    context.insert("leader_token", survey.leader_token.as_str());
    context.insert("invitations", &rows);
    context.insert("messages", &messages);
    render_page(&state.templates, "pages/leader_dashboard.html", &context)
}

async fn leader_dashboard_page(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Response {
    let survey = match state.survey_repo.find_by_leader_token(&token).await {
        Ok(Some(survey)) => survey,
        Ok(None) => return (StatusCode::NOT_FOUND, "Survey not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load survey");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    if !survey.leader_completed_self {
        return Redirect::to(&format!("/survey/leader/{}", token)).into_response();
    }

    render_leader_dashboard(&state, &survey, Vec::new()).await
}

#[derive(Deserialize)]
struct InvitationForm {
    emails: String,
    #[serde(default)]
    expires_at: Option<String>,
}

/// Accepts RFC 3339 or the `datetime-local` input format; blanks mean
/// the configured default window.
fn parse_expiry(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, String> {
    let raw = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(None),
    };
    if let Ok(parsed) = raw.parse::<DateTime<Utc>>() {
        return Ok(Some(parsed));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .map(|naive| Some(naive.and_utc()))
        .map_err(|_| "Enter a valid expiration date".to_string())
}

fn invitation_messages(outcome: &SendInvitationsResult) -> Vec<String> {
    let mut messages = vec![format!("{} invitation(s) sent.", outcome.created)];
    if !outcome.skipped.is_empty() {
        messages.push(format!(
            "{} address(es) already invited: {}.",
            outcome.skipped.len(),
            outcome.skipped.join(", ")
        ));
    }
    if !outcome.failed.is_empty() {
        messages.push(format!(
            "{} email(s) could not be delivered: {}.",
            outcome.failed.len(),
            outcome.failed.join(", ")
        ));
    }
    messages
}

async fn send_invitations_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Form(form): Form<InvitationForm>,
) -> Response {
    let survey = match state.survey_repo.find_by_leader_token(&token).await {
        Ok(Some(survey)) => survey,
        Ok(None) => return (StatusCode::NOT_FOUND, "Survey not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load survey");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    let expires_at = match parse_expiry(form.expires_at.as_deref()) {
        Ok(expires_at) => expires_at,
        Err(message) => return render_leader_dashboard(&state, &survey, vec![message]).await,
    };

    let cmd = SendInvitationsCommand {
        leader_token: token,
        emails: form.emails,
        expires_at,
    };
    let result = send_invitations::execute(
        &*state.survey_repo,
        &*state.invitation_repo,
        &*state.mailer,
        &state.templates,
        &state.settings.base_url,
        state.settings.invitation_expiry_days,
        cmd,
    )
    .await;

    let messages = match result {
        Ok(outcome) => invitation_messages(&outcome),
        Err(OpError::Validation(errors)) => {
            errors.fields().values().cloned().collect()
        }
        Err(OpError::Rejected(message)) | Err(OpError::NotFound(message)) => vec![message],
        Err(OpError::Storage(e)) => {
            tracing::error!(error = %e, "failed to send invitations");
            vec!["Something went wrong. Please try again.".to_string()]
        }
    };

    render_leader_dashboard(&state, &survey, messages).await
}

async fn thank_you_page(State(state): State<AppState>) -> Response {
    render_page(&state.templates, "pages/thank_you.html", &Context::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invitation_messages_counts_the_skipped_and_failed_lists() {
        let outcome = SendInvitationsResult {
            created: 2,
            skipped: vec!["a@school.org".to_string(), "b@school.org".to_string()],
            failed: vec!["c@school.org".to_string()],
        };

        let messages = invitation_messages(&outcome);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], "2 invitation(s) sent.");
        assert!(messages[1].starts_with("2 address(es) already invited"));
        assert!(messages[1].contains("a@school.org, b@school.org"));
        assert!(messages[2].starts_with("1 email(s) could not be delivered"));
    }

    #[test]
    fn invitation_messages_stay_quiet_when_nothing_was_skipped() {
        let outcome = SendInvitationsResult {
            created: 3,
            ..Default::default()
        };
        assert_eq!(invitation_messages(&outcome), vec!["3 invitation(s) sent."]);
    }

    #[test]
    fn expiry_accepts_both_wire_formats_and_blank() {
        assert_eq!(parse_expiry(None).unwrap(), None);
        assert_eq!(parse_expiry(Some("  ")).unwrap(), None);
        assert!(parse_expiry(Some("2026-09-15T12:30")).unwrap().is_some());
        assert!(parse_expiry(Some("2026-09-15T12:30:00Z")).unwrap().is_some());
        assert!(parse_expiry(Some("next tuesday")).is_err());
    }
}
