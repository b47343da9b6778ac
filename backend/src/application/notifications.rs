//! Composes and dispatches the three outbound messages: participant
//! invitations, the leader self-assessment request, and the report-ready
//! notice. Transport failures are logged and reported as `false`; callers
//! decide whether that degrades their operation.

use crate::application::ports::{Mailer, OutgoingEmail};
use crate::domain::entities::{Invitation, Survey, SurveyReport};
use tera::{Context, Tera};

fn public_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Plain-text fallback: drop markup, keep the text content.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    // Squeeze the indentation whitespace the templates carry.
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    lines.retain(|line| !line.is_empty());
    lines.join("\n")
}

async fn render_and_send(
    mailer: &dyn Mailer,
    templates: &Tera,
    template: &str,
    context: &Context,
    to: &str,
    subject: String,
) -> bool {
    let html_body = match templates.render(template, context) {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(template, error = %e, "failed to render email template");
            return false;
        }
    };
    let email = OutgoingEmail {
        to: to.to_string(),
        subject,
        text_body: strip_tags(&html_body),
        html_body,
    };
    match mailer.send(&email).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(to, error = %e, "failed to send email");
            false
        }
    }
}

/// Invitation to an invited participant, carrying the tokenized survey URL
/// and the expiry date.
pub async fn send_invitation_email(
    mailer: &dyn Mailer,
    templates: &Tera,
    base_url: &str,
    survey: &Survey,
    invitation: &Invitation,
) -> bool {
    let mut context = Context::new();
    context.insert("leader_name", &survey.leader_name);
    context.insert("email", invitation.email.as_str());
    context.insert("survey_url", &public_url(base_url, &format!("/survey/{}", invitation.token)));
    context.insert("expires_at", &invitation.expires_at.format("%B %e, %Y").to_string());

    render_and_send(
        mailer,
        templates,
        "emails/invitation.html",
        &context,
        invitation.email.as_str(),
        format!("Leadership Assessment Survey for {}", survey.leader_name),
    )
    .await
}

/// Self-assessment request sent to the leader when a survey is created.
pub async fn send_self_assessment_email(
    mailer: &dyn Mailer,
    templates: &Tera,
    base_url: &str,
    survey: &Survey,
    created_by: &str,
) -> bool {
    let mut context = Context::new();
    context.insert("leader_name", &survey.leader_name);
    context.insert("survey_title", &survey.title);
    context.insert("created_by", created_by);
    context.insert(
        "self_assessment_url",
        &public_url(base_url, &format!("/survey/leader/{}", survey.leader_token)),
    );

    render_and_send(
        mailer,
        templates,
        "emails/self_assessment.html",
        &context,
        survey.leader_email.as_str(),
        format!("Complete Your Leadership Self-Assessment - {}", survey.title),
    )
    .await
}

/// Report-ready notice with the tokenized report URL.
pub async fn send_report_email(
    mailer: &dyn Mailer,
    templates: &Tera,
    base_url: &str,
    survey: &Survey,
    report: &SurveyReport,
) -> bool {
    let mut context = Context::new();
    context.insert("leader_name", &survey.leader_name);
    context.insert("survey_title", &survey.title);
    context.insert("report_url", &public_url(base_url, &format!("/report/{}", report.report_token)));

    render_and_send(
        mailer,
        templates,
        "emails/report_ready.html",
        &context,
        survey.leader_email.as_str(),
        "Your Leadership Assessment Report is Ready".to_string(),
    )
    .await
}
