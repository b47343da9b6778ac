use crate::application::errors::OpError;
use crate::application::forms::{self, FormErrors};
use crate::application::notifications;
use crate::application::ports::{InvitationRepository, Mailer, SurveyRepository};
use crate::domain::entities::Invitation;
use chrono::{DateTime, Duration, Utc};
use tera::Tera;

pub struct SendInvitationsCommand {
    pub leader_token: String,
    /// Raw textarea content, one address per line.
    pub emails: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct SendInvitationsResult {
    /// Invitations created and successfully emailed.
    pub created: usize,
    /// Addresses already invited to this survey.
    pub skipped: Vec<String>,
    /// Addresses whose invitation was stored but whose email failed.
    pub failed: Vec<String>,
}

pub async fn execute(
    surveys: &dyn SurveyRepository,
    invitations: &dyn InvitationRepository,
    mailer: &dyn Mailer,
    templates: &Tera,
    base_url: &str,
    default_expiry_days: i64,
    cmd: SendInvitationsCommand,
) -> Result<SendInvitationsResult, OpError> {
    let survey = surveys
        .find_by_leader_token(&cmd.leader_token)
        .await
        .map_err(OpError::Storage)?
        .ok_or_else(|| OpError::NotFound("Survey not found".to_string()))?;
    if !survey.leader_completed_self {
        return Err(OpError::Rejected(
            "Complete your self-assessment before inviting participants".to_string(),
        ));
    }

    let emails = forms::parse_email_list(&cmd.emails)?;
    let expires_at = match cmd.expires_at {
        Some(at) if at <= Utc::now() => {
            return Err(FormErrors::single("expires_at", "Expiration must be in the future").into())
        }
        Some(at) => at,
        None => Utc::now() + Duration::days(default_expiry_days),
    };

    let mut result = SendInvitationsResult::default();
    for email in emails {
        if invitations
            .exists_for_email(&survey.id, email.as_str())
            .await
            .map_err(OpError::Storage)?
        {
            tracing::debug!(survey_id = %survey.id, email = %email, "invitation already exists");
            result.skipped.push(email.to_string());
            continue;
        }

        let invitation = Invitation::new(survey.id, email.clone(), expires_at);
        invitations.save(&invitation).await.map_err(OpError::Storage)?;

        if notifications::send_invitation_email(mailer, templates, base_url, &survey, &invitation)
            .await
        {
            result.created += 1;
        } else {
            result.failed.push(email.to_string());
        }
    }

    tracing::info!(
        survey_id = %survey.id,
        created = result.created,
        skipped = result.skipped.len(),
        failed = result.failed.len(),
        "invitations processed"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockInvitationRepository, MockMailer, MockSurveyRepository};
    use crate::domain::entities::Survey;
    use crate::domain::value_objects::Email;
    use crate::infrastructure::templates;
    use uuid::Uuid;

    fn completed_survey() -> Survey {
        let mut survey = Survey::new(
            "Review".into(),
            Uuid::new_v4(),
            "Pat".into(),
            Email::new("pat@school.org").unwrap(),
        );
        survey.mark_self_assessment_complete();
        survey
    }

    fn command(emails: &str) -> SendInvitationsCommand {
        SendInvitationsCommand {
            leader_token: "token".into(),
            emails: emails.into(),
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn duplicate_addresses_are_skipped_not_recreated() {
        let survey = completed_survey();
        let mut surveys = MockSurveyRepository::new();
        surveys
            .expect_find_by_leader_token()
            .returning(move |_| Ok(Some(survey.clone())));
        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_exists_for_email()
            .withf(|_, email| email == "old@school.org")
            .returning(|_, _| Ok(true));
        invitations
            .expect_exists_for_email()
            .returning(|_, _| Ok(false));
        invitations.expect_save().times(1).returning(|_| Ok(()));
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(1).returning(|_| Ok(()));

        let result = execute(
            &surveys,
            &invitations,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            14,
            command("old@school.org\nnew@school.org"),
        )
        .await
        .unwrap();
        assert_eq!(result.created, 1);
        assert_eq!(result.skipped, vec!["old@school.org".to_string()]);
        assert!(result.failed.is_empty());
    }

    #[tokio::test]
    async fn failed_email_is_reported_but_invitation_persists() {
        let survey = completed_survey();
        let mut surveys = MockSurveyRepository::new();
        surveys
            .expect_find_by_leader_token()
            .returning(move |_| Ok(Some(survey.clone())));
        let mut invitations = MockInvitationRepository::new();
        invitations.expect_exists_for_email().returning(|_, _| Ok(false));
        invitations.expect_save().times(1).returning(|_| Ok(()));
        let mut mailer = MockMailer::new();
        mailer.expect_send().returning(|_| Err("smtp down".into()));

        let result = execute(
            &surveys,
            &invitations,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            14,
            command("peer@school.org"),
        )
        .await
        .unwrap();
        assert_eq!(result.created, 0);
        assert_eq!(result.failed, vec!["peer@school.org".to_string()]);
    }

    #[tokio::test]
    async fn self_assessment_must_be_complete_first() {
        let survey = Survey::new(
            "Review".into(),
            Uuid::new_v4(),
            "Pat".into(),
            Email::new("pat@school.org").unwrap(),
        );
        let mut surveys = MockSurveyRepository::new();
        surveys
            .expect_find_by_leader_token()
            .returning(move |_| Ok(Some(survey.clone())));
        let invitations = MockInvitationRepository::new();
        let mailer = MockMailer::new();

        let err = execute(
            &surveys,
            &invitations,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            14,
            command("peer@school.org"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OpError::Rejected(_)));
    }

    #[tokio::test]
    async fn invalid_address_rejects_the_whole_list() {
        let survey = completed_survey();
        let mut surveys = MockSurveyRepository::new();
        surveys
            .expect_find_by_leader_token()
            .returning(move |_| Ok(Some(survey.clone())));
        let invitations = MockInvitationRepository::new();
        let mailer = MockMailer::new();

        let err = execute(
            &surveys,
            &invitations,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            14,
            command("fine@school.org\nbroken"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OpError::Validation(_)));
    }
}
