use crate::application::errors::OpError;
use crate::application::forms::FormErrors;
use crate::application::notifications;
use crate::application::ports::{Mailer, SurveyRepository};
use crate::domain::entities::Survey;
use crate::domain::value_objects::Email;
use tera::Tera;
use uuid::Uuid;

pub struct CreateSurveyCommand {
    pub admin_id: Uuid,
    pub admin_display_name: String,
    pub title: String,
    pub leader_name: String,
    pub leader_email: String,
}

#[derive(Debug)]
pub struct CreateSurveyResult {
    pub survey_id: Uuid,
    pub leader_token: String,
    /// False when the survey was stored but the self-assessment email
    /// could not be delivered; the caller surfaces this as a warning.
    pub email_sent: bool,
}

pub async fn execute(
    surveys: &dyn SurveyRepository,
    mailer: &dyn Mailer,
    templates: &Tera,
    base_url: &str,
    cmd: CreateSurveyCommand,
) -> Result<CreateSurveyResult, OpError> {
    let mut errors = FormErrors::default();
    if cmd.title.trim().is_empty() {
        errors.add("title", "Title is required");
    }
    if cmd.leader_name.trim().is_empty() {
        errors.add("leader_name", "Leader name is required");
    }
    let leader_email = match Email::new(cmd.leader_email) {
        Ok(email) => Some(email),
        Err(e) => {
            errors.add("leader_email", e);
            None
        }
    };
    let Some(leader_email) = leader_email else {
        return Err(errors.into());
    };
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let survey = Survey::new(
        cmd.title.trim().to_string(),
        cmd.admin_id,
        cmd.leader_name.trim().to_string(),
        leader_email,
    );
    surveys.save(&survey).await.map_err(OpError::Storage)?;

    // The survey exists either way; a failed email only downgrades the
    // outcome to a warning.
    let email_sent = notifications::send_self_assessment_email(
        mailer,
        templates,
        base_url,
        &survey,
        &cmd.admin_display_name,
    )
    .await;

    tracing::info!(survey_id = %survey.id, leader = %survey.leader_name, email_sent, "survey created");
    Ok(CreateSurveyResult {
        survey_id: survey.id,
        leader_token: survey.leader_token.to_string(),
        email_sent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockMailer, MockSurveyRepository};
    use crate::infrastructure::templates;

    fn command() -> CreateSurveyCommand {
        CreateSurveyCommand {
            admin_id: Uuid::new_v4(),
            admin_display_name: "District Admin".into(),
            title: "Fall Review".into(),
            leader_name: "Pat Rivera".into(),
            leader_email: "leader@school.org".into(),
        }
    }

    #[tokio::test]
    async fn survey_creation_survives_a_failed_email() {
        let mut surveys = MockSurveyRepository::new();
        surveys.expect_save().returning(|_| Ok(()));
        let mut mailer = MockMailer::new();
        mailer.expect_send().returning(|_| Err("smtp down".into()));

        let result = execute(
            &surveys,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            command(),
        )
        .await
        .unwrap();
        assert!(!result.email_sent);
        assert_eq!(result.leader_token.len(), 64);
    }

    #[tokio::test]
    async fn successful_email_is_reported() {
        let mut surveys = MockSurveyRepository::new();
        surveys.expect_save().returning(|_| Ok(()));
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| email.to == "leader@school.org" && email.subject.contains("Fall Review"))
            .returning(|_| Ok(()));

        let result = execute(
            &surveys,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            command(),
        )
        .await
        .unwrap();
        assert!(result.email_sent);
    }

    #[tokio::test]
    async fn invalid_leader_email_is_a_field_error() {
        let surveys = MockSurveyRepository::new();
        let mailer = MockMailer::new();

        let mut cmd = command();
        cmd.leader_email = "nope".into();
        let err = execute(
            &surveys,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            cmd,
        )
        .await
        .unwrap_err();
        match err {
            OpError::Validation(errors) => {
                assert!(errors.fields().contains_key("leader_email"))
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
