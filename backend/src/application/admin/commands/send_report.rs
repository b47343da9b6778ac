use crate::application::errors::OpError;
use crate::application::notifications;
use crate::application::ports::{Mailer, ReportRepository, SurveyRepository};
use tera::Tera;
use uuid::Uuid;

#[derive(Debug)]
pub struct SendReportResult {
    pub sent: bool,
    pub leader_email: String,
}

pub async fn execute(
    surveys: &dyn SurveyRepository,
    reports: &dyn ReportRepository,
    mailer: &dyn Mailer,
    templates: &Tera,
    base_url: &str,
    survey_id: &Uuid,
) -> Result<SendReportResult, OpError> {
    let survey = surveys
        .find_by_id(survey_id)
        .await
        .map_err(OpError::Storage)?
        .ok_or_else(|| OpError::NotFound("Survey not found".to_string()))?;
    let mut report = reports
        .find_by_survey(survey_id)
        .await
        .map_err(OpError::Storage)?
        .ok_or_else(|| OpError::NotFound("Report not generated yet".to_string()))?;

    let sent = notifications::send_report_email(mailer, templates, base_url, &survey, &report).await;
    if sent {
        report.mark_sent();
        reports.save(&report).await.map_err(OpError::Storage)?;
    }

    Ok(SendReportResult { sent, leader_email: survey.leader_email.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockMailer, MockReportRepository, MockSurveyRepository};
    use crate::domain::entities::{Survey, SurveyReport};
    use crate::domain::value_objects::Email;
    use crate::infrastructure::templates;

    fn fixtures() -> (Survey, SurveyReport) {
        let survey = Survey::new(
            "Review".into(),
            Uuid::new_v4(),
            "Pat".into(),
            Email::new("pat@school.org").unwrap(),
        );
        let report = SurveyReport::new(survey.id, None);
        (survey, report)
    }

    #[tokio::test]
    async fn successful_send_marks_the_report() {
        let (survey, report) = fixtures();
        let survey_id = survey.id;
        let mut surveys = MockSurveyRepository::new();
        surveys
            .expect_find_by_id()
            .returning(move |_| Ok(Some(survey.clone())));
        let mut reports = MockReportRepository::new();
        reports
            .expect_find_by_survey()
            .returning(move |_| Ok(Some(report.clone())));
        reports
            .expect_save()
            .withf(|r| r.sent_to_leader && r.sent_at.is_some())
            .returning(|_| Ok(()));
        let mut mailer = MockMailer::new();
        mailer.expect_send().returning(|_| Ok(()));

        let result = execute(
            &surveys,
            &reports,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            &survey_id,
        )
        .await
        .unwrap();
        assert!(result.sent);
        assert_eq!(result.leader_email, "pat@school.org");
    }

    #[tokio::test]
    async fn failed_send_leaves_the_report_unmarked() {
        let (survey, report) = fixtures();
        let survey_id = survey.id;
        let mut surveys = MockSurveyRepository::new();
        surveys
            .expect_find_by_id()
            .returning(move |_| Ok(Some(survey.clone())));
        let mut reports = MockReportRepository::new();
        reports
            .expect_find_by_survey()
            .returning(move |_| Ok(Some(report.clone())));
        // No save call expected when delivery fails.
        let mut mailer = MockMailer::new();
        mailer.expect_send().returning(|_| Err("smtp down".into()));

        let result = execute(
            &surveys,
            &reports,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            &survey_id,
        )
        .await
        .unwrap();
        assert!(!result.sent);
    }

    #[tokio::test]
    async fn missing_report_is_not_found() {
        let (survey, _) = fixtures();
        let survey_id = survey.id;
        let mut surveys = MockSurveyRepository::new();
        surveys
            .expect_find_by_id()
            .returning(move |_| Ok(Some(survey.clone())));
        let mut reports = MockReportRepository::new();
        reports.expect_find_by_survey().returning(|_| Ok(None));
        let mailer = MockMailer::new();

        let err = execute(
            &surveys,
            &reports,
            &mailer,
            &templates::build().unwrap(),
            "http://localhost:8000",
            &survey_id,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OpError::NotFound(_)));
    }
}
