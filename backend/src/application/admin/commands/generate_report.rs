use crate::application::errors::OpError;
use crate::application::ports::{ReportRepository, SurveyRepository};
use crate::domain::entities::SurveyReport;
use uuid::Uuid;

#[derive(Debug)]
pub struct GenerateReportResult {
    pub report_token: String,
    pub report_url: String,
    pub created: bool,
}

/// Get-or-create the survey's report. Regeneration refreshes the
/// generation stamp but keeps the token, so shared links stay valid.
pub async fn execute(
    surveys: &dyn SurveyRepository,
    reports: &dyn ReportRepository,
    admin_id: Uuid,
    survey_id: &Uuid,
    base_url: &str,
) -> Result<GenerateReportResult, OpError> {
    surveys
        .find_by_id(survey_id)
        .await
        .map_err(OpError::Storage)?
        .ok_or_else(|| OpError::NotFound("Survey not found".to_string()))?;

    let (report, created) = match reports
        .find_by_survey(survey_id)
        .await
        .map_err(OpError::Storage)?
    {
        Some(mut existing) => {
            existing.regenerate(Some(admin_id));
            (existing, false)
        }
        None => (SurveyReport::new(*survey_id, Some(admin_id)), true),
    };
    reports.save(&report).await.map_err(OpError::Storage)?;

    let report_url = format!(
        "{}/report/{}",
        base_url.trim_end_matches('/'),
        report.report_token
    );
    Ok(GenerateReportResult {
        report_token: report.report_token.to_string(),
        report_url,
        created,
    })
}
