use crate::application::errors::OpError;
use crate::application::ports::{
    InvitationRepository, ReportRepository, ResponseRepository, SurveyRepository,
};
use crate::domain::entities::{Invitation, Survey};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct SurveyStats {
    pub total_invitations: usize,
    pub completed_invitations: usize,
    pub pending_invitations: usize,
    pub expired_invitations: usize,
    pub total_responses: usize,
    pub participant_responses: usize,
    pub self_assessment_complete: bool,
}

#[derive(Debug, Serialize)]
pub struct SurveyDetail {
    pub survey: Survey,
    pub invitations: Vec<Invitation>,
    pub stats: SurveyStats,
    pub report_token: Option<String>,
}

pub async fn execute(
    surveys: &dyn SurveyRepository,
    invitations: &dyn InvitationRepository,
    responses: &dyn ResponseRepository,
    reports: &dyn ReportRepository,
    survey_id: &Uuid,
) -> Result<SurveyDetail, OpError> {
    let survey = surveys
        .find_by_id(survey_id)
        .await
        .map_err(OpError::Storage)?
        .ok_or_else(|| OpError::NotFound("Survey not found".to_string()))?;

    let survey_invitations = invitations
        .find_by_survey(survey_id)
        .await
        .map_err(OpError::Storage)?;
    let survey_responses = responses
        .find_by_survey(survey_id)
        .await
        .map_err(OpError::Storage)?;
    let report = reports.find_by_survey(survey_id).await.map_err(OpError::Storage)?;

    let completed = survey_invitations.iter().filter(|i| i.used).count();
    let pending = survey_invitations.iter().filter(|i| i.is_valid()).count();
    let expired = survey_invitations
        .iter()
        .filter(|i| !i.used && i.is_expired())
        .count();

    let stats = SurveyStats {
        total_invitations: survey_invitations.len(),
        completed_invitations: completed,
        pending_invitations: pending,
        expired_invitations: expired,
        total_responses: survey_responses.len(),
        participant_responses: survey_responses
            .iter()
            .filter(|r| !r.is_self_assessment)
            .count(),
        self_assessment_complete: survey.leader_completed_self,
    };

    Ok(SurveyDetail {
        survey,
        invitations: survey_invitations,
        stats,
        report_token: report.map(|r| r.report_token.to_string()),
    })
}
