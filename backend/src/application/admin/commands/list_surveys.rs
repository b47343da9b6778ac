use crate::application::admin::commands::dashboard::SurveySummary;
use crate::application::errors::OpError;
use crate::application::ports::{InvitationRepository, ResponseRepository, SurveyRepository};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Active,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(StatusFilter::Active),
            "completed" => Some(StatusFilter::Completed),
            "pending" => Some(StatusFilter::Pending),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SurveyOverview {
    #[serde(flatten)]
    pub summary: SurveySummary,
    pub invitation_count: usize,
    pub participant_response_count: usize,
    pub total_response_count: usize,
    /// Percentage of invitations answered; 0 when none were sent.
    pub completion_rate: f64,
}

pub async fn execute(
    surveys: &dyn SurveyRepository,
    invitations: &dyn InvitationRepository,
    responses: &dyn ResponseRepository,
    filter: Option<StatusFilter>,
) -> Result<Vec<SurveyOverview>, OpError> {
    let all = surveys.list().await.map_err(OpError::Storage)?;
    let filtered = all.into_iter().filter(|survey| match filter {
        None => true,
        Some(StatusFilter::Active) => survey.is_active,
        Some(StatusFilter::Completed) => survey.leader_completed_self,
        Some(StatusFilter::Pending) => !survey.leader_completed_self,
    });

    let mut overviews = Vec::new();
    for survey in filtered {
        let survey_invitations = invitations
            .find_by_survey(&survey.id)
            .await
            .map_err(OpError::Storage)?;
        let survey_responses = responses
            .find_by_survey(&survey.id)
            .await
            .map_err(OpError::Storage)?;

        let used = survey_invitations.iter().filter(|i| i.used).count();
        let completion_rate = if survey_invitations.is_empty() {
            0.0
        } else {
            used as f64 / survey_invitations.len() as f64 * 100.0
        };

        overviews.push(SurveyOverview {
            summary: SurveySummary::from(&survey),
            invitation_count: survey_invitations.len(),
            participant_response_count: survey_responses
                .iter()
                .filter(|r| !r.is_self_assessment)
                .count(),
            total_response_count: survey_responses.len(),
            completion_rate,
        });
    }
    Ok(overviews)
}
