use crate::application::errors::OpError;
use crate::application::ports::SurveyRepository;
use crate::domain::entities::Survey;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct SurveySummary {
    pub id: Uuid,
    pub title: String,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_completed_self: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Survey> for SurveySummary {
    fn from(survey: &Survey) -> Self {
        Self {
            id: survey.id,
            title: survey.title.clone(),
            leader_name: survey.leader_name.clone(),
            leader_email: survey.leader_email.to_string(),
            leader_completed_self: survey.leader_completed_self,
            is_active: survey.is_active,
            created_at: survey.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub total_surveys: usize,
    pub active_surveys: usize,
    pub completed_surveys: usize,
    pub recent_surveys: Vec<SurveySummary>,
    pub pending_self_assessment: Vec<SurveySummary>,
}

pub async fn execute(surveys: &dyn SurveyRepository) -> Result<DashboardData, OpError> {
    // list() is newest-first, so the head is the recent slice.
    let all = surveys.list().await.map_err(OpError::Storage)?;

    Ok(DashboardData {
        total_surveys: all.len(),
        active_surveys: all.iter().filter(|s| s.is_active).count(),
        completed_surveys: all.iter().filter(|s| s.leader_completed_self).count(),
        recent_surveys: all.iter().take(RECENT_LIMIT).map(SurveySummary::from).collect(),
        pending_self_assessment: all
            .iter()
            .filter(|s| !s.leader_completed_self)
            .take(RECENT_LIMIT)
            .map(SurveySummary::from)
            .collect(),
    })
}
