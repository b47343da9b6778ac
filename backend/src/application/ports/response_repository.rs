use crate::domain::entities::SurveyResponse;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    async fn save(&self, response: &SurveyResponse) -> Result<(), String>;
    /// Responses for one survey, newest first.
    async fn find_by_survey(&self, survey_id: &Uuid) -> Result<Vec<SurveyResponse>, String>;
}
