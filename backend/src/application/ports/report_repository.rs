use crate::domain::entities::SurveyReport;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Insert or update by id.
    async fn save(&self, report: &SurveyReport) -> Result<(), String>;
    async fn find_by_survey(&self, survey_id: &Uuid) -> Result<Option<SurveyReport>, String>;
    async fn find_by_token(&self, token: &str) -> Result<Option<SurveyReport>, String>;
}
