use crate::domain::entities::Survey;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// Insert or update by id.
    async fn save(&self, survey: &Survey) -> Result<(), String>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Survey>, String>;
    async fn find_by_leader_token(&self, token: &str) -> Result<Option<Survey>, String>;
    /// All surveys, newest first.
    async fn list(&self) -> Result<Vec<Survey>, String>;
}
