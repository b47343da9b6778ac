use crate::domain::entities::Invitation;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Insert or update by id.
    async fn save(&self, invitation: &Invitation) -> Result<(), String>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>, String>;
    /// Invitations for one survey, newest first.
    async fn find_by_survey(&self, survey_id: &Uuid) -> Result<Vec<Invitation>, String>;
    async fn exists_for_email(&self, survey_id: &Uuid, email: &str) -> Result<bool, String>;
}
