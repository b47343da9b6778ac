use crate::domain::entities::AdminUser;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>, String>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<AdminUser>, String>;
    async fn create(&self, user: &AdminUser) -> Result<(), String>;
}
