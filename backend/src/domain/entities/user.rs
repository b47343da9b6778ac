use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Administrator account. Anyone stored here may log in and manage surveys;
/// accounts are provisioned out of band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    pub fn new(username: String, display_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            display_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
