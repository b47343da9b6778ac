use axum::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::UserRepository;
use crate::domain::entities::AdminUser;

use super::{parse_datetime, parse_uuid};

type UserRow = (String, String, String, String, String);

const SELECT_COLUMNS: &str = "id, username, display_name, password_hash, created_at";

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: UserRow) -> Result<AdminUser, String> {
        let (id, username, display_name, password_hash, created_at) = row;

        Ok(AdminUser {
            id: parse_uuid(&id, "admin_users.id")?,
            username,
            display_name,
            password_hash,
            created_at: parse_datetime(&created_at, "admin_users.created_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>, String> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM admin_users WHERE username = ?",
            SELECT_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        row.map(Self::from_row).transpose()
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<AdminUser>, String> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM admin_users WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        row.map(Self::from_row).transpose()
    }

    async fn create(&self, user: &AdminUser) -> Result<(), String> {
        sqlx::query(
            "INSERT INTO admin_users (id, username, display_name, password_hash, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create admin user: {}", e))?;

        Ok(())
    }
}
