use axum::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::SurveyRepository;
use crate::domain::entities::Survey;
use crate::domain::value_objects::{AccessToken, Email};

use super::{parse_datetime, parse_uuid};

type SurveyRow = (
    String, // id
    String, // title
    String, // created_by
    String, // leader_name
    String, // leader_email
    bool,   // leader_completed_self
    String, // leader_token
    bool,   // is_active
    String, // created_at
    String, // updated_at
);

const SELECT_COLUMNS: &str = "id, title, created_by, leader_name, leader_email, \
     leader_completed_self, leader_token, is_active, created_at, updated_at";

pub struct SqliteSurveyRepository {
    pool: SqlitePool,
}

impl SqliteSurveyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: SurveyRow) -> Result<Survey, String> {
        let (
            id,
            title,
            created_by,
            leader_name,
            leader_email,
            leader_completed_self,
            leader_token,
            is_active,
            created_at,
            updated_at,
        ) = row;

        Ok(Survey {
            id: parse_uuid(&id, "surveys.id")?,
            title,
            created_by: parse_uuid(&created_by, "surveys.created_by")?,
            leader_name,
            leader_email: Email::new(&leader_email)?,
            leader_completed_self,
            leader_token: AccessToken::from_string(leader_token),
            is_active,
            created_at: parse_datetime(&created_at, "surveys.created_at")?,
            updated_at: parse_datetime(&updated_at, "surveys.updated_at")?,
        })
    }
}

#[async_trait]
impl SurveyRepository for SqliteSurveyRepository {
    async fn save(&self, survey: &Survey) -> Result<(), String> {
        sqlx::query(
            "INSERT INTO surveys (id, title, created_by, leader_name, leader_email, \
             leader_completed_self, leader_token, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
             title = excluded.title, \
             leader_name = excluded.leader_name, \
             leader_email = excluded.leader_email, \
             leader_completed_self = excluded.leader_completed_self, \
             is_active = excluded.is_active, \
             updated_at = excluded.updated_at",
        )
        .bind(survey.id.to_string())
        .bind(&survey.title)
        .bind(survey.created_by.to_string())
        .bind(&survey.leader_name)
        .bind(survey.leader_email.as_str())
        .bind(survey.leader_completed_self)
        .bind(survey.leader_token.as_str())
        .bind(survey.is_active)
        .bind(survey.created_at.to_rfc3339())
        .bind(survey.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save survey: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Survey>, String> {
        let row: Option<SurveyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM surveys WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        row.map(Self::from_row).transpose()
    }

    async fn find_by_leader_token(&self, token: &str) -> Result<Option<Survey>, String> {
        let row: Option<SurveyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM surveys WHERE leader_token = ?",
            SELECT_COLUMNS
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        row.map(Self::from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Survey>, String> {
        let rows: Vec<SurveyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM surveys ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        rows.into_iter().map(Self::from_row).collect()
    }
}
