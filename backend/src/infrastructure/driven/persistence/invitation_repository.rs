use axum::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::InvitationRepository;
use crate::domain::entities::Invitation;
use crate::domain::value_objects::{AccessToken, Email};

use super::{parse_datetime, parse_uuid};

type InvitationRow = (
    String,         // id
    String,         // survey_id
    String,         // email
    String,         // token
    String,         // sent_at
    String,         // expires_at
    bool,           // used
    Option<String>, // used_at
    bool,           // reminder_sent
);

const SELECT_COLUMNS: &str =
    "id, survey_id, email, token, sent_at, expires_at, used, used_at, reminder_sent";

pub struct SqliteInvitationRepository {
    pool: SqlitePool,
}

impl SqliteInvitationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: InvitationRow) -> Result<Invitation, String> {
        let (id, survey_id, email, token, sent_at, expires_at, used, used_at, reminder_sent) = row;

        Ok(Invitation {
            id: parse_uuid(&id, "invitations.id")?,
            survey_id: parse_uuid(&survey_id, "invitations.survey_id")?,
            email: Email::new(&email)?,
            token: AccessToken::from_string(token),
            sent_at: parse_datetime(&sent_at, "invitations.sent_at")?,
            expires_at: parse_datetime(&expires_at, "invitations.expires_at")?,
            used,
            used_at: used_at
                .map(|v| parse_datetime(&v, "invitations.used_at"))
                .transpose()?,
            reminder_sent,
        })
    }
}

#[async_trait]
impl InvitationRepository for SqliteInvitationRepository {
    async fn save(&self, invitation: &Invitation) -> Result<(), String> {
        sqlx::query(
            "INSERT INTO invitations (id, survey_id, email, token, sent_at, expires_at, \
             used, used_at, reminder_sent) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
             expires_at = excluded.expires_at, \
             used = excluded.used, \
             used_at = excluded.used_at, \
             reminder_sent = excluded.reminder_sent",
        )
        .bind(invitation.id.to_string())
        .bind(invitation.survey_id.to_string())
        .bind(invitation.email.as_str())
        .bind(invitation.token.as_str())
        .bind(invitation.sent_at.to_rfc3339())
        .bind(invitation.expires_at.to_rfc3339())
        .bind(invitation.used)
        .bind(invitation.used_at.map(|t| t.to_rfc3339()))
        .bind(invitation.reminder_sent)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save invitation: {}", e))?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Invitation>, String> {
        let row: Option<InvitationRow> = sqlx::query_as(&format!(
            "SELECT {} FROM invitations WHERE token = ?",
            SELECT_COLUMNS
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        row.map(Self::from_row).transpose()
    }

    async fn find_by_survey(&self, survey_id: &Uuid) -> Result<Vec<Invitation>, String> {
        let rows: Vec<InvitationRow> = sqlx::query_as(&format!(
            "SELECT {} FROM invitations WHERE survey_id = ? ORDER BY sent_at DESC",
            SELECT_COLUMNS
        ))
        .bind(survey_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn exists_for_email(&self, survey_id: &Uuid, email: &str) -> Result<bool, String> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM invitations WHERE survey_id = ? AND email = ?",
        )
        .bind(survey_id.to_string())
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        Ok(count > 0)
    }
}
