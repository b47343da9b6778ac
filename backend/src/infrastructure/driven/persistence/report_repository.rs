use axum::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::ReportRepository;
use crate::domain::entities::SurveyReport;
use crate::domain::value_objects::AccessToken;

use super::{parse_datetime, parse_uuid};

type ReportRow = (
    String,         // id
    String,         // survey_id
    String,         // report_token
    String,         // generated_at
    Option<String>, // generated_by
    bool,           // sent_to_leader
    Option<String>, // sent_at
);

const SELECT_COLUMNS: &str =
    "id, survey_id, report_token, generated_at, generated_by, sent_to_leader, sent_at";

pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: ReportRow) -> Result<SurveyReport, String> {
        let (id, survey_id, report_token, generated_at, generated_by, sent_to_leader, sent_at) =
            row;

        Ok(SurveyReport {
            id: parse_uuid(&id, "reports.id")?,
            survey_id: parse_uuid(&survey_id, "reports.survey_id")?,
            report_token: AccessToken::from_string(report_token),
            generated_at: parse_datetime(&generated_at, "reports.generated_at")?,
            generated_by: generated_by
                .map(|v| parse_uuid(&v, "reports.generated_by"))
                .transpose()?,
            sent_to_leader,
            sent_at: sent_at
                .map(|v| parse_datetime(&v, "reports.sent_at"))
                .transpose()?,
        })
    }
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn save(&self, report: &SurveyReport) -> Result<(), String> {
        sqlx::query(
            "INSERT INTO reports (id, survey_id, report_token, generated_at, generated_by, \
             sent_to_leader, sent_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
             generated_at = excluded.generated_at, \
             generated_by = excluded.generated_by, \
             sent_to_leader = excluded.sent_to_leader, \
             sent_at = excluded.sent_at",
        )
        .bind(report.id.to_string())
        .bind(report.survey_id.to_string())
        .bind(report.report_token.as_str())
        .bind(report.generated_at.to_rfc3339())
        .bind(report.generated_by.map(|v| v.to_string()))
        .bind(report.sent_to_leader)
        .bind(report.sent_at.map(|t| t.to_rfc3339()))
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save report: {}", e))?;

        Ok(())
    }

    async fn find_by_survey(&self, survey_id: &Uuid) -> Result<Option<SurveyReport>, String> {
        let row: Option<ReportRow> = sqlx::query_as(&format!(
            "SELECT {} FROM reports WHERE survey_id = ?",
            SELECT_COLUMNS
        ))
        .bind(survey_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        row.map(Self::from_row).transpose()
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<SurveyReport>, String> {
        let row: Option<ReportRow> = sqlx::query_as(&format!(
            "SELECT {} FROM reports WHERE report_token = ?",
            SELECT_COLUMNS
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        row.map(Self::from_row).transpose()
    }
}
