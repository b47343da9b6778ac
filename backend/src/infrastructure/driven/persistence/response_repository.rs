use std::collections::BTreeMap;

use axum::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::ResponseRepository;
use crate::domain::entities::{Ranking, SurveyResponse};
use crate::domain::value_objects::{parse_or_midpoint, LikertScale, Relationship};

use super::{parse_datetime, parse_uuid};

type ResponseRow = (
    String,         // id
    String,         // survey_id
    Option<String>, // invitation_id
    String,         // relationship
    String,         // answers (JSON)
    String,         // strength_rankings (JSON)
    String,         // opportunity_rankings (JSON)
    String,         // continue_doing
    String,         // stop_doing
    String,         // start_doing
    String,         // submitted_at
);

const SELECT_COLUMNS: &str = "id, survey_id, invitation_id, relationship, answers, \
     strength_rankings, opportunity_rankings, continue_doing, stop_doing, start_doing, \
     submitted_at";

pub struct SqliteResponseRepository {
    pool: SqlitePool,
}

impl SqliteResponseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn from_row(row: ResponseRow) -> Result<SurveyResponse, String> {
        let (
            id,
            survey_id,
            invitation_id,
            relationship,
            answers,
            strength_rankings,
            opportunity_rankings,
            continue_doing,
            stop_doing,
            start_doing,
            submitted_at,
        ) = row;

        let invitation_id = invitation_id
            .map(|v| parse_uuid(&v, "responses.invitation_id"))
            .transpose()?;
        let is_self_assessment = invitation_id.is_none();

        // Unrecognized answer values fall back to the scale midpoint so
        // one bad row never blocks a whole report.
        let raw: BTreeMap<u8, String> = serde_json::from_str(&answers)
            .map_err(|e| format!("Invalid answers JSON: {}", e))?;
        let answers: BTreeMap<u8, LikertScale> = raw
            .into_iter()
            .map(|(number, value)| (number, parse_or_midpoint(&value)))
            .collect();

        Ok(SurveyResponse {
            id: parse_uuid(&id, "responses.id")?,
            survey_id: parse_uuid(&survey_id, "responses.survey_id")?,
            invitation_id,
            relationship: Relationship::parse(&relationship).unwrap_or(if is_self_assessment {
                Relationship::SelfAssessment
            } else {
                Relationship::Peer
            }),
            is_self_assessment,
            answers,
            strength_rankings: Self::rankings_from_json(&strength_rankings)?,
            opportunity_rankings: Self::rankings_from_json(&opportunity_rankings)?,
            continue_doing,
            stop_doing,
            start_doing,
            submitted_at: parse_datetime(&submitted_at, "responses.submitted_at")?,
        })
    }

    fn rankings_from_json(json: &str) -> Result<Vec<Ranking>, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid rankings JSON: {}", e))
    }
}

#[async_trait]
impl ResponseRepository for SqliteResponseRepository {
    async fn save(&self, response: &SurveyResponse) -> Result<(), String> {
        let answers = serde_json::to_string(&response.answers)
            .map_err(|e| format!("Failed to serialize answers: {}", e))?;
        let strengths = serde_json::to_string(&response.strength_rankings)
            .map_err(|e| format!("Failed to serialize rankings: {}", e))?;
        let opportunities = serde_json::to_string(&response.opportunity_rankings)
            .map_err(|e| format!("Failed to serialize rankings: {}", e))?;

        sqlx::query(
            "INSERT INTO responses (id, survey_id, invitation_id, relationship, answers, \
             strength_rankings, opportunity_rankings, continue_doing, stop_doing, \
             start_doing, submitted_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(response.id.to_string())
        .bind(response.survey_id.to_string())
        .bind(response.invitation_id.map(|v| v.to_string()))
        .bind(response.relationship.as_str())
        .bind(answers)
        .bind(strengths)
        .bind(opportunities)
        .bind(&response.continue_doing)
        .bind(&response.stop_doing)
        .bind(&response.start_doing)
        .bind(response.submitted_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save response: {}", e))?;

        Ok(())
    }

    async fn find_by_survey(&self, survey_id: &Uuid) -> Result<Vec<SurveyResponse>, String> {
        let rows: Vec<ResponseRow> = sqlx::query_as(&format!(
            "SELECT {} FROM responses WHERE survey_id = ? ORDER BY submitted_at ASC",
            SELECT_COLUMNS
        ))
        .bind(survey_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        rows.into_iter().map(Self::from_row).collect()
    }
}
