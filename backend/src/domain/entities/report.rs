use crate::domain::value_objects::AccessToken;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generated report handle, one per survey, addressed by its own token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyReport {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub report_token: AccessToken,
    pub generated_at: DateTime<Utc>,
    pub generated_by: Option<Uuid>,
    pub sent_to_leader: bool,
    pub sent_at: Option<DateTime<Utc>>,
}

impl SurveyReport {
    pub fn new(survey_id: Uuid, generated_by: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            survey_id,
            report_token: AccessToken::generate(),
            generated_at: Utc::now(),
            generated_by,
            sent_to_leader: false,
            sent_at: None,
        }
    }

    /// Refresh the generation stamp when a report is regenerated; the
    /// token stays stable so previously shared links keep working.
    pub fn regenerate(&mut self, generated_by: Option<Uuid>) {
        self.generated_at = Utc::now();
        self.generated_by = generated_by;
    }

    pub fn mark_sent(&mut self) {
        self.sent_to_leader = true;
        self.sent_at = Some(Utc::now());
    }
}
