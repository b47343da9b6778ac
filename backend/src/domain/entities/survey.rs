use crate::domain::value_objects::{AccessToken, Email};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A leadership assessment round for one leader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub id: Uuid,
    pub title: String,
    pub created_by: Uuid,
    pub leader_name: String,
    pub leader_email: Email,
    pub leader_completed_self: bool,
    pub leader_token: AccessToken,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Survey {
    pub fn new(title: String, created_by: Uuid, leader_name: String, leader_email: Email) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            created_by,
            leader_name,
            leader_email,
            leader_completed_self: false,
            leader_token: AccessToken::generate(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mark_self_assessment_complete(&mut self) {
        self.leader_completed_self = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_survey_starts_active_and_awaiting_self_assessment() {
        let email = Email::new("leader@school.org").unwrap();
        let survey = Survey::new("Fall Review".into(), Uuid::new_v4(), "Pat Rivera".into(), email);
        assert!(survey.is_active);
        assert!(!survey.leader_completed_self);
        assert_eq!(survey.leader_token.as_str().len(), 64);
    }

    #[test]
    fn completing_self_assessment_touches_updated_at() {
        let email = Email::new("leader@school.org").unwrap();
        let mut survey =
            Survey::new("Fall Review".into(), Uuid::new_v4(), "Pat Rivera".into(), email);
        let before = survey.updated_at;
        survey.mark_self_assessment_complete();
        assert!(survey.leader_completed_self);
        assert!(survey.updated_at >= before);
    }
}
