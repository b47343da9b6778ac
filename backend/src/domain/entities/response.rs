use crate::domain::value_objects::{LikertScale, Relationship};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One ranked choice inside a response: a catalog label and its rank 1-5
/// (5 = strongest / highest priority).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub label: String,
    pub rank: i32,
}

/// A completed survey submission, either from an invited participant
/// (`invitation_id` set) or the leader's self-assessment.
///
/// Answers are keyed by question number (2-55). The five strength and five
/// opportunity rankings are embedded; the form layer guarantees their
/// uniqueness invariants before a response is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub invitation_id: Option<Uuid>,
    pub relationship: Relationship,
    pub is_self_assessment: bool,
    pub answers: BTreeMap<u8, LikertScale>,
    pub strength_rankings: Vec<Ranking>,
    pub opportunity_rankings: Vec<Ranking>,
    pub continue_doing: String,
    pub stop_doing: String,
    pub start_doing: String,
    pub submitted_at: DateTime<Utc>,
}

impl SurveyResponse {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        survey_id: Uuid,
        invitation_id: Option<Uuid>,
        relationship: Relationship,
        answers: BTreeMap<u8, LikertScale>,
        strength_rankings: Vec<Ranking>,
        opportunity_rankings: Vec<Ranking>,
        continue_doing: String,
        stop_doing: String,
        start_doing: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            survey_id,
            invitation_id,
            is_self_assessment: invitation_id.is_none(),
            relationship,
            answers,
            strength_rankings,
            opportunity_rankings,
            continue_doing,
            stop_doing,
            start_doing,
            submitted_at: Utc::now(),
        }
    }
}
