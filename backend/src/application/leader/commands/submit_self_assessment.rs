use crate::application::errors::OpError;
use crate::application::forms::{self, ResponseKind, SubmitSurveyRequest};
use crate::application::ports::{ResponseRepository, SurveyRepository};
use crate::domain::entities::SurveyResponse;

/// Store the leader's own response and flip the survey's self-assessment
/// flag. The leader token both addresses the survey and authorizes the
/// submission.
pub async fn execute(
    surveys: &dyn SurveyRepository,
    responses: &dyn ResponseRepository,
    leader_token: &str,
    request: &SubmitSurveyRequest,
) -> Result<(), OpError> {
    let mut survey = surveys
        .find_by_leader_token(leader_token)
        .await
        .map_err(OpError::Storage)?
        .ok_or_else(|| OpError::NotFound("Invalid survey link".to_string()))?;
    if survey.leader_completed_self {
        return Err(OpError::Rejected("Self-assessment already completed".to_string()));
    }

    let validated = forms::validate_submission(request, ResponseKind::SelfAssessment)?;
    let response = SurveyResponse::new(
        survey.id,
        None,
        validated.relationship,
        validated.answers,
        validated.strengths,
        validated.opportunities,
        validated.continue_doing,
        validated.stop_doing,
        validated.start_doing,
    );
    responses.save(&response).await.map_err(OpError::Storage)?;

    survey.mark_self_assessment_complete();
    surveys.save(&survey).await.map_err(OpError::Storage)?;
    tracing::info!(survey_id = %survey.id, "leader self-assessment submitted");
    Ok(())
}
