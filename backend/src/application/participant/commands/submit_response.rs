use crate::application::errors::OpError;
use crate::application::forms::{self, ResponseKind, SubmitSurveyRequest};
use crate::application::ports::{InvitationRepository, ResponseRepository};
use crate::domain::entities::SurveyResponse;

/// Store an invited participant's response and consume the invitation.
/// The invitation token is single-use: used or expired tokens are
/// rejected before validation runs.
pub async fn execute(
    invitations: &dyn InvitationRepository,
    responses: &dyn ResponseRepository,
    invitation_token: &str,
    request: &SubmitSurveyRequest,
) -> Result<(), OpError> {
    let mut invitation = invitations
        .find_by_token(invitation_token)
        .await
        .map_err(OpError::Storage)?
        .ok_or_else(|| OpError::NotFound("Invalid survey link".to_string()))?;
    if invitation.used {
        return Err(OpError::Rejected("Survey already completed".to_string()));
    }
    if invitation.is_expired() {
        return Err(OpError::Rejected("Survey link expired".to_string()));
    }

    let validated = forms::validate_submission(request, ResponseKind::Participant)?;
    let response = SurveyResponse::new(
        invitation.survey_id,
        Some(invitation.id),
        validated.relationship,
        validated.answers,
        validated.strengths,
        validated.opportunities,
        validated.continue_doing,
        validated.stop_doing,
        validated.start_doing,
    );
    responses.save(&response).await.map_err(OpError::Storage)?;

    invitation.mark_used();
    invitations.save(&invitation).await.map_err(OpError::Storage)?;
    tracing::info!(survey_id = %invitation.survey_id, invitation_id = %invitation.id, "participant response submitted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::forms::test_support::complete_request;
    use crate::application::ports::{MockInvitationRepository, MockResponseRepository};
    use crate::domain::entities::Invitation;
    use crate::domain::value_objects::Email;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn invitation(expires_in: Duration) -> Invitation {
        Invitation::new(
            Uuid::new_v4(),
            Email::new("peer@school.org").unwrap(),
            Utc::now() + expires_in,
        )
    }

    #[tokio::test]
    async fn valid_submission_consumes_the_invitation() {
        let invitation = invitation(Duration::days(14));
        let invitation_id = invitation.id;
        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_find_by_token()
            .returning(move |_| Ok(Some(invitation.clone())));
        invitations
            .expect_save()
            .withf(|i| i.used && i.used_at.is_some())
            .times(1)
            .returning(|_| Ok(()));
        let mut responses = MockResponseRepository::new();
        responses
            .expect_save()
            .withf(move |r| r.invitation_id == Some(invitation_id) && !r.is_self_assessment)
            .returning(|_| Ok(()));

        execute(&invitations, &responses, "token", &complete_request("peer"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn used_token_cannot_submit_again() {
        let mut used = invitation(Duration::days(14));
        used.mark_used();
        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_find_by_token()
            .returning(move |_| Ok(Some(used.clone())));
        let responses = MockResponseRepository::new();

        let err = execute(&invitations, &responses, "token", &complete_request("peer"))
            .await
            .unwrap_err();
        match err {
            OpError::Rejected(message) => assert_eq!(message, "Survey already completed"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let expired = invitation(Duration::days(-1));
        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_find_by_token()
            .returning(move |_| Ok(Some(expired.clone())));
        let responses = MockResponseRepository::new();

        let err = execute(&invitations, &responses, "token", &complete_request("peer"))
            .await
            .unwrap_err();
        match err {
            OpError::Rejected(message) => assert_eq!(message, "Survey link expired"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn validation_failure_leaves_the_invitation_untouched() {
        let invitation = invitation(Duration::days(14));
        let mut invitations = MockInvitationRepository::new();
        invitations
            .expect_find_by_token()
            .returning(move |_| Ok(Some(invitation.clone())));
        // No save expected on either repository.
        let responses = MockResponseRepository::new();

        let mut request = complete_request("peer");
        request.strengths.pop();
        let err = execute(&invitations, &responses, "token", &request)
            .await
            .unwrap_err();
        assert!(matches!(err, OpError::Validation(_)));
    }
}
