use crate::domain::value_objects::{AccessToken, Email};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single-use, expiring invitation to respond to one survey.
///
/// (survey_id, email) is unique per the persistence schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub email: Email,
    pub token: AccessToken,
    pub sent_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub used_at: Option<DateTime<Utc>>,
    pub reminder_sent: bool,
}

impl Invitation {
    pub fn new(survey_id: Uuid, email: Email, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            survey_id,
            email,
            token: AccessToken::generate(),
            sent_at: Utc::now(),
            expires_at,
            used: false,
            used_at: None,
            reminder_sent: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// An invitation can be answered iff it is unused and unexpired.
    pub fn is_valid(&self) -> bool {
        !self.used && !self.is_expired()
    }

    pub fn mark_used(&mut self) {
        self.used = true;
        self.used_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn invitation(expires_in: Duration) -> Invitation {
        Invitation::new(
            Uuid::new_v4(),
            Email::new("peer@school.org").unwrap(),
            Utc::now() + expires_in,
        )
    }

    #[test]
    fn fresh_unexpired_invitation_is_valid() {
        assert!(invitation(Duration::days(14)).is_valid());
    }

    #[test]
    fn used_invitation_is_invalid_even_before_expiry() {
        let mut inv = invitation(Duration::days(14));
        inv.mark_used();
        assert!(!inv.is_valid());
        assert!(inv.used_at.is_some());
    }

    #[test]
    fn expired_invitation_is_invalid_even_when_unused() {
        let inv = invitation(Duration::days(-1));
        assert!(inv.is_expired());
        assert!(!inv.is_valid());
    }
}
