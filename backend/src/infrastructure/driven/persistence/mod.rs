use chrono::{DateTime, Utc};
use uuid::Uuid;

mod invitation_repository;
mod report_repository;
mod response_repository;
mod survey_repository;
mod user_repository;

pub use invitation_repository::SqliteInvitationRepository;
pub use report_repository::SqliteReportRepository;
pub use response_repository::SqliteResponseRepository;
pub use survey_repository::SqliteSurveyRepository;
pub use user_repository::SqliteUserRepository;

pub(crate) fn parse_uuid(value: &str, column: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value).map_err(|e| format!("Invalid UUID in {}: {}", column, e))
}

pub(crate) fn parse_datetime(value: &str, column: &str) -> Result<DateTime<Utc>, String> {
    value
        .parse::<DateTime<Utc>>()
        .map_err(|e| format!("Invalid timestamp in {}: {}", column, e))
}
