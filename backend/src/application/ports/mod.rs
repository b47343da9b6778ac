pub mod invitation_repository;
pub mod mailer;
pub mod report_repository;
pub mod response_repository;
pub mod survey_repository;
pub mod user_repository;

pub use invitation_repository::InvitationRepository;
pub use mailer::{Mailer, OutgoingEmail};
pub use report_repository::ReportRepository;
pub use response_repository::ResponseRepository;
pub use survey_repository::SurveyRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use invitation_repository::MockInvitationRepository;
#[cfg(test)]
pub use mailer::MockMailer;
#[cfg(test)]
pub use report_repository::MockReportRepository;
#[cfg(test)]
pub use response_repository::MockResponseRepository;
#[cfg(test)]
pub use survey_repository::MockSurveyRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
