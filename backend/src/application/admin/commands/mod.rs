pub mod create_survey;
pub mod dashboard;
pub mod generate_report;
pub mod list_surveys;
pub mod login;
pub mod send_report;
pub mod survey_detail;
