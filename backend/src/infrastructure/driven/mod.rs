pub mod mailer;
pub mod persistence;
