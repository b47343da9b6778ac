use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Runtime configuration, loaded from `SURVEY__*` environment variables
/// (a `.env` file is read in main) with development defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    /// Public origin used when building tokenized links in emails.
    pub base_url: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub invitation_expiry_days: i64,
    /// Seed admin account, created at startup when the username is unknown.
    #[serde(default)]
    pub admin_username: Option<String>,
    #[serde(default)]
    pub admin_password: Option<String>,
    pub admin_display_name: String,
    pub smtp: SmtpSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    pub from_address: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_addr", "0.0.0.0:8000")?
            .set_default("base_url", "http://localhost:8000")?
            .set_default("database_url", "sqlite://survey.db?mode=rwc")?
            .set_default("jwt_secret", "insecure-dev-secret")?
            .set_default("invitation_expiry_days", 14)?
            .set_default("admin_display_name", "Administrator")?
            .set_default("smtp.host", "localhost")?
            .set_default("smtp.port", 1025)?
            .set_default("smtp.from_address", "surveys@localhost.localdomain")?
            .add_source(Environment::with_prefix("SURVEY").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_field() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.invitation_expiry_days, 14);
        assert!(settings.admin_username.is_none() || !settings.admin_username.as_deref().unwrap_or("").is_empty());
        assert!(!settings.smtp.from_address.is_empty());
    }
}
