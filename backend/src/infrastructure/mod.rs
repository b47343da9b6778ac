use std::sync::Arc;

use sqlx::SqlitePool;
use tera::Tera;

use crate::application::ports::{
    InvitationRepository, Mailer, ReportRepository, ResponseRepository, SurveyRepository,
    UserRepository,
};

pub mod config;
pub mod driven;
pub mod driving;
pub mod templates;

use config::Settings;
use driven::mailer::SmtpMailer;
use driven::persistence::{
    SqliteInvitationRepository, SqliteReportRepository, SqliteResponseRepository,
    SqliteSurveyRepository, SqliteUserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub templates: Arc<Tera>,
    pub user_repo: Arc<dyn UserRepository>,
    pub survey_repo: Arc<dyn SurveyRepository>,
    pub invitation_repo: Arc<dyn InvitationRepository>,
    pub response_repo: Arc<dyn ResponseRepository>,
    pub report_repo: Arc<dyn ReportRepository>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(settings: Settings, pool: SqlitePool) -> anyhow::Result<Self> {
        let templates = templates::build()?;
        let mailer = SmtpMailer::new(&settings.smtp).map_err(anyhow::Error::msg)?;

        Ok(Self {
            settings: Arc::new(settings),
            templates: Arc::new(templates),
            user_repo: Arc::new(SqliteUserRepository::new(pool.clone())),
            survey_repo: Arc::new(SqliteSurveyRepository::new(pool.clone())),
            invitation_repo: Arc::new(SqliteInvitationRepository::new(pool.clone())),
            response_repo: Arc::new(SqliteResponseRepository::new(pool.clone())),
            report_repo: Arc::new(SqliteReportRepository::new(pool)),
            mailer: Arc::new(mailer),
        })
    }
}
