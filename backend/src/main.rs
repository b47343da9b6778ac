use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::EnvFilter;

use crate::application::admin::commands::login;
use crate::domain::entities::AdminUser;
use crate::infrastructure::config::Settings;
use crate::infrastructure::AppState;

mod application;
mod domain;
mod infrastructure;

/// Creates the seed admin account when one is configured and the
/// username is not yet taken.
async fn bootstrap_admin(state: &AppState) -> anyhow::Result<()> {
    let (username, password) = match (
        &state.settings.admin_username,
        &state.settings.admin_password,
    ) {
        (Some(username), Some(password)) => (username, password),
        _ => return Ok(()),
    };

    if state
        .user_repo
        .find_by_username(username)
        .await
        .map_err(anyhow::Error::msg)?
        .is_some()
    {
        return Ok(());
    }

    let password_hash = login::hash_password(password).map_err(anyhow::Error::msg)?;
    let user = AdminUser::new(
        username.clone(),
        state.settings.admin_display_name.clone(),
        password_hash,
    );
    state
        .user_repo
        .create(&user)
        .await
        .map_err(anyhow::Error::msg)?;
    tracing::info!(username = %username, "seed admin account created");

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = Settings::load()?;

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&settings.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let bind_addr = settings.bind_addr.clone();
    let state = AppState::new(settings, pool)?;
    bootstrap_admin(&state).await?;

    let router = infrastructure::driving::http::router(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "survey server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
