mod config;
mod docs;
mod error;
mod features;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use features::reminders::repo::ReminderRepository;

#[derive(Clone)]
pub struct AppState {
    pub reminders: ReminderRepository,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let state = AppState {
        reminders: ReminderRepository::new(),
    };

    let app = features::router(state, &config.base_path);
    info!(bind = %config.bind, base_path = %config.base_path, "reminders listening");
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
