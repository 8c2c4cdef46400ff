use crate::AppState;
use axum::{Extension, Router};

pub mod health;
pub mod reminders;

/// Assembles the service. `base_path` is where the reminder routes are mounted;
/// `/` mounts them at the root.
pub fn router(state: AppState, base_path: &str) -> Router {
    let reminders = if base_path == "/" {
        Router::new().merge(reminders::router())
    } else {
        Router::new().nest(base_path, reminders::router())
    };

    Router::new()
        .merge(health::router())
        .merge(crate::docs::router(base_path))
        .merge(reminders)
        .layer(Extension(state))
}
