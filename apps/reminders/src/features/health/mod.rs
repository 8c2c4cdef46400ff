use crate::AppState;
use axum::{routing::get, Extension, Json, Router};
use reminder_types::HealthResponse;

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health(Extension(st): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        time: chrono::Utc::now(),
        reminders: st.reminders.count().await,
    })
}
