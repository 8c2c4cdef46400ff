use axum::{routing::get, Json, Router};
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;

use crate::config::DEFAULT_BASE_PATH;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::reminders::routes::list,
        crate::features::reminders::routes::create,
        crate::features::health::health,
    ),
    components(
        schemas(
            reminder_types::Reminder,
            reminder_types::CreateReminderReq,
            reminder_types::ErrorResponse,
            reminder_types::HealthResponse,
        )
    ),
    tags(
        (name = "Reminders", description = "Reminder creation and listing."),
        (name = "Health", description = "Liveness probe."),
    )
)]
pub struct ApiDoc;

/// The derived document with reminder paths moved under `base_path`.
pub fn openapi(base_path: &str) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    if base_path == DEFAULT_BASE_PATH {
        return doc;
    }
    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| match path.strip_prefix(DEFAULT_BASE_PATH) {
            Some(rest) => (rebase(base_path, rest), item),
            None => (path, item),
        })
        .collect();
    doc
}

fn rebase(base_path: &str, rest: &str) -> String {
    let joined = format!("{}{}", base_path.trim_end_matches('/'), rest);
    if joined.is_empty() {
        "/".into()
    } else {
        joined
    }
}

pub fn router(base_path: &str) -> Router {
    let spec = openapi(base_path);
    Router::new().route(
        "/docs/openapi.json",
        get(move || {
            let spec = spec.clone();
            async move { Json(spec) }
        }),
    )
}
