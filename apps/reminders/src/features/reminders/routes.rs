use crate::{error::ApiError, AppState};
use axum::{
    body::Bytes,
    extract::rejection::JsonRejection,
    http::{header, HeaderMap, StatusCode},
    Extension, Json,
};
use reminder_types::{CreateReminderReq, ErrorResponse, Reminder};
use tracing::{debug, info, warn};

#[utoipa::path(
    get,
    path = "/v1/reminders",
    responses(
        (status = 200, description = "Reminders listed in creation order", body = [Reminder]),
    ),
    tag = "Reminders"
)]
pub async fn list(Extension(st): Extension<AppState>) -> Json<Vec<Reminder>> {
    let items = st.reminders.list().await;
    debug!(count = items.len(), "listed reminders");
    Json(items)
}

#[utoipa::path(
    post,
    path = "/v1/reminders",
    request_body = CreateReminderReq,
    responses(
        (status = 201, description = "Reminder created", body = Reminder),
        (status = 400, description = "Body is not parseable JSON", body = ErrorResponse),
    ),
    tag = "Reminders"
)]
pub async fn create(
    Extension(st): Extension<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Reminder>), ApiError> {
    let req = parse_body(&headers, &body).map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected reminder body");
        ApiError::from(rejection)
    })?;

    let reminder = st.reminders.insert(req.title).await;
    info!(id = reminder.id, "reminder created");

    Ok((StatusCode::CREATED, Json(reminder)))
}

/// Bodies without a JSON content type, and empty bodies, read as `{}`.
fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<CreateReminderReq, JsonRejection> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateReminderReq::default());
    }
    let Json(req) = Json::<CreateReminderReq>::from_bytes(body)?;
    Ok(req)
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
