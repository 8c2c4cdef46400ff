use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A single reminder as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: u64,
    /// Stored exactly as the client sent it; left out of the JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Value>,
    pub is_complete: bool,
}

impl Reminder {
    /// New reminders always start incomplete.
    pub fn new(id: u64, title: Option<Value>) -> Self {
        Self {
            id,
            title,
            is_complete: false,
        }
    }
}

/// Body of a create call. The title is not checked beyond being valid JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CreateReminderReq {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub version: String,
    pub time: chrono::DateTime<chrono::Utc>,
    pub reminders: usize,
}
