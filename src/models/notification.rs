use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alarm,
    Price,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: String,

    pub title: String,
    pub body: String,

    #[serde(rename = "type")]
    pub kind: NotificationKind,

    // Opaque payload attached at creation (alarm id, code, prices).
    pub data: serde_json::Value,

    pub read: bool,
    pub created_at: String,
}
