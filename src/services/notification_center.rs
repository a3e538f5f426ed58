use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::models::{NotificationKind, NotificationRecord};
use crate::services::storage::{self, KeyValueStore};

/// The stored history keeps at most this many records; inserting past the
/// bound evicts the oldest first.
pub const MAX_STORED_NOTIFICATIONS: usize = 50;

/// Durable, size-bounded notification history. Storage order is insertion
/// order; reads sort newest-first for display.
#[derive(Clone)]
pub struct NotificationCenter {
    storage: Arc<dyn KeyValueStore>,
}

impl NotificationCenter {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    // Insertion-ordered list as persisted.
    async fn load_raw(&self) -> Vec<NotificationRecord> {
        let raw = match self.storage.get(storage::keys::NOTIFICATIONS).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("notification store read failed: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<NotificationRecord>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("stored notifications unreadable, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn persist(&self, list: &[NotificationRecord]) -> Result<(), String> {
        let raw = serde_json::to_string(list).map_err(|e| e.to_string())?;
        self.storage.set(storage::keys::NOTIFICATIONS, &raw).await
    }

    /// Full history, newest first.
    pub async fn load_notifications(&self) -> Vec<NotificationRecord> {
        let mut list = self.load_raw().await;
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list
    }

    /// Appends a record, evicting the oldest past the size bound, and
    /// persists. A failed persist is logged; the record is still returned
    /// so the caller can dispatch it.
    pub async fn save_notification(
        &self,
        title: &str,
        body: &str,
        kind: NotificationKind,
        data: serde_json::Value,
    ) -> NotificationRecord {
        let now = Utc::now();

        let record = NotificationRecord {
            id: format!("{}-{}", now.timestamp_millis(), Uuid::new_v4().simple()),
            title: title.to_string(),
            body: body.to_string(),
            kind,
            data,
            read: false,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let mut list = self.load_raw().await;
        list.push(record.clone());
        if list.len() > MAX_STORED_NOTIFICATIONS {
            let excess = list.len() - MAX_STORED_NOTIFICATIONS;
            list.drain(..excess);
        }

        if let Err(e) = self.persist(&list).await {
            tracing::warn!("notification persist failed: {}", e);
        }

        record
    }

    pub async fn mark_read(&self, id: &str) {
        let mut list = self.load_raw().await;
        let mut changed = false;
        for record in list.iter_mut() {
            if record.id == id && !record.read {
                record.read = true;
                changed = true;
            }
        }

        if changed {
            if let Err(e) = self.persist(&list).await {
                tracing::warn!("notification persist failed: {}", e);
            }
        }
    }

    pub async fn delete_notification(&self, id: &str) {
        let mut list = self.load_raw().await;
        let before = list.len();
        list.retain(|record| record.id != id);

        if list.len() != before {
            if let Err(e) = self.persist(&list).await {
                tracing::warn!("notification persist failed: {}", e);
            }
        }
    }

    pub async fn clear_all(&self) {
        if let Err(e) = self.storage.remove(storage::keys::NOTIFICATIONS).await {
            tracing::warn!("notification clear failed: {}", e);
        }
    }

    pub async fn unread_count(&self) -> usize {
        self.load_raw()
            .await
            .iter()
            .filter(|record| !record.read)
            .count()
    }
}
