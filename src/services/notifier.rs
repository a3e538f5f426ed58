use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// The OS notification service behind the dispatcher. Implementations talk
/// to the platform; the dispatcher owns the best-effort error handling.
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    /// Current permission state without prompting.
    async fn permission_granted(&self) -> Result<bool, String>;

    /// Prompts the user if the platform requires it; returns the resulting
    /// state. Safe to call repeatedly.
    async fn request_permission(&self) -> Result<bool, String>;

    /// Schedules an immediate-delivery notification.
    async fn schedule(&self, title: &str, body: &str, data: &Value) -> Result<(), String>;
}

/// Stand-in backend for environments without a system notification service.
pub struct LogBackend;

#[async_trait]
impl NotificationBackend for LogBackend {
    async fn permission_granted(&self) -> Result<bool, String> {
        Ok(true)
    }

    async fn request_permission(&self) -> Result<bool, String> {
        Ok(true)
    }

    async fn schedule(&self, title: &str, body: &str, _data: &Value) -> Result<(), String> {
        tracing::info!("notification: {}: {}", title, body);
        Ok(())
    }
}

/// Thin wrapper over the backend. Nothing here propagates errors: a failed
/// permission query reads as "denied", a failed schedule is logged.
pub struct NotificationDispatcher {
    backend: Arc<dyn NotificationBackend>,
}

impl NotificationDispatcher {
    pub fn new(backend: Arc<dyn NotificationBackend>) -> Self {
        Self { backend }
    }

    /// Idempotent permission check, prompting only when still undecided.
    pub async fn request_permission(&self) -> bool {
        match self.backend.permission_granted().await {
            Ok(true) => true,
            Ok(false) => match self.backend.request_permission().await {
                Ok(granted) => granted,
                Err(e) => {
                    tracing::warn!("notification permission request failed: {}", e);
                    false
                }
            },
            Err(e) => {
                tracing::warn!("notification permission query failed: {}", e);
                false
            }
        }
    }

    /// Best-effort immediate notification: requests permission when needed,
    /// no-ops (with a log line) on denial or scheduling failure.
    pub async fn schedule_immediate(&self, title: &str, body: &str, data: &Value) {
        if !self.request_permission().await {
            tracing::info!("notifications not permitted, skipping: {}", title);
            return;
        }

        if let Err(e) = self.backend.schedule(title, body, data).await {
            tracing::warn!("notification scheduling failed: {}", e);
        }
    }
}

/// Blocking acknowledgment shown when an alarm fires while the app is
/// foregrounded. The UI layer provides the real implementation.
pub trait AlertSink: Send + Sync {
    fn show_alert(&self, title: &str, message: &str);
}

/// Default sink for headless runs.
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn show_alert(&self, title: &str, message: &str) {
        tracing::info!("alert: {}: {}", title, message);
    }
}
