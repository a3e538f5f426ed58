use std::sync::Arc;

use crate::services::storage::{self, KeyValueStore};

/// Small per-device flags: onboarding completion and the employee auth
/// token received from the backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub async fn onboarding_complete(&self) -> bool {
        match self.storage.get(storage::keys::ONBOARDING_COMPLETE).await {
            Ok(Some(v)) => v == "true",
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("onboarding flag read failed: {}", e);
                false
            }
        }
    }

    pub async fn set_onboarding_complete(&self) -> Result<(), String> {
        self.storage
            .set(storage::keys::ONBOARDING_COMPLETE, "true")
            .await
    }

    pub async fn employee_token(&self) -> Option<String> {
        match self.storage.get(storage::keys::EMPLOYEE_TOKEN).await {
            Ok(Some(token)) if !token.trim().is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("employee token read failed: {}", e);
                None
            }
        }
    }

    pub async fn save_employee_token(&self, token: &str) -> Result<(), String> {
        self.storage.set(storage::keys::EMPLOYEE_TOKEN, token).await
    }

    pub async fn clear_employee_token(&self) -> Result<(), String> {
        self.storage.remove(storage::keys::EMPLOYEE_TOKEN).await
    }
}
