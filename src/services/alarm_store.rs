use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::models::{Alarm, AlarmCondition, PriceType};
use crate::services::storage::{self, KeyValueStore};

/// User input for a new alarm, as collected by the creation form.
pub struct NewAlarm {
    pub code: String,
    pub name: String,
    pub price_type: PriceType,
    pub condition: AlarmCondition,
    pub target_price: String,
}

/// Durable alarm collection, stored as one JSON document under a fixed key.
/// All writes are replace-all; callers re-read before mutating.
#[derive(Clone)]
pub struct AlarmStore {
    storage: Arc<dyn KeyValueStore>,
}

impl AlarmStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Reads the full alarm list. Absent or unreadable data loads as empty;
    /// the failure is logged, never raised.
    pub async fn load_alarms(&self) -> Vec<Alarm> {
        let raw = match self.storage.get(storage::keys::ALARMS).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("alarm store read failed: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Alarm>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("stored alarms unreadable, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn save_alarms(&self, alarms: &[Alarm]) -> Result<(), String> {
        let raw = serde_json::to_string(alarms).map_err(|e| e.to_string())?;
        self.storage.set(storage::keys::ALARMS, &raw).await
    }

    pub async fn create_alarm(&self, new: NewAlarm) -> Result<Alarm, String> {
        let now = Utc::now();

        let alarm = Alarm {
            id: now.timestamp_micros().to_string(),
            code: new.code.trim().to_uppercase(),
            name: new.name,
            price_type: new.price_type,
            condition: new.condition,
            target_price: new.target_price,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            triggered: false,
            triggered_at: None,
        };

        let mut alarms = self.load_alarms().await;
        alarms.push(alarm.clone());
        self.save_alarms(&alarms).await?;

        Ok(alarm)
    }

    pub async fn delete_alarm(&self, id: &str) -> Result<(), String> {
        let mut alarms = self.load_alarms().await;
        alarms.retain(|a| a.id != id);
        self.save_alarms(&alarms).await
    }

    /// Re-arms a previously fired alarm so it can trigger again.
    pub async fn reset_alarm(&self, id: &str) -> Result<(), String> {
        let mut alarms = self.load_alarms().await;
        for alarm in alarms.iter_mut() {
            if alarm.id == id {
                alarm.triggered = false;
                alarm.triggered_at = None;
            }
        }
        self.save_alarms(&alarms).await
    }

    /// Marks the given alarms as fired. Alarms already triggered keep their
    /// original `triggered_at`.
    pub async fn mark_triggered(&self, ids: &[String]) -> Result<(), String> {
        if ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut alarms = self.load_alarms().await;
        for alarm in alarms.iter_mut() {
            if !alarm.triggered && ids.iter().any(|id| *id == alarm.id) {
                alarm.triggered = true;
                alarm.triggered_at = Some(now.clone());
            }
        }
        self.save_alarms(&alarms).await
    }
}
