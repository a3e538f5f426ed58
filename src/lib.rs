//! Library entrypoint for goldwatch.
//!
//! This file exists mainly to make testing easy (integration tests under
//! `tests/` can import the stores, the evaluator, and the app state).

pub mod config;
pub mod locale;
pub mod models;
pub mod services;

use std::sync::Arc;

use crate::services::alarm_store::AlarmStore;
use crate::services::backend::BackendClient;
use crate::services::favorites_service::FavoritesStore;
use crate::services::notification_center::NotificationCenter;
use crate::services::notifier::{AlertSink, NotificationDispatcher};
use crate::services::session_service::SessionStore;
use crate::services::storage::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub storage: Arc<dyn KeyValueStore>,
    pub alarms: AlarmStore,
    pub notifications: NotificationCenter,
    pub favorites: FavoritesStore,
    pub session: SessionStore,
    pub backend: BackendClient,
    pub dispatcher: Arc<NotificationDispatcher>,
    pub alerts: Arc<dyn AlertSink>,
    pub events_tx: tokio::sync::broadcast::Sender<String>,
}
