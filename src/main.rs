use std::sync::Arc;

use goldwatch::models::PriceSnapshot;
use goldwatch::services::alarm_monitor::spawn_alarm_monitor;
use goldwatch::services::alarm_store::AlarmStore;
use goldwatch::services::backend::BackendClient;
use goldwatch::services::favorites_service::FavoritesStore;
use goldwatch::services::notification_center::NotificationCenter;
use goldwatch::services::notifier::{LogAlertSink, LogBackend, NotificationDispatcher};
use goldwatch::services::price_feed::spawn_price_feed;
use goldwatch::services::session_service::SessionStore;
use goldwatch::services::storage::{JsonFileStore, KeyValueStore};
use goldwatch::{config, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let storage: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(&settings.data_dir));

    let (events_tx, _events_rx) = tokio::sync::broadcast::channel::<String>(16);
    let (prices_tx, prices_rx) = tokio::sync::watch::channel::<Option<PriceSnapshot>>(None);

    let state = AppState {
        alarms: AlarmStore::new(storage.clone()),
        notifications: NotificationCenter::new(storage.clone()),
        favorites: FavoritesStore::new(storage.clone()),
        session: SessionStore::new(storage.clone()),
        backend: BackendClient::new(settings.backend_base_url.clone()),
        dispatcher: Arc::new(NotificationDispatcher::new(Arc::new(LogBackend))),
        alerts: Arc::new(LogAlertSink),
        storage,
        events_tx,
        settings: settings.clone(),
    };

    spawn_price_feed(settings.feed_ws_url.clone(), prices_tx);
    spawn_alarm_monitor(state, prices_rx);

    tracing::info!("goldwatch running, watching {}", settings.feed_ws_url);

    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("shutting down");
}
