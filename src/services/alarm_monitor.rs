use tokio::sync::watch;

use crate::locale;
use crate::models::{Alarm, AlarmCondition, NotificationKind, PriceSnapshot, PriceType};
use crate::services::notification_center::NotificationCenter;
use crate::services::notifier::{AlertSink, NotificationDispatcher};
use crate::AppState;

/// Runs the alarm check on every price feed update.
pub fn spawn_alarm_monitor(state: AppState, mut prices_rx: watch::Receiver<Option<PriceSnapshot>>) {
    tokio::spawn(async move {
        loop {
            if prices_rx.changed().await.is_err() {
                tracing::info!("[alarm-monitor] price feed closed, stopping");
                break;
            }

            let snapshot = prices_rx.borrow_and_update().clone();
            let Some(snapshot) = snapshot else { continue };

            if let Err(e) = run_tick(&state, &snapshot).await {
                tracing::error!("[alarm-monitor] tick error: {}", e);
            }
        }
    });
}

async fn run_tick(state: &AppState, snapshot: &PriceSnapshot) -> Result<(), String> {
    if snapshot.is_empty() {
        return Ok(());
    }

    // 1) Load the current alarm set
    let alarms = state.alarms.load_alarms().await;
    if alarms.is_empty() {
        return Ok(());
    }

    // 2) Evaluate against the snapshot
    let triggered = check_alarms(
        snapshot,
        &alarms,
        &state.notifications,
        &state.dispatcher,
        state.alerts.as_ref(),
    )
    .await;

    if triggered.is_empty() {
        return Ok(());
    }

    // 3) Persist trigger state so the next tick skips these alarms
    state.alarms.mark_triggered(&triggered).await?;

    // 4) Let open screens refresh their alarm and notification lists
    let _ = state.events_tx.send("alarmsUpdated".to_string());
    let _ = state.events_tx.send("notificationsUpdated".to_string());

    Ok(())
}

/// Evaluates every untriggered alarm against the snapshot, in list order,
/// and returns the ids that newly satisfied their condition. Trigger state
/// is not persisted here; the caller marks the returned ids via the alarm
/// store. Per-alarm failures are skips, not aborts.
pub async fn check_alarms(
    snapshot: &PriceSnapshot,
    alarms: &[Alarm],
    notifications: &NotificationCenter,
    dispatcher: &NotificationDispatcher,
    alerts: &dyn AlertSink,
) -> Vec<String> {
    let mut newly_triggered: Vec<String> = Vec::new();

    for alarm in alarms {
        // Fired alarms stay fired until the user resets or deletes them.
        if alarm.triggered {
            continue;
        }

        // Instrument not quoted in this snapshot.
        let Some(entry) = snapshot.entry(&alarm.code) else {
            continue;
        };

        let current = match alarm.price_type {
            PriceType::Buying => entry.buying,
            PriceType::Selling => entry.selling,
        };
        let target = locale::parse_locale_number(&alarm.target_price);

        // A zero on either side means "no usable price" (see DESIGN.md).
        if current == 0.0 || target == 0.0 {
            continue;
        }

        let hit = match alarm.condition {
            AlarmCondition::Above => current >= target,
            AlarmCondition::Below => current <= target,
        };
        if !hit {
            continue;
        }

        let direction = match alarm.condition {
            AlarmCondition::Above => "üstüne çıktı",
            AlarmCondition::Below => "altına indi",
        };

        let title = "Fiyat Alarmı";
        let body = format!(
            "{} {} fiyatı {} {}. Güncel fiyat: {}",
            alarm.name,
            alarm.price_type.label(),
            alarm.target_price,
            direction,
            locale::format_price(current),
        );
        let data = serde_json::json!({
            "alarmId": alarm.id,
            "code": alarm.code,
            "targetPrice": alarm.target_price,
            "currentPrice": current,
        });

        notifications
            .save_notification(title, &body, NotificationKind::Alarm, data.clone())
            .await;
        alerts.show_alert(title, &body);
        dispatcher.schedule_immediate(title, &body, &data).await;

        newly_triggered.push(alarm.id.clone());
    }

    newly_triggered
}
