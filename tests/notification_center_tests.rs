use std::sync::Arc;

use async_trait::async_trait;
use goldwatch::models::{NotificationKind, NotificationRecord};
use goldwatch::services::notification_center::{NotificationCenter, MAX_STORED_NOTIFICATIONS};
use goldwatch::services::storage::{self, KeyValueStore, MemoryStore};
use serde_json::json;

fn test_center() -> (NotificationCenter, Arc<MemoryStore>) {
    let mem = Arc::new(MemoryStore::new());
    (NotificationCenter::new(mem.clone()), mem)
}

async fn stored_titles(mem: &MemoryStore) -> Vec<String> {
    let raw = mem
        .get(storage::keys::NOTIFICATIONS)
        .await
        .expect("get")
        .expect("document present");
    let list: Vec<NotificationRecord> = serde_json::from_str(&raw).expect("valid document");
    list.into_iter().map(|n| n.title).collect()
}

#[tokio::test]
async fn save_returns_the_record_and_persists_it() {
    let (center, _mem) = test_center();

    let record = center
        .save_notification(
            "Fiyat Alarmı",
            "GA Satış fiyatı 4.000,00 üstüne çıktı",
            NotificationKind::Alarm,
            json!({ "code": "GA" }),
        )
        .await;

    assert!(!record.id.is_empty());
    assert!(!record.read);
    assert_eq!(record.kind, NotificationKind::Alarm);

    let loaded = center.load_notifications().await;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, record.id);
}

#[tokio::test]
async fn keeps_only_the_most_recent_fifty() {
    let (center, mem) = test_center();

    for i in 1..=55 {
        center
            .save_notification(&format!("N{i}"), "body", NotificationKind::Info, json!(null))
            .await;
    }

    let titles = stored_titles(&mem).await;
    assert_eq!(titles.len(), MAX_STORED_NOTIFICATIONS);

    // Oldest evicted first: N1..N5 are gone, insertion order kept.
    assert_eq!(titles.first().map(String::as_str), Some("N6"));
    assert_eq!(titles.last().map(String::as_str), Some("N55"));
    for (i, title) in titles.iter().enumerate() {
        assert_eq!(title, &format!("N{}", i + 6));
    }
}

#[tokio::test]
async fn load_sorts_newest_first() {
    let (center, mem) = test_center();

    let seeded = json!([
        {
            "id": "old", "title": "old", "body": "", "type": "info",
            "data": null, "read": false, "createdAt": "2026-08-01T10:00:00.000Z"
        },
        {
            "id": "new", "title": "new", "body": "", "type": "info",
            "data": null, "read": false, "createdAt": "2026-08-03T10:00:00.000Z"
        },
        {
            "id": "mid", "title": "mid", "body": "", "type": "info",
            "data": null, "read": false, "createdAt": "2026-08-02T10:00:00.000Z"
        }
    ]);
    mem.set(storage::keys::NOTIFICATIONS, &seeded.to_string())
        .await
        .expect("seed");

    let loaded = center.load_notifications().await;
    let ids: Vec<&str> = loaded.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[tokio::test]
async fn mark_read_and_unread_count() {
    let (center, _mem) = test_center();

    let first = center
        .save_notification("one", "body", NotificationKind::Info, json!(null))
        .await;
    center
        .save_notification("two", "body", NotificationKind::Price, json!(null))
        .await;

    assert_eq!(center.unread_count().await, 2);

    center.mark_read(&first.id).await;
    assert_eq!(center.unread_count().await, 1);

    // Marking again is a no-op.
    center.mark_read(&first.id).await;
    assert_eq!(center.unread_count().await, 1);

    let loaded = center.load_notifications().await;
    let read_one = loaded.iter().find(|n| n.id == first.id).expect("record");
    assert!(read_one.read);
}

#[tokio::test]
async fn delete_removes_a_single_record() {
    let (center, _mem) = test_center();

    let first = center
        .save_notification("one", "body", NotificationKind::Info, json!(null))
        .await;
    let second = center
        .save_notification("two", "body", NotificationKind::Info, json!(null))
        .await;

    center.delete_notification(&first.id).await;

    let loaded = center.load_notifications().await;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, second.id);
}

#[tokio::test]
async fn clear_all_empties_the_store() {
    let (center, mem) = test_center();

    center
        .save_notification("one", "body", NotificationKind::Info, json!(null))
        .await;
    center.clear_all().await;

    assert!(center.load_notifications().await.is_empty());
    assert_eq!(center.unread_count().await, 0);
    assert!(mem
        .get(storage::keys::NOTIFICATIONS)
        .await
        .expect("get")
        .is_none());
}

#[tokio::test]
async fn corrupt_payload_loads_as_empty() {
    let (center, mem) = test_center();
    mem.set(storage::keys::NOTIFICATIONS, "[{broken")
        .await
        .expect("seed");

    assert!(center.load_notifications().await.is_empty());
    assert_eq!(center.unread_count().await, 0);
}

// Store that accepts reads but rejects writes.
struct ReadOnlyStore;

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Err("disk full".to_string())
    }

    async fn remove(&self, _key: &str) -> Result<(), String> {
        Err("disk full".to_string())
    }
}

#[tokio::test]
async fn failed_persist_still_returns_the_record() {
    let center = NotificationCenter::new(Arc::new(ReadOnlyStore));

    let record = center
        .save_notification("one", "body", NotificationKind::Info, json!(null))
        .await;

    assert_eq!(record.title, "one");
    // Nothing was stored, and nothing panicked.
    assert!(center.load_notifications().await.is_empty());
}
