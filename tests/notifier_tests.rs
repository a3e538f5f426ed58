use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use goldwatch::services::notifier::{NotificationBackend, NotificationDispatcher};
use serde_json::json;

#[derive(Default)]
struct FlakyBackend {
    granted: bool,
    prompt_fails: bool,
    schedule_fails: bool,
    prompts: Mutex<u32>,
    scheduled: Mutex<Vec<String>>,
}

#[async_trait]
impl NotificationBackend for FlakyBackend {
    async fn permission_granted(&self) -> Result<bool, String> {
        Ok(self.granted)
    }

    async fn request_permission(&self) -> Result<bool, String> {
        *self.prompts.lock().unwrap() += 1;
        if self.prompt_fails {
            Err("prompt unavailable".to_string())
        } else {
            Ok(self.granted)
        }
    }

    async fn schedule(
        &self,
        title: &str,
        _body: &str,
        _data: &serde_json::Value,
    ) -> Result<(), String> {
        if self.schedule_fails {
            return Err("delivery channel down".to_string());
        }
        self.scheduled.lock().unwrap().push(title.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn granted_permission_skips_the_prompt() {
    let backend = Arc::new(FlakyBackend {
        granted: true,
        ..Default::default()
    });
    let dispatcher = NotificationDispatcher::new(backend.clone());

    assert!(dispatcher.request_permission().await);
    assert_eq!(*backend.prompts.lock().unwrap(), 0);
}

#[tokio::test]
async fn failing_prompt_reads_as_denied() {
    let backend = Arc::new(FlakyBackend {
        granted: false,
        prompt_fails: true,
        ..Default::default()
    });
    let dispatcher = NotificationDispatcher::new(backend.clone());

    assert!(!dispatcher.request_permission().await);
    assert_eq!(*backend.prompts.lock().unwrap(), 1);
}

#[tokio::test]
async fn schedule_is_skipped_when_denied() {
    let backend = Arc::new(FlakyBackend::default());
    let dispatcher = NotificationDispatcher::new(backend.clone());

    dispatcher
        .schedule_immediate("title", "body", &json!({}))
        .await;

    assert!(backend.scheduled.lock().unwrap().is_empty());
}

#[tokio::test]
async fn schedule_failure_is_swallowed() {
    let backend = Arc::new(FlakyBackend {
        granted: true,
        schedule_fails: true,
        ..Default::default()
    });
    let dispatcher = NotificationDispatcher::new(backend.clone());

    // Must not panic or propagate.
    dispatcher
        .schedule_immediate("title", "body", &json!({}))
        .await;

    assert!(backend.scheduled.lock().unwrap().is_empty());
}

#[tokio::test]
async fn schedule_delivers_when_granted() {
    let backend = Arc::new(FlakyBackend {
        granted: true,
        ..Default::default()
    });
    let dispatcher = NotificationDispatcher::new(backend.clone());

    dispatcher
        .schedule_immediate("Fiyat Alarmı", "body", &json!({ "code": "GA" }))
        .await;

    assert_eq!(
        backend.scheduled.lock().unwrap().as_slice(),
        &["Fiyat Alarmı".to_string()]
    );
}
