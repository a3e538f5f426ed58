pub mod storage;
pub mod backend;
pub mod price_feed;
pub mod alarm_monitor;

pub mod alarm_store;
pub mod notification_center;
pub mod favorites_service;
pub mod session_service;
pub mod notifier;
