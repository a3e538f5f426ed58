use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub feed_ws_url: String,
    pub backend_base_url: String,
    pub data_dir: String,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let feed_ws_url = env::var("FEED_WS_URL")
        .unwrap_or_else(|_| "wss://feed.goldwatch.example/prices".to_string());

    let backend_base_url = env::var("BACKEND_BASE_URL")
        .unwrap_or_else(|_| "https://api.goldwatch.example/v1".to_string());

    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

    Settings {
        feed_ws_url,
        backend_base_url,
        data_dir,
    }
}
