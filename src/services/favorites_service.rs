use std::sync::Arc;

use crate::services::storage::{self, KeyValueStore};

/// The user's favorite instrument codes, persisted as one JSON array.
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub async fn load_favorites(&self) -> Vec<String> {
        let raw = match self.storage.get(storage::keys::FAVORITES).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("favorites read failed: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("stored favorites unreadable, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn add_favorite(&self, code: &str) -> Result<Vec<String>, String> {
        let code = code.trim().to_uppercase();
        let mut favorites = self.load_favorites().await;

        if !favorites.iter().any(|c| *c == code) {
            favorites.push(code);
            self.save(&favorites).await?;
        }

        Ok(favorites)
    }

    pub async fn remove_favorite(&self, code: &str) -> Result<Vec<String>, String> {
        let code = code.trim().to_uppercase();
        let mut favorites = self.load_favorites().await;

        let before = favorites.len();
        favorites.retain(|c| *c != code);
        if favorites.len() != before {
            self.save(&favorites).await?;
        }

        Ok(favorites)
    }

    async fn save(&self, favorites: &[String]) -> Result<(), String> {
        let raw = serde_json::to_string(favorites).map_err(|e| e.to_string())?;
        self.storage.set(storage::keys::FAVORITES, &raw).await
    }
}
