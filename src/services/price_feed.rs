use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::watch;
use tokio::time;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::models::PriceSnapshot;

/// Spawns the websocket reader that keeps `prices_tx` holding the latest
/// full snapshot. Reconnects with a fixed delay on close or error.
pub fn spawn_price_feed(url: String, prices_tx: watch::Sender<Option<PriceSnapshot>>) {
    tokio::spawn(async move {
        loop {
            if let Err(e) = run_connection(&url, &prices_tx).await {
                tracing::error!("price feed connection lost: {}", e);
            }

            time::sleep(Duration::from_secs(5)).await;
            tracing::info!("reconnecting to price feed...");
        }
    });
}

async fn run_connection(
    url: &str,
    prices_tx: &watch::Sender<Option<PriceSnapshot>>,
) -> Result<(), String> {
    tracing::info!("connecting to price feed: {}", url);

    let (feed_ws, _) = connect_async(url).await.map_err(|e| e.to_string())?;
    tracing::info!("price feed connected");

    let (mut write, mut read) = feed_ws.split();

    while let Some(msg) = read.next().await {
        match msg {
            Ok(Message::Text(txt)) => match serde_json::from_str::<serde_json::Value>(&txt) {
                Ok(raw) => {
                    // Every frame is a full replace; the feed never sends deltas.
                    let snapshot = PriceSnapshot::from_feed_json(&raw);
                    if snapshot.is_empty() {
                        tracing::warn!("price feed frame had no usable entries");
                    }
                    let _ = prices_tx.send(Some(snapshot));
                }
                Err(e) => {
                    tracing::warn!("unparseable price feed frame: {}", e);
                }
            },
            Ok(Message::Ping(payload)) => {
                let _ = write.send(Message::Pong(payload)).await;
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(())
}
