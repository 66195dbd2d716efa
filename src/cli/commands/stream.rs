//! Live stream command implementation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use fxlab_config::load_config;
use fxlab_core::error::DataError;
use fxlab_data::{JsonCache, StreamClient, StreamHandler, StreamSink};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{error, info, warn};

/// Feeds stream messages into the JSON cache so a later backtest run can
/// pick up where the stream left off.
struct CacheRecorder {
    cache: JsonCache,
    received: u64,
}

#[async_trait]
impl StreamHandler for CacheRecorder {
    async fn will_connect(&mut self) {
        info!("connecting to stream");
    }

    async fn connected(&mut self, _sink: &mut StreamSink) -> Result<(), DataError> {
        info!("stream up");
        Ok(())
    }

    async fn received(&mut self, message: String) {
        self.received += 1;
        let parsed: Value = match serde_json::from_str(&message) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable stream message skipped");
                return;
            }
        };

        let mut entries = HashMap::new();
        entries.insert("last_event".to_string(), parsed);
        entries.insert("events_seen".to_string(), json!(self.received));
        if let Err(e) = self.cache.update(&entries) {
            error!(error = %e, "cache update failed");
        }
    }

    async fn closed(&mut self, error: DataError) {
        warn!(%error, "stream connection closed");
    }
}

pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path).context("Failed to load configuration")?;
    let stream = config
        .stream
        .context("No [stream] section in configuration")?;

    let mut handler = CacheRecorder {
        cache: JsonCache::new(stream.cache_file.clone().into()),
        received: 0,
    };

    let client = StreamClient::new(stream.url, stream.auto_reconnect);
    client.run(&mut handler).await?;

    Ok(())
}
