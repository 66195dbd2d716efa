//! Reconnecting websocket stream client.

use async_trait::async_trait;
use futures::stream::{SplitSink, StreamExt};
use fxlab_core::error::DataError;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};
use tracing::{info, warn};

/// Write half of an open stream connection, handed to the handler so it can
/// send subscription messages.
pub type StreamSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Lifecycle hooks for a stream consumer.
#[async_trait]
pub trait StreamHandler: Send {
    /// Called before every connection attempt, including reconnects.
    async fn will_connect(&mut self);

    /// Called once the connection is up; subscribe here.
    async fn connected(&mut self, sink: &mut StreamSink) -> Result<(), DataError>;

    /// Called for every text message.
    async fn received(&mut self, message: String);

    /// Called when the connection drops. A reconnect follows when the
    /// client was built with `auto_reconnect`.
    async fn closed(&mut self, error: DataError);
}

/// Websocket client that keeps a handler fed with text messages.
pub struct StreamClient {
    url: String,
    auto_reconnect: bool,
}

impl StreamClient {
    pub fn new(url: impl Into<String>, auto_reconnect: bool) -> Self {
        Self {
            url: url.into(),
            auto_reconnect,
        }
    }

    /// Connect and pump messages into the handler until the connection
    /// closes; with `auto_reconnect` the loop never returns except on a
    /// failed connect without reconnection.
    pub async fn run(&self, handler: &mut dyn StreamHandler) -> Result<(), DataError> {
        loop {
            handler.will_connect().await;

            let stream = match connect_async(self.url.as_str()).await {
                Ok((stream, _response)) => stream,
                Err(e) => {
                    let error = DataError::StreamError(e.to_string());
                    handler.closed(DataError::StreamError(e.to_string())).await;
                    if !self.auto_reconnect {
                        return Err(error);
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                    continue;
                }
            };
            info!(url = %self.url, "stream connected");

            let (mut sink, mut source) = stream.split();
            if let Err(e) = handler.connected(&mut sink).await {
                handler.closed(e).await;
                if !self.auto_reconnect {
                    return Ok(());
                }
                continue;
            }

            while let Some(message) = source.next().await {
                match message {
                    Ok(Message::Text(text)) => handler.received(text).await,
                    Ok(Message::Close(_)) => {
                        warn!(url = %self.url, "stream closed by peer");
                        handler
                            .closed(DataError::StreamError("closed by peer".into()))
                            .await;
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(url = %self.url, error = %e, "stream read failed");
                        handler.closed(DataError::StreamError(e.to_string())).await;
                        break;
                    }
                }
            }

            if !self.auto_reconnect {
                return Ok(());
            }
        }
    }
}
