//! WebSocket transport to the authority server.
//!
//! The socket is split in two halves: a writer task drains an unbounded channel of
//! intents, and the reader half is exposed as a stream of decoded server events that
//! the `GameClient` actor consumes with `add_stream`.

use futures_util::stream::LocalBoxStream;
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{self, Message};
use url::Url;

use crate::client::error::ClientError;
use crate::protocol::{ClientIntent, ServerEvent};

/// Outbound half of the event channel.
pub trait Transport {
    /// Queue an intent. Never blocks on the network.
    fn send(&self, intent: ClientIntent) -> Result<(), ClientError>;
}

pub struct WsTransport {
    tx: mpsc::UnboundedSender<ClientIntent>,
}

impl Transport for WsTransport {
    fn send(&self, intent: ClientIntent) -> Result<(), ClientError> {
        self.tx.send(intent).map_err(|_| ClientError::TransportClosed)
    }
}

/// Open the socket. Must be called from inside a running actix system.
pub async fn connect(
    url: &Url,
) -> Result<(WsTransport, LocalBoxStream<'static, ServerEvent>), ClientError> {
    info!("[Transport] Connecting to {}", url);
    let (socket, _response) = connect_async(url.as_str()).await?;
    let (mut sink, stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ClientIntent>();

    actix::spawn(async move {
        while let Some(intent) = rx.recv().await {
            let text = match serde_json::to_string(&intent) {
                Ok(text) => text,
                Err(e) => {
                    error!("[Transport] Failed to encode {:?}: {}", intent, e);
                    continue;
                }
            };
            debug!("[Transport] -> {}", text);
            if let Err(e) = sink.send(Message::text(text)).await {
                warn!("[Transport] Send failed, stopping writer: {}", e);
                break;
            }
        }
        let _ = sink.close().await;
        debug!("[Transport] Writer stopped");
    });

    let inbound = stream
        .filter_map(|frame| async move { decode_frame(frame) })
        .boxed_local();
    Ok((WsTransport { tx }, inbound))
}

/// Turn one WebSocket frame into a server event. Anything else is logged and skipped.
pub fn decode_frame(frame: Result<Message, tungstenite::Error>) -> Option<ServerEvent> {
    match frame {
        Ok(Message::Text(text)) => match serde_json::from_str::<ServerEvent>(text.as_str()) {
            Ok(event) => {
                debug!("[Transport] <- {:?}", event);
                Some(event)
            }
            Err(e) => {
                warn!("[Transport] Dropping undecodable frame ({}): {}", e, text.as_str());
                None
            }
        },
        Ok(Message::Close(reason)) => {
            info!("[Transport] Server closed the connection: {:?}", reason);
            None
        }
        Ok(_) => None,
        Err(e) => {
            warn!("[Transport] Receive error: {}", e);
            None
        }
    }
}
