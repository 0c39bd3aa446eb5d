//! Errors raised at the edges of the client: configuration, connection and transport.
//!
//! Rule violations inside a game are never errors; the engine drops them silently.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported url scheme `{0}`, expected ws or wss")]
    UnsupportedScheme(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("websocket error: {0}")]
    WebSocket(#[from] Box<tungstenite::Error>),

    #[error("transport closed")]
    TransportClosed,
}

impl From<tungstenite::Error> for ClientError {
    fn from(err: tungstenite::Error) -> Self {
        ClientError::WebSocket(Box::new(err))
    }
}
