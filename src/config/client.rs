/// Client configuration.
///
/// Defaults live here as constants; the command line (with environment fallbacks)
/// overrides them and is validated into a [`ClientConfig`].
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::client::ClientError;
use crate::config::game::{BOARD_SIZE, TICK_INTERVAL, TURN_DURATION_SECS};
use crate::engine::EngineConfig;

/// Default WebSocket endpoint of the authority server. Frames are plain JSON text, not
/// Socket.IO packets.
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:8080/ws";

/// Largest board the client agrees to render.
pub const MAX_BOARD_SIZE: usize = 64;

/// Command line of the `caro-client` binary.
#[derive(Debug, Parser)]
#[command(name = "caro-client", version, about = "Terminal client for online caro matches")]
pub struct Cli {
    /// WebSocket URL of the game server.
    #[arg(long, env = "CARO_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,
    /// Seconds allowed for each of your turns.
    #[arg(long, env = "CARO_TURN_SECONDS", default_value_t = TURN_DURATION_SECS)]
    pub turn_seconds: u32,
    /// Side length of the board.
    #[arg(long, env = "CARO_BOARD_SIZE", default_value_t = BOARD_SIZE)]
    pub board_size: usize,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: Url,
    pub board_size: usize,
    pub turn_duration_secs: u32,
    pub tick_interval: Duration,
}

impl ClientConfig {
    /// Engine half of the configuration.
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            board_size: self.board_size,
            turn_duration_secs: self.turn_duration_secs,
        }
    }
}

impl TryFrom<Cli> for ClientConfig {
    type Error = ClientError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let server_url = Url::parse(&cli.server)?;
        match server_url.scheme() {
            "ws" | "wss" => {}
            other => return Err(ClientError::UnsupportedScheme(other.to_string())),
        }
        if cli.turn_seconds == 0 {
            return Err(ClientError::InvalidConfig(
                "turn duration must be at least one second".into(),
            ));
        }
        if cli.board_size == 0 || cli.board_size > MAX_BOARD_SIZE {
            return Err(ClientError::InvalidConfig(format!(
                "board size must be between 1 and {MAX_BOARD_SIZE}"
            )));
        }
        Ok(Self {
            server_url,
            board_size: cli.board_size,
            turn_duration_secs: cli.turn_seconds,
            tick_interval: TICK_INTERVAL,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["caro-client"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::try_from(cli(&[])).unwrap();
        assert_eq!(config.board_size, BOARD_SIZE);
        assert_eq!(config.turn_duration_secs, TURN_DURATION_SECS);
        assert_eq!(config.server_url.scheme(), "ws");
        assert_eq!(config.server_url.port(), Some(8080));
        assert_eq!(config.server_url.path(), "/ws");
    }

    #[test]
    fn test_http_scheme_rejected() {
        let err = ClientConfig::try_from(cli(&["--server", "http://localhost:5000"])).unwrap_err();
        assert!(matches!(err, ClientError::UnsupportedScheme(s) if s == "http"));
    }

    #[test]
    fn test_zero_turn_rejected() {
        let err = ClientConfig::try_from(cli(&["--turn-seconds", "0"])).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let err = ClientConfig::try_from(cli(&["--board-size", "65"])).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
