//! TCP connection bootstrap.
//!
//! Connecting and registering are one step: every loop receives a connection
//! that has already sent NICK/USER/JOIN. Registration is fire-and-forget; a
//! rejected nickname or channel is not detected here, the listen loop simply
//! prints whatever the server sends back.

use crate::config::SessionConfig;
use crate::irc::commands;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::{debug, info};

/// Failure to establish a session. Always fatal; nothing retries.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("Connection error: {server}:{port}: {source}")]
    Connect {
        server: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("Connection error: registration failed: {0}")]
    Register(#[from] std::io::Error),
}

/// A live, registered IRC session over one TCP stream.
///
/// Each loop owns its connection outright; in `both` mode two of these exist
/// side by side, which means two sessions under the same nickname.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Connect to the configured server and send the handshake. No timeout
    /// is set, so an unreachable host may block here indefinitely.
    pub async fn open(config: &SessionConfig) -> Result<Self, ConnectError> {
        debug!("connecting to {}:{}", config.server, config.port);
        let stream = TcpStream::connect((config.server.as_str(), config.port))
            .await
            .map_err(|source| ConnectError::Connect {
                server: config.server.clone(),
                port: config.port,
                source,
            })?;
        info!("connected to {}:{}", config.server, config.port);

        let mut conn = Self { stream };
        conn.register(config).await?;
        Ok(conn)
    }

    /// Send NICK, USER, and JOIN back-to-back without awaiting any reply.
    async fn register(&mut self, config: &SessionConfig) -> Result<(), ConnectError> {
        self.stream
            .write_all(commands::nick(&config.username).as_bytes())
            .await?;
        self.stream
            .write_all(commands::user(&config.username).as_bytes())
            .await?;
        self.stream
            .write_all(commands::join(&config.channel).as_bytes())
            .await?;
        self.stream.flush().await?;
        info!("registered as {} in {}", config.username, config.channel);
        Ok(())
    }

    /// Split into independently owned halves for a loop that reads and
    /// writes the same stream.
    pub fn into_split(self) -> (OwnedReadHalf, OwnedWriteHalf) {
        self.stream.into_split()
    }

    /// Hand the whole stream to a loop that only writes.
    pub fn into_stream(self) -> TcpStream {
        self.stream
    }
}
