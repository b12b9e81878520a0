//! Command-line configuration.
//!
//! Everything the client needs is supplied as positional arguments; there is
//! no config file and nothing is persisted. The parsed arguments split into
//! a run [`Mode`] and an immutable [`SessionConfig`] that is handed to each
//! loop explicitly.

use clap::{Parser, ValueEnum};

/// `minirc <listen|send|both> <server> <port> <channel> <username>`
#[derive(Debug, Parser)]
#[command(name = "minirc", version, about = "A minimal command-line IRC client")]
pub struct Cli {
    /// Run the receive loop, the send loop, or both concurrently
    #[arg(value_enum)]
    pub mode: Mode,

    /// IRC server hostname or address
    pub server: String,

    /// Server port (plain-text IRC is usually 6667)
    pub port: u16,

    /// Channel to join, e.g. `#rust`
    pub channel: String,

    /// Nickname and username for the session
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print incoming channel traffic
    Listen,
    /// Forward typed lines as channel messages
    Send,
    /// Listen and send at the same time, over two separate connections
    Both,
}

/// Session identity, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub server: String,
    pub port: u16,
    pub channel: String,
    pub username: String,
}

impl Cli {
    pub fn into_parts(self) -> (Mode, SessionConfig) {
        let config = SessionConfig {
            server: self.server,
            port: self.port,
            channel: self.channel,
            username: self.username,
        };
        (self.mode, config)
    }
}
