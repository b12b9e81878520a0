mod config;
mod irc;
mod session;

use crate::config::{Cli, Mode, SessionConfig};
use crate::irc::connection::Connection;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout is reserved for chat output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (mode, config) = Cli::parse().into_parts();

    if let Err(e) = run(mode, config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(mode: Mode, config: SessionConfig) -> Result<()> {
    match mode {
        Mode::Listen => {
            let conn = Connection::open(&config).await?;
            session::listen(conn, &config).await
        }
        Mode::Send => {
            let conn = Connection::open(&config).await?;
            session::send(conn, &config).await
        }
        Mode::Both => {
            // Two independent connections, constructed here so a connect
            // failure is fatal before either loop starts. The loops share
            // nothing; this is two sessions under one nickname.
            let listen_conn = Connection::open(&config).await?;
            let send_conn = Connection::open(&config).await?;

            let listen_config = config.clone();
            let listener = tokio::spawn(async move {
                session::listen(listen_conn, &listen_config).await
            });
            let sender = tokio::spawn(async move {
                session::send(send_conn, &config).await
            });

            let (listen_result, send_result) = tokio::try_join!(listener, sender)?;
            listen_result?;
            send_result
        }
    }
}
