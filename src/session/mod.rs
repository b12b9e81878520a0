//! The listen and send loops.
//!
//! Each loop owns its connection outright. In `both` mode the two run as
//! independent tasks over two separate connections and never communicate;
//! there is no shared state and nothing to synchronize.

use crate::config::SessionConfig;
use crate::irc::commands::{self, Input};
use crate::irc::connection::Connection;
use crate::irc::framer::{LineBuffer, READ_CHUNK_SIZE};
use crate::irc::message::{self, ServerEvent};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Print incoming traffic until the server closes the connection.
pub async fn listen(conn: Connection, config: &SessionConfig) -> Result<()> {
    let (reader, writer) = conn.into_split();
    run_listen(reader, writer, config).await
}

/// Forward console input as channel messages until `/quit` or end of input.
pub async fn send(conn: Connection, config: &SessionConfig) -> Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    run_send(input, conn.into_stream(), config).await
}

async fn run_listen<R, W>(mut reader: R, mut writer: W, config: &SessionConfig) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    let mut buffer = LineBuffer::new();

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            info!("server closed the connection");
            break;
        }
        buffer.push_bytes(&chunk[..n]);

        while let Some(line) = buffer.next_line() {
            // Raw echo first, before any classification.
            println!("{}", line);

            match message::classify(&line, &config.username) {
                ServerEvent::Ping { token } => {
                    if token.is_none() {
                        warn!("PING carried no token, replying with bare PONG");
                    }
                    writer
                        .write_all(commands::pong(token.as_deref()).as_bytes())
                        .await?;
                    writer.flush().await?;
                }
                ServerEvent::SessionEnd => {
                    // Ends this drain pass only; lines still buffered wait
                    // for the next read, and the read decides whether the
                    // stream is actually finished.
                    debug!("QUIT/ERROR seen, pausing line drain");
                    break;
                }
                ServerEvent::SelfEcho => {}
                ServerEvent::Chat { sender, text } => {
                    println!("<{}> {}", sender, text);
                }
                ServerEvent::Other => {}
            }
        }
    }

    Ok(())
}

async fn run_send<R, W>(input: R, mut writer: W, config: &SessionConfig) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match commands::parse_input(&line) {
            Input::Quit => {
                writer.write_all(commands::quit().as_bytes()).await?;
                writer.flush().await?;
                info!("sent QUIT, leaving");
                break;
            }
            Input::Message(text) => {
                writer
                    .write_all(commands::privmsg(&config.channel, &text).as_bytes())
                    .await?;
                writer.flush().await?;
            }
        }
    }
    Ok(())
}
