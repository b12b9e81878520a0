//! Server line classification.
//!
//! Each complete line from the server is sorted into the handful of cases
//! the listen loop reacts to. Order matters: PING wins over everything,
//! QUIT/ERROR ends the session even when buried in another command, and
//! self-echoed lines are dropped before PRIVMSG display.

/// What the listen loop should do with one server line.
#[derive(Debug, PartialEq, Eq)]
pub enum ServerEvent {
    /// Keepalive probe; reply with PONG carrying the token, if any.
    Ping { token: Option<String> },
    /// The line mentions QUIT or ERROR; stop draining buffered lines.
    SessionEnd,
    /// Our own traffic echoed back; the raw echo already covered it.
    SelfEcho,
    /// A chat message to display as `<sender> text`.
    Chat { sender: String, text: String },
    /// Nothing beyond the raw echo.
    Other,
}

/// Classify a server line against the session's own username.
pub fn classify(line: &str, username: &str) -> ServerEvent {
    if line.starts_with("PING") {
        return ServerEvent::Ping {
            token: ping_token(line),
        };
    }

    if line.contains("QUIT") || line.contains("ERROR") {
        return ServerEvent::SessionEnd;
    }

    if line.starts_with(&format!(":{}!", username)) {
        return ServerEvent::SelfEcho;
    }

    if line.contains("PRIVMSG") {
        return parse_chat(line);
    }

    ServerEvent::Other
}

/// The PONG token: second whitespace-separated field, trailing-parameter
/// colon stripped. `None` when the PING carries no field at all.
fn ping_token(line: &str) -> Option<String> {
    let field = line.split_whitespace().nth(1)?;
    let token = field.strip_prefix(':').unwrap_or(field);
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Extract sender and text from a PRIVMSG line.
///
/// The line splits on single spaces: the sender sits between `:` and `!` in
/// the prefix, the text is everything from the fourth field on with one
/// leading `:` stripped.
fn parse_chat(line: &str) -> ServerEvent {
    let parts: Vec<&str> = line.split(' ').collect();

    let prefix = parts[0].split('!').next().unwrap_or("");
    let sender = prefix.strip_prefix(':').unwrap_or(prefix).to_string();

    let text = if parts.len() > 3 {
        parts[3..].join(" ")
    } else {
        String::new()
    };
    let text = text.strip_prefix(':').unwrap_or(&text).to_string();

    ServerEvent::Chat { sender, text }
}
