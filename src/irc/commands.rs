//! Outbound command formatting and console input parsing.
//!
//! Every wire command is CRLF-terminated, per IRC framing. Input typed at
//! the console is either the `/quit` command or plain text to forward as a
//! channel message.

/// One parsed line of console input.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// `/quit` in any letter case, surrounding whitespace ignored.
    Quit,
    /// Anything else, forwarded verbatim as a channel message.
    Message(String),
}

/// Classify one line of console input. Only `/quit` is a command; everything
/// else goes to the channel untouched.
pub fn parse_input(line: &str) -> Input {
    if line.trim().eq_ignore_ascii_case("/quit") {
        Input::Quit
    } else {
        Input::Message(line.to_string())
    }
}

pub fn nick(username: &str) -> String {
    format!("NICK {}\r\n", username)
}

pub fn user(username: &str) -> String {
    format!("USER {} 0 * :{}\r\n", username, username)
}

pub fn join(channel: &str) -> String {
    format!("JOIN {}\r\n", channel)
}

pub fn privmsg(channel: &str, text: &str) -> String {
    format!("PRIVMSG {} :{}\r\n", channel, text)
}

/// Keepalive reply. A PING that carried no token still gets a bare PONG.
pub fn pong(token: Option<&str>) -> String {
    match token {
        Some(token) => format!("PONG {}\r\n", token),
        None => "PONG\r\n".to_string(),
    }
}

pub fn quit() -> String {
    "QUIT :Goodbye\r\n".to_string()
}
