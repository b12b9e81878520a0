//! IRC protocol layer: connection bootstrap, line framing, and command formatting.

pub mod commands;
pub mod connection;
pub mod framer;
pub mod message;
