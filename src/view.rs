use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Error sending message")]
pub struct SendError;

/// The notification channel between the engine and whatever renders it.
pub trait SendMsg {
    fn send(&self, msg: &str) -> Result<(), SendError>;
}

/// Writes each notification as one line on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl SendMsg for ConsoleSink {
    fn send(&self, msg: &str) -> Result<(), SendError> {
        let mut out = std::io::stdout();
        writeln!(out, "{}", msg).map_err(|_| SendError)
    }
}
