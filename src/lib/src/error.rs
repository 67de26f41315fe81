//! Errors for the journal library
//!

use derive_more::{Display, Error};
use std::io;

#[derive(Debug, Display, Error)]
pub enum JournalError {
    // Entries
    #[display("Invalid journal entry: {message}")]
    ParsingError { message: String },
    #[display("Could not serialize entries: {message}")]
    SerializationError { message: String },

    // Config
    #[display("Invalid server config: {message}")]
    InvalidConfig { message: String },

    // External
    #[display("IO error: {_0}")]
    IO(#[error(source)] io::Error),
}

impl JournalError {
    pub fn parsing_error(message: impl AsRef<str>) -> Self {
        JournalError::ParsingError {
            message: message.as_ref().to_string(),
        }
    }

    pub fn serialization_error(message: impl AsRef<str>) -> Self {
        JournalError::SerializationError {
            message: message.as_ref().to_string(),
        }
    }

    pub fn invalid_config(message: impl AsRef<str>) -> Self {
        JournalError::InvalidConfig {
            message: message.as_ref().to_string(),
        }
    }

    pub fn invalid_port(port: impl AsRef<str>) -> Self {
        let err = format!("Port must be a number between 0 and 65535, got '{}'", port.as_ref());
        JournalError::invalid_config(err)
    }

    /// Problems with what the client sent, as opposed to failures on our side
    pub fn is_client_error(&self) -> bool {
        matches!(self, JournalError::ParsingError { .. })
    }
}

impl From<io::Error> for JournalError {
    fn from(error: io::Error) -> Self {
        JournalError::IO(error)
    }
}
