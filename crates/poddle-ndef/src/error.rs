use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum NdefError {
    /// The record stream could not be split into well-formed records
    #[error("malformed NDEF message: {0}")]
    MalformedMessage(String),

    /// A record description is missing a required field or holds an illegal value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Error = NdefError;
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl NdefError {
    pub fn malformed(reason: impl Display) -> Self {
        Self::MalformedMessage(reason.to_string())
    }

    pub fn invalid(reason: impl Display) -> Self {
        Self::InvalidArgument(reason.to_string())
    }
}
