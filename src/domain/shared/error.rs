//! Domain errors

use thiserror::Error;

/// Message returned when the account lookup does not resolve.
pub const INVALID_ACCOUNT_MESSAGE: &str = "Invalid Twilio Account details.";

/// Coarse classification of a [`CallError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Account lookup failed, credentials are unusable
    InvalidCredentials,
    /// The vendor answered the request with an error
    Rejected,
    /// The request never got a response
    Network,
    /// The vendor answered with a body we could not read
    InvalidResponse,
}

/// Failure of an outbound call attempt.
///
/// `Display` is always the bare message text so callers relying on the
/// message keep seeing exactly what the vendor reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("Invalid Twilio Account details.")]
    InvalidAccount,

    #[error("{message}")]
    Rejected {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    InvalidResponse(String),
}

impl CallError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CallError::InvalidAccount => ErrorKind::InvalidCredentials,
            CallError::Rejected { .. } => ErrorKind::Rejected,
            CallError::Transport(_) => ErrorKind::Network,
            CallError::InvalidResponse(_) => ErrorKind::InvalidResponse,
        }
    }

    /// Vendor error code, when the vendor supplied one
    pub fn vendor_code(&self) -> Option<u32> {
        match self {
            CallError::Rejected { code, .. } => *code,
            _ => None,
        }
    }
}
