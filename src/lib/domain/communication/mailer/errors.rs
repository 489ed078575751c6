//! Mailer errors

use lettre::{error::Error as MessageError, transport::smtp::Error as SmtpError};
use thiserror::Error;
use tracing::debug;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The mail configuration could not be read
    #[error("invalid mail configuration: {0}")]
    Configuration(String),

    /// An address could not be parsed as a mailbox
    #[error("invalid email address \"{0}\"")]
    InvalidEmail(String),

    /// The transport rejected the message
    #[error("failed to send email: {0}")]
    SendError(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<SmtpError> for MailerError {
    fn from(err: SmtpError) -> Self {
        debug!("SmtpError -> MailerError");

        MailerError::SendError(err.to_string())
    }
}

impl From<MessageError> for MailerError {
    fn from(err: MessageError) -> Self {
        debug!("lettre::error::Error -> MailerError");

        MailerError::UnknownError(err.into())
    }
}
