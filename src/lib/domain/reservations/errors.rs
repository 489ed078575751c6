//! Errors raised while submitting a reservation

use css_inline::InlineError;
use thiserror::Error;
use tracing::debug;

use crate::domain::communication::mailer::MailerError;

use super::ValidationError;

/// Errors that can occur when submitting a reservation request
#[derive(Debug, Error)]
pub enum SubmitReservationError {
    /// The form is missing required fields; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// One of the emails could not be rendered
    #[error("could not render reservation email: {0}")]
    Render(String),

    /// The transport could not be resolved or rejected a message
    #[error(transparent)]
    Transport(#[from] MailerError),
}

impl From<askama::Error> for SubmitReservationError {
    fn from(err: askama::Error) -> Self {
        debug!("askama::Error -> SubmitReservationError");

        SubmitReservationError::Render(err.to_string())
    }
}

impl From<InlineError> for SubmitReservationError {
    fn from(err: InlineError) -> Self {
        debug!("InlineError -> SubmitReservationError");

        SubmitReservationError::Render(err.to_string())
    }
}
