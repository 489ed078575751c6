//! Mailer module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod errors;
mod message;

pub use errors::MailerError;
pub use message::Message;

/// Acknowledgement that a transport accepted a message.
///
/// This is not a delivery confirmation: it only records that the send call
/// returned without error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendReceipt {
    /// The identifier the transport reported for the message
    pub message_id: String,
}

impl SendReceipt {
    /// Create a new receipt
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }
}

/// A mail transport
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The rendered [`Message`], including both HTML and plain text bodies.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing a [`SendReceipt`] if the transport accepted
    /// the message, or an [`Err`] containing a [`MailerError`] otherwise.
    async fn send_email(&self, message: &Message) -> Result<SendReceipt, MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, message: &Message) -> Result<SendReceipt, MailerError>;
    }
}
