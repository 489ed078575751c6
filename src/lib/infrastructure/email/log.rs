//! Log-only mailer, used when no transport is configured

use async_trait::async_trait;
use tracing::info;

use crate::domain::communication::mailer::{Mailer, MailerError, Message, SendReceipt};

/// Identifier reported for every message the log mailer accepts
pub const LOG_MESSAGE_ID: &str = "log-only";

/// Writes messages to the log instead of sending them
#[derive(Clone, Copy, Debug, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_email(&self, message: &Message) -> Result<SendReceipt, MailerError> {
        info!(
            to = %message.to,
            subject = %message.subject,
            text = %message.plain_body,
            "email would be sent"
        );

        Ok(SendReceipt::new(LOG_MESSAGE_ID))
    }
}
