//! Transport resolution
//!
//! A [`TransportResolver`] decides, for a single submission, which [`Mailer`]
//! carries the messages and which addresses they are sent from and to.

use std::fmt;

#[cfg(test)]
use mockall::mock;

use super::mailer::{Mailer, MailerError};

/// A mailer together with the addresses resolved from the same configuration
pub struct ResolvedTransport {
    /// The mailer to send through
    pub mailer: Box<dyn Mailer>,

    /// The address messages are sent from
    pub sender: String,

    /// The restaurant address that receives operator notifications
    pub operator: String,
}

impl fmt::Debug for ResolvedTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedTransport")
            .field("mailer", &"Mailer")
            .field("sender", &self.sender)
            .field("operator", &self.operator)
            .finish()
    }
}

/// Resolves a transport from configuration
pub trait TransportResolver: Send + Sync + 'static {
    /// Resolves the transport to use for one submission.
    ///
    /// Called once per submission; implementations must not cache the result
    /// so that configuration changes apply to the next request.
    fn resolve(&self) -> Result<ResolvedTransport, MailerError>;
}

#[cfg(test)]
mock! {
    pub TransportResolver {}

    impl TransportResolver for TransportResolver {
        fn resolve(&self) -> Result<ResolvedTransport, MailerError>;
    }
}
