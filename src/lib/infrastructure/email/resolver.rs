//! Resolves the transport for a submission from the mail configuration

use tracing::debug;

use crate::domain::communication::{
    mailer::{Mailer, MailerError},
    transport::{ResolvedTransport, TransportResolver},
};

use super::{config::MailConfig, log::LogMailer, smtp::SMTPMailer, strategy::TransportStrategy};

/// Where the mail configuration comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MailConfigSource {
    /// Re-read from the process environment on every submission
    Environment,

    /// A fixed configuration
    Fixed(MailConfig),
}

/// [`TransportResolver`] driven by [`MailConfig`]
#[derive(Clone, Debug)]
pub struct ConfiguredTransportResolver {
    source: MailConfigSource,
}

impl ConfiguredTransportResolver {
    /// A resolver that reads the environment for each submission
    pub fn from_environment() -> Self {
        Self {
            source: MailConfigSource::Environment,
        }
    }

    /// A resolver that always uses `config`
    pub fn fixed(config: MailConfig) -> Self {
        Self {
            source: MailConfigSource::Fixed(config),
        }
    }

    fn config(&self) -> Result<MailConfig, MailerError> {
        match &self.source {
            MailConfigSource::Environment => {
                MailConfig::from_env().map_err(|err| MailerError::Configuration(err.to_string()))
            }
            MailConfigSource::Fixed(config) => Ok(config.clone()),
        }
    }
}

impl TransportResolver for ConfiguredTransportResolver {
    fn resolve(&self) -> Result<ResolvedTransport, MailerError> {
        let config = self.config()?;
        let strategy = TransportStrategy::resolve(&config);

        debug!(strategy = strategy.name(), "resolved mail transport");

        let mailer: Box<dyn Mailer> = match strategy.smtp_settings() {
            Some(settings) => Box::new(SMTPMailer::new(settings)?),
            None => Box::new(LogMailer),
        };

        Ok(ResolvedTransport {
            mailer,
            sender: config.sender(),
            operator: config.operator(),
        })
    }
}
