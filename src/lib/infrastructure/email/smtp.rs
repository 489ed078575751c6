//! SMTP email service implementation

use std::fmt;

use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
        response::Response,
    },
    AsyncSmtpTransport, AsyncTransport, Message as LettreMessage, Tokio1Executor,
};
use tracing::debug;

use crate::domain::communication::mailer::{Mailer, MailerError, Message, SendReceipt};

use super::strategy::{SmtpSecurity, SmtpSettings};

/// SMTP mailer
pub struct SMTPMailer {
    settings: SmtpSettings,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl fmt::Debug for SMTPMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SMTPMailer")
            .field("settings", &self.settings)
            .finish()
    }
}

impl SMTPMailer {
    /// Create a new SMTP mailer.
    ///
    /// No connection is opened until the first message is sent.
    pub fn new(settings: SmtpSettings) -> Result<Self, MailerError> {
        let tls_parameters = TlsParameters::new(settings.host.clone())?;

        let tls = match settings.security {
            SmtpSecurity::Implicit => Tls::Wrapper(tls_parameters),
            SmtpSecurity::Opportunistic => Tls::Opportunistic(tls_parameters),
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            .port(settings.port)
            .tls(tls);

        if let Some(credentials) = &settings.credentials {
            builder = builder.credentials(Credentials::new(
                credentials.username.clone(),
                credentials.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            settings,
        })
    }

    /// The connection settings this mailer was built from
    pub fn settings(&self) -> &SmtpSettings {
        &self.settings
    }
}

fn mailbox(address: &str) -> Result<Mailbox, MailerError> {
    address
        .parse()
        .map_err(|_| MailerError::InvalidEmail(address.to_string()))
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send_email(&self, message: &Message) -> Result<SendReceipt, MailerError> {
        let email = LettreMessage::builder()
            .from(mailbox(&message.from)?)
            .to(mailbox(&message.to)?)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.plain_body.clone(),
                message.html_body.clone(),
            ))?;

        debug!(host = %self.settings.host, to = %message.to, "sending email over SMTP");

        let response = self.transport.send(email).await?;

        Ok(receipt(&response))
    }
}

/// The server's reply lines, used as the message id
fn receipt(response: &Response) -> SendReceipt {
    SendReceipt::new(response.message().collect::<Vec<_>>().join(" "))
}
