//! Transport selection
//!
//! [`TransportStrategy::resolve`] is a pure function of a [`MailConfig`]: the
//! strategies are checked in a fixed priority order and the first match wins.

use std::fmt;

use super::config::{set, MailConfig};

/// Port used by the generic SMTP strategy when `SMTP_PORT` is unset
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Gmail SMTP relay
pub const GMAIL_HOST: &str = "smtp.gmail.com";

/// Resend SMTP relay
pub const RESEND_HOST: &str = "smtp.resend.com";

/// Username Resend expects alongside an API key
pub const RESEND_USERNAME: &str = "resend";

/// Implicit TLS port used by the hosted relays
pub const SUBMISSIONS_PORT: u16 = 465;

/// How the SMTP connection is secured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// TLS from the first byte
    Implicit,

    /// Plain connection upgraded with STARTTLS when the server offers it
    Opportunistic,
}

/// SMTP username and password
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    /// The SMTP username
    pub username: String,

    /// The SMTP password
    pub password: String,
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

impl SmtpCredentials {
    fn from_pair(username: &Option<String>, password: &Option<String>) -> Option<Self> {
        set(username).map(|username| Self {
            username: username.to_string(),
            password: password.clone().unwrap_or_default(),
        })
    }
}

/// Everything needed to open an SMTP connection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmtpSettings {
    /// The SMTP host
    pub host: String,

    /// The SMTP port
    pub port: u16,

    /// Connection security
    pub security: SmtpSecurity,

    /// Credentials, when the server requires authentication
    pub credentials: Option<SmtpCredentials>,
}

/// The transport selected for a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportStrategy {
    /// `EMAIL_SERVICE=gmail`: Gmail relay with an account and app password
    Gmail {
        /// Account credentials
        credentials: Option<SmtpCredentials>,
    },

    /// `SMTP_HOST` is set: a generic SMTP server
    Smtp(SmtpSettings),

    /// `RESEND_API_KEY` is set: the Resend relay
    Resend {
        /// The Resend API key
        api_key: String,
    },

    /// Nothing is configured: messages are written to the log only
    Log,
}

impl TransportStrategy {
    /// Selects the transport for `config`.
    pub fn resolve(config: &MailConfig) -> Self {
        if set(&config.email_service).is_some_and(|service| service.eq_ignore_ascii_case("gmail"))
        {
            return Self::Gmail {
                credentials: SmtpCredentials::from_pair(&config.email_user, &config.email_pass),
            };
        }

        if let Some(host) = set(&config.smtp_host) {
            return Self::Smtp(SmtpSettings {
                host: host.to_string(),
                port: config.smtp_port.unwrap_or(DEFAULT_SMTP_PORT),
                security: if config.smtp_secure {
                    SmtpSecurity::Implicit
                } else {
                    SmtpSecurity::Opportunistic
                },
                credentials: SmtpCredentials::from_pair(&config.smtp_user, &config.smtp_pass),
            });
        }

        if let Some(api_key) = set(&config.resend_api_key) {
            return Self::Resend {
                api_key: api_key.to_string(),
            };
        }

        Self::Log
    }

    /// The SMTP connection for this strategy, or [`None`] for the log transport
    pub fn smtp_settings(&self) -> Option<SmtpSettings> {
        match self {
            Self::Gmail { credentials } => Some(SmtpSettings {
                host: GMAIL_HOST.to_string(),
                port: SUBMISSIONS_PORT,
                security: SmtpSecurity::Implicit,
                credentials: credentials.clone(),
            }),
            Self::Smtp(settings) => Some(settings.clone()),
            Self::Resend { api_key } => Some(SmtpSettings {
                host: RESEND_HOST.to_string(),
                port: SUBMISSIONS_PORT,
                security: SmtpSecurity::Implicit,
                credentials: Some(SmtpCredentials {
                    username: RESEND_USERNAME.to_string(),
                    password: api_key.clone(),
                }),
            }),
            Self::Log => None,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gmail { .. } => "gmail",
            Self::Smtp(_) => "smtp",
            Self::Resend { .. } => "resend",
            Self::Log => "log",
        }
    }
}
