//! Mail and venue configuration

use std::convert::Infallible;

use clap::Parser;

use crate::domain::reservations::Venue;

/// Used when neither `EMAIL_FROM` nor `EMAIL_USER` is set
pub const DEFAULT_SENDER: &str = "noreply@sushichef.com";

/// Used when neither `CONTACT_EMAIL` nor `EMAIL_USER` is set
pub const DEFAULT_OPERATOR: &str = "contact@sushichef.com";

/// Mail configuration, read from the environment on every submission
#[derive(Clone, Default, Debug, PartialEq, Eq, Parser)]
pub struct MailConfig {
    /// Hosted mail service; `gmail` selects the Gmail relay
    #[arg(long, env = "EMAIL_SERVICE")]
    pub email_service: Option<String>,

    /// Account used for the hosted service, and fallback sender/operator address
    #[arg(long, env = "EMAIL_USER")]
    pub email_user: Option<String>,

    /// App password for the hosted service
    #[arg(long, env = "EMAIL_PASS")]
    pub email_pass: Option<String>,

    /// The SMTP host
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// The SMTP port, 587 when unset
    #[arg(long, env = "SMTP_PORT")]
    pub smtp_port: Option<u16>,

    /// Connect with implicit TLS instead of upgrading with STARTTLS
    #[arg(
        long,
        env = "SMTP_SECURE",
        action = clap::ArgAction::Set,
        default_value_t = false,
        value_parser = enabled
    )]
    pub smtp_secure: bool,

    /// The SMTP username
    #[arg(long, env = "SMTP_USER")]
    pub smtp_user: Option<String>,

    /// The SMTP password
    #[arg(long, env = "SMTP_PASS")]
    pub smtp_pass: Option<String>,

    /// Resend API key
    #[arg(long, env = "RESEND_API_KEY")]
    pub resend_api_key: Option<String>,

    /// Sender address override
    #[arg(long, env = "EMAIL_FROM")]
    pub email_from: Option<String>,

    /// Address that receives operator notifications
    #[arg(long, env = "CONTACT_EMAIL")]
    pub contact_email: Option<String>,
}

impl MailConfig {
    /// Reads the configuration from the current process environment.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse_from([env!("CARGO_PKG_NAME")])
    }

    /// The address messages are sent from
    pub fn sender(&self) -> String {
        set(&self.email_from)
            .or_else(|| set(&self.email_user))
            .unwrap_or(DEFAULT_SENDER)
            .to_string()
    }

    /// The restaurant address that receives operator notifications
    pub fn operator(&self) -> String {
        set(&self.contact_email)
            .or_else(|| set(&self.email_user))
            .unwrap_or(DEFAULT_OPERATOR)
            .to_string()
    }
}

/// Only `true` enables a switch; any other value leaves it off.
fn enabled(value: &str) -> Result<bool, Infallible> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

/// Returns the value unless it is unset or blank.
pub(crate) fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

/// Venue configuration, read once at startup
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct VenueConfig {
    /// Name printed on guest confirmations
    #[arg(long, env = "VENUE_NAME", default_value = "Tashi Phuri")]
    pub venue_name: String,

    /// Title printed under the name
    #[arg(long, env = "VENUE_TITLE", default_value = "Master Sushi Chef")]
    pub venue_title: String,

    /// Postal address
    #[arg(
        long,
        env = "VENUE_ADDRESS",
        default_value = "14 Avenue Gambetta, 75020 Paris, France"
    )]
    pub venue_address: String,

    /// Contact phone number
    #[arg(long, env = "VENUE_PHONE", default_value = "+33 7 83 57 72 38")]
    pub venue_phone: String,

    /// Booking note
    #[arg(long, env = "VENUE_AVAILABILITY", default_value = "By appointment only")]
    pub venue_availability: String,
}

impl From<VenueConfig> for Venue {
    fn from(config: VenueConfig) -> Self {
        Self {
            name: config.venue_name,
            title: config.venue_title,
            address: config.venue_address,
            phone: config.venue_phone,
            availability: config.venue_availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_addresses_default_when_unset() {
        let config = MailConfig::default();

        assert_eq!(config.sender(), DEFAULT_SENDER);
        assert_eq!(config.operator(), DEFAULT_OPERATOR);
    }

    #[test]
    fn test_email_user_is_fallback_address() {
        let config = MailConfig {
            email_user: Some("chef@example.com".to_string()),
            ..Default::default()
        };

        assert_eq!(config.sender(), "chef@example.com");
        assert_eq!(config.operator(), "chef@example.com");
    }

    #[test]
    fn test_explicit_addresses_take_precedence() {
        let config = MailConfig {
            email_user: Some("chef@example.com".to_string()),
            email_from: Some("bookings@example.com".to_string()),
            contact_email: Some("front-desk@example.com".to_string()),
            ..Default::default()
        };

        assert_eq!(config.sender(), "bookings@example.com");
        assert_eq!(config.operator(), "front-desk@example.com");
    }

    #[test]
    fn test_blank_addresses_are_ignored() {
        let config = MailConfig {
            email_from: Some(String::new()),
            contact_email: Some(" ".to_string()),
            ..Default::default()
        };

        assert_eq!(config.sender(), DEFAULT_SENDER);
        assert_eq!(config.operator(), DEFAULT_OPERATOR);
    }

    #[test]
    fn test_mail_config_parses_flags() -> TestResult {
        let config = MailConfig::try_parse_from([
            "omakase-reservations",
            "--smtp-host",
            "mail.example.com",
            "--smtp-port",
            "2525",
            "--smtp-secure",
            "true",
        ])?;

        assert_eq!(config.smtp_host.as_deref(), Some("mail.example.com"));
        assert_eq!(config.smtp_port, Some(2525));
        assert!(config.smtp_secure);

        Ok(())
    }

    #[test]
    fn test_smtp_secure_is_only_enabled_by_true() -> TestResult {
        for (value, secure) in [("TRUE", true), ("1", false), ("yes", false), ("off", false)] {
            let config = MailConfig::try_parse_from([
                "omakase-reservations",
                "--smtp-host",
                "mail.example.com",
                "--smtp-secure",
                value,
            ])?;

            assert_eq!(config.smtp_secure, secure, "SMTP_SECURE={value:?}");
        }

        Ok(())
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = MailConfig::try_parse_from(["omakase-reservations", "--smtp-port", "abc"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_venue_config_defaults() -> TestResult {
        let venue: Venue = VenueConfig::try_parse_from(["omakase-reservations"])?.into();

        assert_eq!(venue, Venue::default());

        Ok(())
    }
}
