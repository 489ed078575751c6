//! Operator notification email

use askama::Template;

use crate::domain::{
    communication::mailer::Message,
    reservations::{ReservationRequest, SubmitReservationError},
};

/// Shown when the guest did not give a preferred date
pub const DATE_NOT_SPECIFIED: &str = "Not specified";

/// Shown when the guest did not write any special requests
pub const NO_SPECIAL_REQUESTS: &str = "None";

/// Notification telling the restaurant about a new reservation request
#[derive(Debug, Template)]
#[template(path = "emails/reservations/operator_notification.html")]
pub struct OperatorNotificationEmail<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    date_preference: &'a str,
    number_of_guests: &'a str,
    special_requests: &'a str,
}

impl<'a> OperatorNotificationEmail<'a> {
    /// Creates a new `OperatorNotificationEmail`
    pub fn new(request: &'a ReservationRequest) -> Self {
        Self {
            name: request.name(),
            email: request.email(),
            phone: request.phone(),
            date_preference: request.date_preference().unwrap_or(DATE_NOT_SPECIFIED),
            number_of_guests: request.number_of_guests(),
            special_requests: request.special_requests().unwrap_or(NO_SPECIAL_REQUESTS),
        }
    }

    /// The subject line, which names the guest
    pub fn subject(&self) -> String {
        format!("New Reservation Request from {}", self.name)
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "New Reservation Request\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Preferred Date: {date_preference}\n\
             Number of Guests: {number_of_guests}\n\
             Special Requests: {special_requests}\n\
             \n\
             Please contact the guest to confirm the reservation.\n",
            name = self.name,
            email = self.email,
            phone = self.phone,
            date_preference = self.date_preference,
            number_of_guests = self.number_of_guests,
            special_requests = self.special_requests,
        )
    }

    /// Renders the email into a [`Message`] addressed to the restaurant
    pub fn message(&self, from: &str, operator: &str) -> Result<Message, SubmitReservationError> {
        super::build_message(self, from, operator, self.subject(), self.render_plain())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::reservations::{request::tests::minimal_form, ReservationForm};

    use super::*;

    #[test]
    fn test_subject_names_the_guest() -> TestResult {
        let request = ReservationRequest::try_from(minimal_form())?;

        assert_eq!(
            OperatorNotificationEmail::new(&request).subject(),
            "New Reservation Request from A. Guest"
        );

        Ok(())
    }

    #[test]
    fn test_absent_optional_fields_render_placeholders() -> TestResult {
        let request = ReservationRequest::try_from(minimal_form())?;

        let message = OperatorNotificationEmail::new(&request)
            .message("noreply@example.com", "contact@example.com")?;

        assert!(message.plain_body.contains("Preferred Date: Not specified"));
        assert!(message.plain_body.contains("Special Requests: None"));
        assert!(message.html_body.contains("Not specified"));
        assert!(message.html_body.contains("None"));
        assert!(!message.plain_body.contains("undefined"));

        Ok(())
    }

    #[test]
    fn test_provided_fields_are_rendered() -> TestResult {
        let request = ReservationRequest::try_from(ReservationForm {
            date_preference: Some("2026-11-02".to_string()),
            special_requests: Some("No shellfish".to_string()),
            ..minimal_form()
        })?;

        let message = OperatorNotificationEmail::new(&request)
            .message("noreply@example.com", "contact@example.com")?;

        assert_eq!(message.to, "contact@example.com");
        assert_eq!(message.from, "noreply@example.com");
        assert!(message.plain_body.contains("Email: a@example.com"));
        assert!(message.plain_body.contains("Preferred Date: 2026-11-02"));
        assert!(message.plain_body.contains("Special Requests: No shellfish"));
        assert!(message.html_body.contains("No shellfish"));
        assert!(!message.html_body.contains(DATE_NOT_SPECIFIED));

        Ok(())
    }

    #[test]
    fn test_guest_input_is_escaped_in_html() -> TestResult {
        let request = ReservationRequest::try_from(ReservationForm {
            special_requests: Some("<script>alert(1)</script>".to_string()),
            ..minimal_form()
        })?;

        let message = OperatorNotificationEmail::new(&request)
            .message("noreply@example.com", "contact@example.com")?;

        assert!(!message.html_body.contains("<script>"));
        assert!(message.html_body.contains("&lt;script&gt;"));

        Ok(())
    }

    #[test]
    fn test_stylesheet_is_inlined() -> TestResult {
        let request = ReservationRequest::try_from(minimal_form())?;

        let message = OperatorNotificationEmail::new(&request)
            .message("noreply@example.com", "contact@example.com")?;

        assert!(!message.html_body.contains("<style>"));
        assert!(message.html_body.contains("style=\""));

        Ok(())
    }
}
