//! Emails sent for a reservation request

mod guest_confirmation;
mod operator_notification;

pub use guest_confirmation::GuestConfirmationEmail;
pub use operator_notification::OperatorNotificationEmail;

use askama::Template;

use crate::domain::communication::mailer::Message;

use super::SubmitReservationError;

/// Renders a template to HTML with its stylesheet inlined into the elements.
fn render_inlined<T: Template>(template: &T) -> Result<String, SubmitReservationError> {
    Ok(css_inline::inline(&template.render()?)?)
}

/// Builds a [`Message`] from the rendered bodies of an email.
fn build_message<T: Template>(
    template: &T,
    from: &str,
    to: &str,
    subject: String,
    plain_body: String,
) -> Result<Message, SubmitReservationError> {
    Ok(Message {
        to: to.to_string(),
        from: from.to_string(),
        subject,
        html_body: render_inlined(template)?,
        plain_body,
    })
}
