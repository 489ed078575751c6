//! Guest confirmation email

use askama::Template;

use crate::domain::{
    communication::mailer::Message,
    reservations::{ReservationRequest, SubmitReservationError, Venue},
};

/// Shown when the guest did not give a preferred date
pub const DATE_TO_BE_DISCUSSED: &str = "To be discussed";

/// Acknowledges a reservation request to the guest who submitted it
#[derive(Debug, Template)]
#[template(path = "emails/reservations/guest_confirmation.html")]
pub struct GuestConfirmationEmail<'a> {
    venue: &'a Venue,
    name: &'a str,
    email: &'a str,
    date_preference: &'a str,
    number_of_guests: &'a str,
}

impl<'a> GuestConfirmationEmail<'a> {
    /// Creates a new `GuestConfirmationEmail`
    pub fn new(request: &'a ReservationRequest, venue: &'a Venue) -> Self {
        Self {
            venue,
            name: request.name(),
            email: request.email(),
            date_preference: request.date_preference().unwrap_or(DATE_TO_BE_DISCUSSED),
            number_of_guests: request.number_of_guests(),
        }
    }

    /// The subject line; it does not vary between guests
    pub fn subject(&self) -> String {
        format!("Reservation Request Received - {}", self.venue.name)
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "Reservation Request Received\n\
             \n\
             Dear {name},\n\
             \n\
             Thank you for your interest in our omakase experience. We have received your \
             reservation request and will contact you shortly to confirm your booking.\n\
             \n\
             Request Details:\n\
             Preferred Date: {date_preference}\n\
             Number of Guests: {number_of_guests}\n\
             \n\
             We look forward to providing you with an unforgettable dining experience.\n\
             \n\
             一期一会 - One encounter, one opportunity\n\
             \n\
             {venue_name} - {venue_title}\n\
             {venue_address}\n\
             {venue_phone}\n\
             {venue_availability}\n",
            name = self.name,
            date_preference = self.date_preference,
            number_of_guests = self.number_of_guests,
            venue_name = self.venue.name,
            venue_title = self.venue.title,
            venue_address = self.venue.address,
            venue_phone = self.venue.phone,
            venue_availability = self.venue.availability,
        )
    }

    /// Renders the email into a [`Message`] addressed to the guest
    pub fn message(&self, from: &str) -> Result<Message, SubmitReservationError> {
        super::build_message(self, from, self.email, self.subject(), self.render_plain())
    }
}
