//! Reservation requests submitted through the website's contact form.

mod emails;
mod errors;
mod request;
mod service;
mod venue;

pub use emails::{GuestConfirmationEmail, OperatorNotificationEmail};
pub use errors::SubmitReservationError;
pub use request::{ReservationForm, ReservationRequest, ValidationError};
pub use service::{ReservationService, ReservationServiceImpl, SubmissionReceipt};
pub use venue::Venue;

#[cfg(test)]
pub mod tests {
    pub use super::service::MockReservationService;
}
