//! Reservation service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{mailer::SendReceipt, transport::TransportResolver};

use super::{
    GuestConfirmationEmail, OperatorNotificationEmail, ReservationForm, ReservationRequest,
    SubmitReservationError, Venue,
};

/// Acknowledgement that both emails for a reservation were handed to the transport.
///
/// It does not assert that either email was delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Reference used to correlate the submission in the logs
    pub reference: Uuid,

    /// Receipt for the operator notification
    pub notification: SendReceipt,

    /// Receipt for the guest confirmation
    pub confirmation: SendReceipt,
}

/// Reservation service
#[async_trait]
pub trait ReservationService: Clone + Send + Sync + 'static {
    /// Submits a reservation request.
    ///
    /// # Arguments
    /// * `form` - The [`ReservationForm`] as the guest filled it in.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing a [`SubmissionReceipt`] once both the operator
    /// notification and the guest confirmation have been handed to the transport,
    /// or an [`Err`] containing a [`SubmitReservationError`] if validation or either send fails.
    async fn submit_reservation(
        &self,
        form: ReservationForm,
    ) -> Result<SubmissionReceipt, SubmitReservationError>;
}

#[cfg(test)]
mock! {
    pub ReservationService {}

    impl Clone for ReservationService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl ReservationService for ReservationService {
        async fn submit_reservation(
            &self,
            form: ReservationForm,
        ) -> Result<SubmissionReceipt, SubmitReservationError>;
    }
}

/// Reservation service implementation
#[derive(Debug)]
pub struct ReservationServiceImpl<T>
where
    T: TransportResolver,
{
    transports: Arc<T>,
    venue: Arc<Venue>,
}

impl<T> Clone for ReservationServiceImpl<T>
where
    T: TransportResolver,
{
    fn clone(&self) -> Self {
        Self {
            transports: Arc::clone(&self.transports),
            venue: Arc::clone(&self.venue),
        }
    }
}

impl<T> ReservationServiceImpl<T>
where
    T: TransportResolver,
{
    /// Creates a new reservation service.
    pub fn new(transports: Arc<T>, venue: Venue) -> Self {
        Self {
            transports,
            venue: Arc::new(venue),
        }
    }
}

#[async_trait]
impl<T> ReservationService for ReservationServiceImpl<T>
where
    T: TransportResolver,
{
    async fn submit_reservation(
        &self,
        form: ReservationForm,
    ) -> Result<SubmissionReceipt, SubmitReservationError> {
        let request = ReservationRequest::try_from(form)?;
        let reference = Uuid::now_v7();

        async move {
            let transport = self.transports.resolve()?;

            let notification = OperatorNotificationEmail::new(&request)
                .message(&transport.sender, &transport.operator)?;
            let confirmation =
                GuestConfirmationEmail::new(&request, &self.venue).message(&transport.sender)?;

            // Both sends are attempted; the first failure is the one reported.
            let notified = transport.mailer.send_email(&notification).await;
            if let Err(err) = &notified {
                error!(to = %notification.to, "operator notification failed: {err}");
            }

            let confirmed = transport.mailer.send_email(&confirmation).await;
            if let Err(err) = &confirmed {
                error!(to = %confirmation.to, "guest confirmation failed: {err}");
            }

            let receipt = SubmissionReceipt {
                reference,
                notification: notified?,
                confirmation: confirmed?,
            };

            info!(
                notification = %receipt.notification.message_id,
                confirmation = %receipt.confirmation.message_id,
                "reservation request submitted"
            );

            Ok::<_, SubmitReservationError>(receipt)
        }
        .instrument(info_span!("submit_reservation", %reference))
        .await
    }
}
