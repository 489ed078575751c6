//! Reservation request handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    domain::reservations::{ReservationForm, ReservationService, SubmitReservationError},
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Returned once both emails were handed to the mail transport
pub const SUBMITTED_MESSAGE: &str = "Reservation request submitted successfully";

/// Reservation request body, as posted by the website's contact form
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReservationBody {
    /// The guest's name
    #[serde(default)]
    #[schema(example = "A. Guest")]
    name: Option<String>,

    /// The guest's email address; the confirmation is sent here
    #[serde(default)]
    #[schema(example = "a@example.com")]
    email: Option<String>,

    /// The guest's phone number
    #[serde(default)]
    #[schema(example = "+33 6 12 34 56 78")]
    phone: Option<String>,

    /// Preferred date
    #[serde(default)]
    #[schema(example = "2026-11-02")]
    date_preference: Option<String>,

    /// Party size, as text or a number
    #[serde(default, deserialize_with = "text_or_number")]
    #[schema(value_type = Option<String>, example = "2")]
    number_of_guests: Option<String>,

    /// Special requests
    #[serde(default)]
    #[schema(example = "No shellfish")]
    special_requests: Option<String>,
}

impl From<SubmitReservationBody> for ReservationForm {
    fn from(body: SubmitReservationBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            phone: body.phone,
            date_preference: body.date_preference,
            number_of_guests: body.number_of_guests,
            special_requests: body.special_requests,
        }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}

/// Reservation request response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitReservationResponse {
    success: bool,

    #[schema(example = "Reservation request submitted successfully")]
    message: String,
}

/// Submit a reservation request
///
/// Emails the request to the restaurant, then a confirmation to the guest.
#[utoipa::path(
    post,
    operation_id = "submit_reservation",
    tag = "Reservations",
    path = "/api/contact",
    request_body = SubmitReservationBody,
    responses(
        (status = 200, description = "Both emails were handed to the mail transport", body = SubmitReservationResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse, example = json!({ "error": "Missing required fields" })),
        (status = 500, description = "An email could not be sent", body = ErrorResponse, example = json!({ "error": "Failed to send reservation request", "message": "Please try again later" })),
    )
)]
pub async fn handler<R: ReservationService>(
    State(state): State<AppState<R>>,
    request: Result<Json<SubmitReservationBody>, JsonRejection>,
) -> Result<Json<SubmitReservationResponse>, ApiError> {
    let Json(body) = request?;

    if let Err(err) = state.reservations.submit_reservation(body.into()).await {
        match &err {
            SubmitReservationError::Validation(_) => warn!("rejected reservation request: {err}"),
            _ => error!("failed to send reservation request: {err}"),
        }

        return Err(ApiError::from_submission(&err, state.config.environment));
    }

    Ok(Json(SubmitReservationResponse {
        success: true,
        message: SUBMITTED_MESSAGE.to_string(),
    }))
}
