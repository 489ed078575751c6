//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::api::*};

/// OpenAPI document for the `/api` routes
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Omakase Reservations"),
    paths(contact::handler, uptime::handler),
    components(schemas(
        contact::SubmitReservationBody,
        contact::SubmitReservationResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
