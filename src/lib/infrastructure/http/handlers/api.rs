use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::reservations::ReservationService,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod contact;
pub mod docs;
pub mod uptime;

/// Routes served under `/api`
pub fn router<R: ReservationService>() -> Router<AppState<R>> {
    Router::new()
        .route("/contact", post(contact::handler))
        .route("/docs", get(docs::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
}
