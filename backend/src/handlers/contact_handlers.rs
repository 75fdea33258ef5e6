use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;

use crate::error::ApiError;
use crate::handlers::contact_dtos::{ContactPayload, ContactResponse};
use crate::AppState;

/// `POST /api/contacto`
///
/// Bodies that cannot be decoded are answered exactly like a payload with
/// missing fields. Nothing reaches the lead sink unless all three fields are
/// present.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Undecodable contact body: {}", rejection.body_text());
        ApiError::MissingFields
    })?;

    let lead = payload.into_lead()?;
    state.lead_sink.record(&lead);

    Ok(Json(ContactResponse { success: true }))
}
