use axum::extract::State;
use axum::Json;

use mindwell_core::collections;
use mindwell_core::models::contact::{ContactAck, ContactMessage};

use crate::extract::ApiJson;
use crate::state::AppState;

pub async fn send_contact(
    State(state): State<AppState>,
    ApiJson(message): ApiJson<ContactMessage>,
) -> Json<ContactAck> {
    state.persist(collections::CONTACT_MESSAGES, &message).await;
    Json(ContactAck { ok: true })
}
