use axum::http::StatusCode;
use serde_json::Value;
use galaxy_core::NewContact;

use crate::error::AppError;
use crate::request::ApiResponse;
use crate::state::AppState;

/// POST .../api/contacts
pub async fn create_contact(state: &AppState, body: Value) -> Result<ApiResponse, AppError> {
    let req: NewContact = serde_json::from_value(body)?;
    let contact = state.contacts.create_contact(&req).await?;
    Ok(ApiResponse::serialize(StatusCode::OK, &contact)?)
}

/// GET .../api/contacts
pub async fn list_contacts(state: &AppState) -> Result<ApiResponse, AppError> {
    let contacts = state.contacts.list_contacts().await?;
    Ok(ApiResponse::serialize(StatusCode::OK, &contacts)?)
}
