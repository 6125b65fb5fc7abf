use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use galaxy_core::{BookingStatus, NewBooking};

use crate::error::AppError;
use crate::request::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct StatusUpdate {
    status: String,
}

/// POST .../api/bookings
///
/// Whatever status the caller sends is discarded; new bookings start pending.
pub async fn create_booking(state: &AppState, body: Value) -> Result<ApiResponse, AppError> {
    let req: NewBooking = serde_json::from_value(body)?;
    let booking = state
        .bookings
        .create_booking(&req, BookingStatus::Pending.as_str())
        .await?;

    Ok(ApiResponse::serialize(StatusCode::OK, &booking)?)
}

/// GET .../api/bookings
pub async fn list_bookings(state: &AppState) -> Result<ApiResponse, AppError> {
    let bookings = state.bookings.list_bookings().await?;
    Ok(ApiResponse::serialize(StatusCode::OK, &bookings)?)
}

/// PATCH .../api/bookings/{id}/status
pub async fn update_booking_status(
    state: &AppState,
    id: Option<i32>,
    body: Value,
) -> Result<ApiResponse, AppError> {
    let update: StatusUpdate = serde_json::from_value(body)?;

    // A non-numeric id cannot match any row.
    let Some(id) = id else {
        return Err(AppError::NotFound("Booking not found".to_string()));
    };

    match state.bookings.update_booking_status(id, &update.status).await? {
        Some(booking) => {
            info!("Booking {} moved to {}", booking.id, BookingStatus::from(booking.status.as_str()));
            Ok(ApiResponse::serialize(StatusCode::OK, &booking)?)
        }
        None => Err(AppError::NotFound("Booking not found".to_string())),
    }
}
