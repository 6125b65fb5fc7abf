use axum::http::StatusCode;
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::request::{ApiRequest, ApiResponse};
use crate::routes::Route;
use crate::state::AppState;
use crate::{admin, bookings, contacts};

/// Handles one request. Never fails: every error becomes a response.
pub async fn handle(state: &AppState, req: ApiRequest) -> ApiResponse {
    let route = state.routes.resolve(&req.method, &req.path);
    debug!("{} {} -> {:?}", req.method, req.path, route);

    if route == Route::Preflight {
        return ApiResponse::empty(StatusCode::OK);
    }

    match dispatch(state, route, &req).await {
        Ok(response) => response,
        Err(err) => err.into(),
    }
}

async fn dispatch(state: &AppState, route: Route, req: &ApiRequest) -> Result<ApiResponse, AppError> {
    let body = req.json_body()?;

    match route {
        Route::CreateBooking => bookings::create_booking(state, body).await,
        Route::ListBookings => bookings::list_bookings(state).await,
        Route::UpdateBookingStatus(id) => bookings::update_booking_status(state, id, body).await,
        Route::CreateContact => contacts::create_contact(state, body).await,
        Route::ListContacts => contacts::list_contacts(state).await,
        Route::AdminLogin => admin::login(state, body).await,
        Route::AdminVerify => admin::verify(state, body).await,
        Route::Preflight => Ok(ApiResponse::empty(StatusCode::OK)),
        Route::NotFound => Ok(ApiResponse::new(
            StatusCode::NOT_FOUND,
            json!({ "message": "Not found" }),
        )),
    }
}
