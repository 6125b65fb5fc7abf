use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{Method, Uri},
    Router,
};
use std::collections::HashMap;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod bookings;
pub mod contacts;
pub mod error;
pub mod request;
pub mod router;
pub mod routes;
pub mod state;

pub use request::{ApiRequest, ApiResponse};
pub use state::AppState;

/// Every path goes through the request router, so there are no axum routes
/// beyond the fallback.
pub fn app(state: AppState) -> Router {
    Router::new()
        .fallback(serve_request)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve_request(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> ApiResponse {
    let query = Query::<HashMap<String, String>>::try_from_uri(&uri)
        .map(|Query(query)| query)
        .unwrap_or_default();

    let req = ApiRequest {
        method,
        path: uri.path().to_string(),
        body,
        query,
    };

    router::handle(&state, req).await
}
