use axum::http::StatusCode;
use serde_json::json;

use crate::request::ApiResponse;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Internal(anyhow::Error),
}

impl From<AppError> for ApiResponse {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(message) => {
                ApiResponse::new(StatusCode::NOT_FOUND, json!({ "message": message }))
            }
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {:#}", err);
                ApiResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "message": "Internal server error",
                        "error": err.to_string(),
                    }),
                )
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
