use axum::http::StatusCode;
use chrono::Duration;
use rand::{distributions::Alphanumeric, Rng};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};
use galaxy_core::clock::Clock;
use galaxy_core::repository::{AdminCredential, SessionStore};
use galaxy_core::{AdminSession, CoreResult};

use crate::error::AppError;
use crate::request::ApiResponse;
use crate::state::AppState;

const SESSION_ID_LEN: usize = 32;

/// Outcome of looking up a session id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCheck {
    Active,
    /// Was present but past its expiry; it has been evicted.
    Expired,
    Unknown,
}

/// Issues and validates admin sessions.
pub struct AdminSessions {
    store: Arc<dyn SessionStore>,
    credential: Arc<dyn AdminCredential>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl AdminSessions {
    pub fn new(
        store: Arc<dyn SessionStore>,
        credential: Arc<dyn AdminCredential>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self { store, credential, clock, ttl }
    }

    /// Returns the new session, or `None` if the password is rejected.
    /// A rejected password never touches the store.
    pub async fn login(&self, password: &str) -> CoreResult<Option<AdminSession>> {
        if !self.credential.verify(password) {
            return Ok(None);
        }

        let session = AdminSession::new(generate_session_id(), self.clock.now() + self.ttl);
        self.store.set(session.clone()).await?;
        Ok(Some(session))
    }

    pub async fn verify(&self, session_id: &str) -> CoreResult<SessionCheck> {
        let Some(session) = self.store.get(session_id).await? else {
            return Ok(SessionCheck::Unknown);
        };

        if session.is_active_at(self.clock.now()) {
            return Ok(SessionCheck::Active);
        }

        self.store.delete(session_id).await?;
        Ok(SessionCheck::Expired)
    }
}

fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

/// POST .../api/admin/login
pub async fn login(state: &AppState, body: Value) -> Result<ApiResponse, AppError> {
    let password = body.get("password").and_then(Value::as_str).unwrap_or_default();

    match state.sessions.login(password).await? {
        Some(session) => {
            info!("Admin session issued");
            Ok(ApiResponse::new(
                StatusCode::OK,
                json!({
                    "success": true,
                    "sessionId": session.id,
                    "message": "Login successful",
                }),
            ))
        }
        None => {
            warn!("Rejected admin login attempt");
            Ok(ApiResponse::new(
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": "Invalid password" }),
            ))
        }
    }
}

/// POST .../api/admin/verify
pub async fn verify(state: &AppState, body: Value) -> Result<ApiResponse, AppError> {
    let check = match body.get("sessionId").and_then(Value::as_str) {
        Some(session_id) => state.sessions.verify(session_id).await?,
        None => SessionCheck::Unknown,
    };

    let response = match check {
        SessionCheck::Active => ApiResponse::new(StatusCode::OK, json!({ "valid": true })),
        SessionCheck::Expired | SessionCheck::Unknown => {
            ApiResponse::new(StatusCode::UNAUTHORIZED, json!({ "valid": false }))
        }
    };
    Ok(response)
}
