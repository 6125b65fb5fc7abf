use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An admin session handed out after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub id: String,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new(id: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            expires_at,
        }
    }

    /// Valid strictly before the expiry instant.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_session_expiry_boundary() {
        let expires_at = Utc::now();
        let session = AdminSession::new("abc", expires_at);

        assert!(session.is_active_at(expires_at - Duration::milliseconds(1)));
        assert!(!session.is_active_at(expires_at));
        assert!(!session.is_active_at(expires_at + Duration::milliseconds(1)));
    }
}
