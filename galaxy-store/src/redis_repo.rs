use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use std::sync::Arc;
use tracing::{debug, info};
use galaxy_core::clock::Clock;
use galaxy_core::repository::SessionStore;
use galaxy_core::{AdminSession, CoreError, CoreResult};

/// Session store shared by every process pointed at the same Redis.
///
/// Each session is a single key holding its expiry in epoch milliseconds,
/// written with a matching TTL so Redis drops it on its own once it lapses.
///
/// TTLs are measured against the same clock that stamps `expires_at`.
#[derive(Clone)]
pub struct RedisSessionStore {
    client: redis::Client,
    clock: Arc<dyn Clock>,
}

impl RedisSessionStore {
    pub async fn new(connection_string: &str, clock: Arc<dyn Clock>) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        info!("Redis session store configured");
        Ok(Self { client, clock })
    }

    fn key(id: &str) -> String {
        format!("admin_session:{}", id)
    }

    async fn connection(&self) -> CoreResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(CoreError::session)
    }
}

/// Rebuilds a session from its stored expiry. The value is returned even
/// when already past, so the caller can tell expired from unknown.
fn decode_session(id: &str, expires_ms: Option<i64>) -> Option<AdminSession> {
    expires_ms
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|expires_at| AdminSession::new(id, expires_at))
}

/// Seconds until `expires_at`, rounded up and never below one.
fn ttl_seconds(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (expires_at - now).num_milliseconds().max(0) as u64;
    millis.div_ceil(1000).max(1)
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, id: &str) -> CoreResult<Option<AdminSession>> {
        let mut conn = self.connection().await?;
        let expires_ms: Option<i64> = conn
            .get(Self::key(id))
            .await
            .map_err(CoreError::session)?;

        Ok(decode_session(id, expires_ms))
    }

    async fn set(&self, session: AdminSession) -> CoreResult<()> {
        let mut conn = self.connection().await?;
        let ttl = ttl_seconds(session.expires_at, self.clock.now());
        conn.set_ex::<_, _, ()>(
            Self::key(&session.id),
            session.expires_at.timestamp_millis(),
            ttl,
        )
        .await
        .map_err(CoreError::session)?;
        debug!("Session stored with ttl {}s", ttl);
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(Self::key(id))
            .await
            .map_err(CoreError::session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_ttl_rounds_up() {
        let now = Utc::now();
        assert_eq!(ttl_seconds(now + Duration::hours(8), now), 28_800);
        assert_eq!(ttl_seconds(now + Duration::milliseconds(1500), now), 2);
    }

    #[test]
    fn test_ttl_never_zero() {
        let now = Utc::now();
        assert_eq!(ttl_seconds(now - Duration::seconds(5), now), 1);
    }

    #[test]
    fn test_decode_keeps_expired_sessions() {
        let now = Utc::now();
        let expired = now - Duration::seconds(1);

        let session = decode_session("abc", Some(expired.timestamp_millis())).unwrap();
        assert_eq!(session.id, "abc");
        assert_eq!(session.expires_at.timestamp_millis(), expired.timestamp_millis());
        assert!(!session.is_active_at(now));
    }

    #[test]
    fn test_decode_missing_value() {
        assert!(decode_session("abc", None).is_none());
    }

    #[test]
    fn test_key_prefix() {
        assert_eq!(RedisSessionStore::key("abc"), "admin_session:abc");
    }
}
