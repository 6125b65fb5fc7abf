use async_trait::async_trait;
use dashmap::DashMap;
use galaxy_core::repository::SessionStore;
use galaxy_core::{AdminSession, CoreResult};

/// Process-local session table. Sessions do not survive a restart and are
/// not shared between processes.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, AdminSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &str) -> CoreResult<Option<AdminSession>> {
        Ok(self.sessions.get(id).map(|entry| entry.value().clone()))
    }

    async fn set(&self, session: AdminSession) -> CoreResult<()> {
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        self.sessions.remove(id);
        Ok(())
    }
}
