use std::sync::RwLock;

use super::{SessionError, SessionProvider};
use crate::models::Session;

/// Process-local session, nothing survives a restart
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }
}

impl SessionProvider for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, session: Session) -> Result<(), SessionError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| SessionError::Location("session lock poisoned".to_string()))?;
        *guard = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| SessionError::Location("session lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}
