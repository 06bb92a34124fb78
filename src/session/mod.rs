//! Where the session token lives between commands.
//!
//! Everything that needs the bearer token goes through [`SessionProvider`]
//! instead of reading storage directly, so tests can swap in
//! [`MemorySessionStore`] and the CLI uses [`FileSessionStore`].

mod file;
mod memory;

pub use file::{resolve_config_dir, FileSessionStore};
pub use memory::MemorySessionStore;

use std::sync::Arc;
use thiserror::Error;

use crate::models::Session;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("{0}")]
    Location(String),
}

pub trait SessionProvider: Send + Sync {
    /// Current session, if one is stored
    fn get(&self) -> Option<Session>;

    /// Replace the stored session
    fn set(&self, session: Session) -> Result<(), SessionError>;

    /// Forget the stored session
    fn clear(&self) -> Result<(), SessionError>;

    /// Bearer token of the current session, ignoring blank tokens
    fn token(&self) -> Option<String> {
        self.get().filter(Session::has_token).map(|s| s.token)
    }
}

pub type SharedSession = Arc<dyn SessionProvider>;
