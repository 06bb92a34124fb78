use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::{SessionError, SessionProvider};
use crate::config::AppConfig;
use crate::models::Session;

/// Directory holding the persisted session.
/// `session.config_dir` wins, then `$HOME/.config/jobportal/admin`.
pub fn resolve_config_dir(config: &AppConfig) -> Result<PathBuf, SessionError> {
    let config_dir = if let Some(custom_dir) = &config.session.config_dir {
        custom_dir.clone()
    } else {
        let home = std::env::var("HOME")
            .map_err(|_| SessionError::Location("HOME environment variable not set".to_string()))?;
        PathBuf::from(home).join(".config").join("jobportal").join("admin")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// Session persisted as `<dir>/<key>.json`.
///
/// The file is read once when the store is opened; afterwards reads are served
/// from memory and every `set`/`clear` writes through.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    cached: RwLock<Option<Session>>,
}

impl FileSessionStore {
    pub fn open(dir: &Path, key: &str) -> Result<Self, SessionError> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let path = dir.join(format!("{}.json", key));
        let cached = Self::load(&path);
        Ok(Self {
            path,
            cached: RwLock::new(cached),
        })
    }

    /// Open the store configured for this process
    pub fn from_config(config: &AppConfig) -> Result<Self, SessionError> {
        let dir = resolve_config_dir(config)?;
        Self::open(&dir, &config.session.storage_key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // An unreadable or corrupt file counts as "logged out" rather than an error
    fn load(path: &Path) -> Option<Session> {
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("could not read session file {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<Session>(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("ignoring corrupt session file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Truncate or create the session file, readable by the owner only
    fn create_private(path: &Path) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            let file = options.open(path)?;
            // mode only applies to new files
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
            Ok(file)
        }
        #[cfg(not(unix))]
        {
            options.open(path)
        }
    }

    fn lock_err() -> SessionError {
        SessionError::Location("session lock poisoned".to_string())
    }
}

impl SessionProvider for FileSessionStore {
    fn get(&self) -> Option<Session> {
        self.cached.read().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, session: Session) -> Result<(), SessionError> {
        let content = serde_json::to_string_pretty(&session)?;
        let mut file = Self::create_private(&self.path)?;
        file.write_all(content.as_bytes())?;

        let mut guard = self.cached.write().map_err(|_| Self::lock_err())?;
        *guard = Some(session);
        tracing::debug!("session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        let mut guard = self.cached.write().map_err(|_| Self::lock_err())?;
        *guard = None;
        tracing::debug!("session cleared");
        Ok(())
    }
}
