use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::session::FileSessionStore;
use crate::store::RootState;
use crate::views::{resolve, AuthState, Route};

/// State shared by every command of one invocation
pub struct Console {
    pub state: RootState,
    pub output_format: OutputFormat,
}

impl Console {
    /// Rehydrate the stored session and connect every container to the API
    pub fn open(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<Self> {
        let store = FileSessionStore::from_config(config)?;
        tracing::debug!("session file: {}", store.path().display());
        let state = RootState::from_config(config, Arc::new(store))?;
        Ok(Self::new(state, output_format))
    }

    pub fn new(state: RootState, output_format: OutputFormat) -> Self {
        Self { state, output_format }
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState::from_token(self.state.auth.is_authenticated())
    }

    /// Where `route` leads for the current session
    pub fn resolve(&self, route: Route) -> Route {
        resolve(route, self.auth_state())
    }

    /// Refuse to continue when `route` would bounce to the login page
    pub fn require(&self, route: Route) -> anyhow::Result<()> {
        match self.resolve(route.clone()) {
            Route::Login if route != Route::Login => {
                tracing::debug!("{} requires a session", route);
                anyhow::bail!("Not logged in. Run `jpadmin auth login <email>` first")
            }
            _ => Ok(()),
        }
    }
}
