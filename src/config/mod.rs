use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the job portal API
    pub base_url: String,
    /// Version prefix every resource path lives under
    pub prefix: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// File stem of the persisted login response
    pub storage_key: String,
    /// Directory holding the session file; falls back to ~/.config/jobportal/admin
    pub config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub default_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("JPADMIN_API_URL") {
            self.api.base_url = v.trim_end_matches('/').to_string();
        }
        if let Ok(v) = env::var("JPADMIN_API_PREFIX") {
            self.api.prefix = normalize_prefix(&v);
        }
        if let Ok(v) = env::var("JPADMIN_USER_AGENT") {
            self.api.user_agent = v;
        }

        if let Ok(v) = env::var("JPADMIN_SESSION_KEY") {
            if !v.trim().is_empty() {
                self.session.storage_key = v.trim().to_string();
            }
        }
        if let Ok(v) = env::var("JPADMIN_CONFIG_DIR") {
            self.session.config_dir = Some(PathBuf::from(v));
        }

        if let Ok(v) = env::var("JPADMIN_LOG") {
            self.logging.default_filter = v;
        }

        self
    }

    /// Full URL of the API root, prefix included, always ending in `/`
    pub fn api_root(&self) -> String {
        format!("{}{}/", self.api.base_url.trim_end_matches('/'), self.api.prefix)
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                base_url: "http://localhost:5000".to_string(),
                prefix: "/api/v1".to_string(),
                user_agent: default_user_agent(),
            },
            session: SessionConfig {
                storage_key: "userInfo".to_string(),
                config_dir: None,
            },
            logging: LoggingConfig {
                default_filter: "jobportal_admin=debug,warn".to_string(),
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            api: ApiConfig {
                base_url: "https://staging-api.jobportal.example.com".to_string(),
                prefix: "/api/v1".to_string(),
                user_agent: default_user_agent(),
            },
            session: SessionConfig {
                storage_key: "userInfo".to_string(),
                config_dir: None,
            },
            logging: LoggingConfig {
                default_filter: "jobportal_admin=info,warn".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig {
                base_url: "https://api.jobportal.example.com".to_string(),
                prefix: "/api/v1".to_string(),
                user_agent: default_user_agent(),
            },
            session: SessionConfig {
                storage_key: "userInfo".to_string(),
                config_dir: None,
            },
            logging: LoggingConfig {
                default_filter: "warn".to_string(),
            },
        }
    }
}

fn default_user_agent() -> String {
    format!("jpadmin/{}", env!("CARGO_PKG_VERSION"))
}

/// "api/v2/" and "/api/v2" both become "/api/v2"; an empty prefix stays empty.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
