use percent_encoding::percent_decode_str;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::envelope::{Envelope, MessageEnvelope};
use crate::config::AppConfig;
use crate::error::ClientError;
use crate::session::SharedSession;

/// Whether a request carries the bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Fail with `NoSession` when no token is stored
    Required,
    /// Attach the token when there is one
    Optional,
    /// Never attach a token (login, register, password reset)
    Anonymous,
}

/// Thin wrapper over `reqwest::Client` rooted at the API prefix.
///
/// No timeouts and no retries: a failed request ends the command and the
/// user starts over.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    root: Url,
    session: SharedSession,
}

impl ApiClient {
    /// `root` is the API base including the version prefix, e.g. `http://host/api/v1`
    pub fn new(root: &str, session: SharedSession) -> Result<Self, ClientError> {
        Self::with_user_agent(root, session, concat!("jpadmin/", env!("CARGO_PKG_VERSION")))
    }

    pub fn with_user_agent(
        root: &str,
        session: SharedSession,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        // Url::join drops the last segment unless the base ends in '/'
        let root = if root.ends_with('/') {
            Url::parse(root)?
        } else {
            Url::parse(&format!("{}/", root))?
        };

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ClientError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, root, session })
    }

    pub fn from_config(config: &AppConfig, session: SharedSession) -> Result<Self, ClientError> {
        Self::with_user_agent(&config.api_root(), session, &config.api.user_agent)
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Resolve `path` under the API root. Dot segments are refused since
    /// joining would resolve them out of the collection.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        let path = path.trim_start_matches('/');
        let dotted = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .any(|segment| matches!(percent_decode_str(segment).decode_utf8_lossy().as_ref(), "." | ".."));
        if dotted {
            return Err(ClientError::invalid_input(format!("Invalid record path: {}", path)));
        }
        Ok(self.root.join(path)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<Envelope<T>, ClientError> {
        let body = self.send::<()>(Method::GET, path, auth, None).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth,
        payload: &B,
    ) -> Result<Envelope<T>, ClientError> {
        let body = self.send(Method::POST, path, auth, Some(payload)).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth,
        payload: &B,
    ) -> Result<Envelope<T>, ClientError> {
        let body = self.send(Method::PUT, path, auth, Some(payload)).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// POST/PUT whose answer is a `{message}` envelope
    pub async fn send_for_message<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        auth: Auth,
        payload: &B,
    ) -> Result<MessageEnvelope, ClientError> {
        let body = self.send(method, path, auth, Some(payload)).await?;
        if body.is_null() {
            return Ok(MessageEnvelope::default());
        }
        Ok(serde_json::from_value(body)?)
    }

    /// DELETE; the response body is returned raw and usually ignored
    pub async fn delete(&self, path: &str, auth: Auth) -> Result<Value, ClientError> {
        self.send::<()>(Method::DELETE, path, auth, None).await
    }

    /// Send a request and return the decoded JSON body of a 2xx response.
    /// Empty bodies come back as `Value::Null`.
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        auth: Auth,
        payload: Option<&B>,
    ) -> Result<Value, ClientError> {
        let url = self.url(path)?;
        let mut request = self.http.request(method.clone(), url.clone());

        match auth {
            Auth::Required => {
                let token = self.session.token().ok_or(ClientError::NoSession)?;
                request = request.header(AUTHORIZATION, format!("Bearer {}", token));
            }
            Auth::Optional => {
                if let Some(token) = self.session.token() {
                    request = request.header(AUTHORIZATION, format!("Bearer {}", token));
                }
            }
            Auth::Anonymous => {}
        }

        if let Some(payload) = payload {
            request = request.json(payload);
        }

        tracing::debug!("{} {}", method, url);
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<Value>(&text).ok()
        };

        if !status.is_success() {
            let err = ClientError::from_status(status.as_u16(), body.as_ref());
            tracing::warn!("{} {} failed: {} ({})", method, url, err, status);
            return Err(err);
        }

        match body {
            Some(value) => Ok(value),
            None if text.trim().is_empty() => Ok(Value::Null),
            None => Err(ClientError::decode("Invalid response from server: body is not JSON")),
        }
    }
}
