use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::client::{ApiClient, Auth};
use crate::error::ClientError;
use crate::models::{Session, User};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub user_name: String,
    pub email: String,
}

/// Account endpoints under `auth/`
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError>;

    async fn register(&self, request: &RegisterRequest) -> Result<Session, ClientError>;

    /// Sends the OTP mail; returns the server's message
    async fn forgot_password(&self, email: &str) -> Result<String, ClientError>;

    async fn verify_otp(&self, request: &OtpRequest) -> Result<(), ClientError>;

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Session, ClientError>;

    async fn update_details(&self, update: &ProfileUpdate) -> Result<User, ClientError>;
}

pub struct RestAuth {
    client: ApiClient,
}

impl RestAuth {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

/// Login-style responses are `{success, token, data}` without an outer envelope
fn session_from(body: Value) -> Result<Session, ClientError> {
    let session: Session = serde_json::from_value(body)?;
    if !session.has_token() {
        return Err(ClientError::decode("Invalid response from server: no token"));
    }
    Ok(session)
}

#[async_trait]
impl AuthApi for RestAuth {
    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        let body = self
            .client
            .send(Method::POST, "auth/login", Auth::Anonymous, Some(request))
            .await?;
        session_from(body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Session, ClientError> {
        let body = self
            .client
            .send(Method::POST, "auth/register", Auth::Anonymous, Some(request))
            .await?;
        session_from(body)
    }

    async fn forgot_password(&self, email: &str) -> Result<String, ClientError> {
        #[derive(Serialize)]
        struct ForgotPassword<'a> {
            email: &'a str,
        }

        let envelope = self
            .client
            .send_for_message(Method::POST, "auth/forgotpassword", Auth::Anonymous, &ForgotPassword { email })
            .await?;
        Ok(envelope.message_or("OTP sent"))
    }

    async fn verify_otp(&self, request: &OtpRequest) -> Result<(), ClientError> {
        self.client
            .send(Method::POST, "auth/verifyotp", Auth::Anonymous, Some(request))
            .await?;
        Ok(())
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Session, ClientError> {
        let body = self
            .client
            .send(Method::PUT, "auth/resetpassword", Auth::Anonymous, Some(request))
            .await?;
        session_from(body)
    }

    async fn update_details(&self, update: &ProfileUpdate) -> Result<User, ClientError> {
        self.client
            .put::<_, User>("auth/updatedetails", Auth::Required, update)
            .await?
            .into_data()
    }
}
