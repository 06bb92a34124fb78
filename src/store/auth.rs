use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::command::{CommandFailure, CommandState};
use crate::api::auth::{LoginRequest, OtpRequest, ProfileUpdate, RegisterRequest, ResetPasswordRequest};
use crate::api::AuthApi;
use crate::error::ClientError;
use crate::models::Session;
use crate::session::{SessionError, SharedSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthOperation {
    Login,
    Register,
    ForgotPassword,
    VerifyOtp,
    ResetPassword,
    UpdateProfile,
    Logout,
}

impl AuthOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthOperation::Login => "login",
            AuthOperation::Register => "register",
            AuthOperation::ForgotPassword => "forgot-password",
            AuthOperation::VerifyOtp => "verify-otp",
            AuthOperation::ResetPassword => "reset-password",
            AuthOperation::UpdateProfile => "update-profile",
            AuthOperation::Logout => "logout",
        }
    }

    /// Flows that show a success banner clear it when they start
    fn clears_success(self) -> bool {
        matches!(
            self,
            AuthOperation::ForgotPassword | AuthOperation::VerifyOtp | AuthOperation::UpdateProfile
        )
    }
}

impl fmt::Display for AuthOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session and account flows.
///
/// `user_info` mirrors the persisted session: it is loaded from the
/// [`SessionProvider`](crate::session::SessionProvider) on construction and
/// written through on every command that yields a new token.
pub struct AuthContainer {
    api: Arc<dyn AuthApi>,
    store: SharedSession,
    user_info: Option<Session>,
    loading: bool,
    error: Option<String>,
    success: bool,
    message: Option<String>,
    commands: BTreeMap<AuthOperation, CommandState<()>>,
}

impl AuthContainer {
    pub fn new(api: Arc<dyn AuthApi>, store: SharedSession) -> Self {
        let user_info = store.get().filter(Session::has_token);
        Self {
            api,
            store,
            user_info,
            loading: false,
            error: None,
            success: false,
            message: None,
            commands: BTreeMap::new(),
        }
    }

    pub fn user_info(&self) -> Option<&Session> {
        self.user_info.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_info.as_ref().is_some_and(Session::has_token)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Last message the server sent back (forgot-password)
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn command(&self, op: AuthOperation) -> CommandState<()> {
        self.commands.get(&op).cloned().unwrap_or_default()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Session, CommandFailure> {
        self.begin(AuthOperation::Login);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.api.login(&request).await;
        self.adopt(AuthOperation::Login, result)
    }

    pub async fn register(
        &mut self,
        user_name: &str,
        email: &str,
        password: &str,
    ) -> Result<&Session, CommandFailure> {
        self.begin(AuthOperation::Register);
        let request = RegisterRequest {
            user_name: user_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.api.register(&request).await;
        self.adopt(AuthOperation::Register, result)
    }

    pub async fn request_password_reset(&mut self, email: &str) -> Result<String, CommandFailure> {
        self.begin(AuthOperation::ForgotPassword);
        match self.api.forgot_password(email).await {
            Ok(message) => {
                self.message = Some(message.clone());
                self.success = true;
                self.finish(AuthOperation::ForgotPassword);
                Ok(message)
            }
            Err(err) => Err(self.fail(AuthOperation::ForgotPassword, err)),
        }
    }

    pub async fn verify_otp(&mut self, email: &str, otp: &str) -> Result<(), CommandFailure> {
        self.begin(AuthOperation::VerifyOtp);
        let request = OtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        match self.api.verify_otp(&request).await {
            Ok(()) => {
                self.success = true;
                self.finish(AuthOperation::VerifyOtp);
                Ok(())
            }
            Err(err) => Err(self.fail(AuthOperation::VerifyOtp, err)),
        }
    }

    /// The server answers a successful reset with a fresh login
    pub async fn reset_password(
        &mut self,
        email: &str,
        otp: &str,
        password: &str,
    ) -> Result<&Session, CommandFailure> {
        self.begin(AuthOperation::ResetPassword);
        let request = ResetPasswordRequest {
            email: email.to_string(),
            otp: otp.to_string(),
            password: password.to_string(),
        };
        let result = self.api.reset_password(&request).await;
        self.adopt(AuthOperation::ResetPassword, result)
    }

    /// Update name and email. The stored token is kept; only the user part changes.
    pub async fn update_profile(&mut self, user_name: &str, email: &str) -> Result<&Session, CommandFailure> {
        self.begin(AuthOperation::UpdateProfile);
        let update = ProfileUpdate {
            user_name: user_name.to_string(),
            email: email.to_string(),
        };
        match self.api.update_details(&update).await {
            Ok(user) => {
                let token = self
                    .user_info
                    .as_ref()
                    .map(|s| s.token.clone())
                    .or_else(|| self.store.token())
                    .unwrap_or_default();
                let session = Session::new(token, Some(user));
                if let Err(err) = self.store.set(session.clone()) {
                    return Err(self.fail_storage(AuthOperation::UpdateProfile, err));
                }
                self.success = true;
                self.finish(AuthOperation::UpdateProfile);
                Ok(&*self.user_info.insert(session))
            }
            Err(err) => Err(self.fail(AuthOperation::UpdateProfile, err)),
        }
    }

    /// Forget the session locally. Nothing is sent to the server.
    pub fn logout(&mut self) -> Result<(), CommandFailure> {
        if let Err(err) = self.store.clear() {
            return Err(self.fail_storage(AuthOperation::Logout, err));
        }
        tracing::info!("Logged out");
        self.user_info = None;
        self.finish(AuthOperation::Logout);
        Ok(())
    }

    /// Clear status flags before a form is shown again
    pub fn reset_state(&mut self) {
        self.loading = false;
        self.error = None;
        self.success = false;
        self.message = None;
        self.commands.clear();
    }

    fn adopt(
        &mut self,
        op: AuthOperation,
        result: Result<Session, ClientError>,
    ) -> Result<&Session, CommandFailure> {
        match result {
            Ok(session) => {
                if let Err(err) = self.store.set(session.clone()) {
                    return Err(self.fail_storage(op, err));
                }
                tracing::info!("{} succeeded for {}", op, session.user_name().unwrap_or("unknown user"));
                self.finish(op);
                Ok(&*self.user_info.insert(session))
            }
            Err(err) => Err(self.fail(op, err)),
        }
    }

    fn begin(&mut self, op: AuthOperation) {
        self.loading = true;
        self.error = None;
        if op.clears_success() {
            self.success = false;
        }
        self.commands.insert(op, CommandState::Pending);
    }

    fn finish(&mut self, op: AuthOperation) {
        self.loading = false;
        self.commands.insert(op, CommandState::Succeeded(()));
    }

    fn fail(&mut self, op: AuthOperation, err: ClientError) -> CommandFailure {
        tracing::warn!("{} failed: {}", op, err);
        self.record_failure(op, CommandFailure::from(err))
    }

    fn fail_storage(&mut self, op: AuthOperation, err: SessionError) -> CommandFailure {
        tracing::error!("{} could not persist the session: {}", op, err);
        self.record_failure(op, CommandFailure::new(err.to_string()))
    }

    fn record_failure(&mut self, op: AuthOperation, failure: CommandFailure) -> CommandFailure {
        self.loading = false;
        self.error = Some(failure.reason().to_string());
        self.commands.insert(op, CommandState::Failed(failure.reason().to_string()));
        failure
    }
}
