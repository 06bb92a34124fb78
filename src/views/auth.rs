//! Login, registration, password reset and profile pages.
//!
//! Each view validates locally, dispatches one command on the
//! [`AuthContainer`] and answers with the route to show next.

use thiserror::Error;

use super::fields::{require, FieldError};
use super::guard::Route;
use crate::store::{AuthContainer, CommandFailure};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const PROFILE_UPDATED: &str = "Profile Updated Successfully!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthViewError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("{0}")]
    Invalid(#[from] FieldError),

    #[error("{0}")]
    Failed(#[from] CommandFailure),
}

#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub email: String,
    pub password: String,
}

impl LoginView {
    pub async fn submit(&self, auth: &mut AuthContainer) -> Result<Route, AuthViewError> {
        require("Email", &self.email)?;
        require("Password", &self.password)?;
        auth.login(self.email.trim(), &self.password).await?;
        Ok(Route::Dashboard)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterView {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterView {
    pub async fn submit(&self, auth: &mut AuthContainer) -> Result<Route, AuthViewError> {
        if self.password != self.confirm_password {
            return Err(AuthViewError::PasswordMismatch);
        }
        require("Username", &self.user_name)?;
        require("Email", &self.email)?;
        auth.register(self.user_name.trim(), self.email.trim(), &self.password)
            .await?;
        Ok(Route::Dashboard)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordView {
    pub email: String,
}

impl ForgotPasswordView {
    /// On success the server has mailed an OTP; continue to its entry page
    pub async fn submit(&self, auth: &mut AuthContainer) -> Result<Route, AuthViewError> {
        require("Email", &self.email)?;
        let email = self.email.trim();
        auth.request_password_reset(email).await?;
        Ok(Route::VerifyOtp {
            email: Some(email.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct VerifyOtpView {
    email: String,
    pub otp: String,
}

impl VerifyOtpView {
    /// Without an email there is nothing to verify against; back to login
    pub fn from_route(email: Option<&str>) -> Result<Self, Route> {
        match email.filter(|e| !e.trim().is_empty()) {
            Some(email) => Ok(Self {
                email: email.to_string(),
                otp: String::new(),
            }),
            None => Err(Route::Login),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub async fn submit(&self, auth: &mut AuthContainer) -> Result<Route, AuthViewError> {
        require("OTP", &self.otp)?;
        let otp = self.otp.trim();
        auth.verify_otp(&self.email, otp).await?;
        Ok(Route::ResetPassword {
            email: Some(self.email.clone()),
            otp: Some(otp.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ResetPasswordView {
    email: String,
    otp: String,
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordView {
    /// Both `email` and `otp` come from the verify step; without them there is no form
    pub fn from_route(email: Option<&str>, otp: Option<&str>) -> Result<Self, Route> {
        let present = |v: Option<&str>| v.filter(|v| !v.trim().is_empty()).map(str::to_string);
        match (present(email), present(otp)) {
            (Some(email), Some(otp)) => Ok(Self {
                email,
                otp,
                password: String::new(),
                confirm_password: String::new(),
            }),
            _ => Err(Route::Login),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub async fn submit(&self, auth: &mut AuthContainer) -> Result<Route, AuthViewError> {
        if self.password != self.confirm_password {
            return Err(AuthViewError::PasswordMismatch);
        }
        require("Password", &self.password)?;
        auth.reset_password(&self.email, &self.otp, &self.password).await?;
        Ok(Route::Dashboard)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileView {
    pub user_name: String,
    pub email: String,
    synced: bool,
    message: Option<String>,
}

impl ProfileView {
    /// Copy name and email from the session the first time one is available
    pub fn sync(&mut self, auth: &AuthContainer) {
        if self.synced {
            return;
        }
        if let Some(user) = auth.user_info().and_then(|s| s.data.as_ref()) {
            self.user_name = user.user_name.clone();
            self.email = user.email.clone();
            self.synced = true;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub async fn submit(&mut self, auth: &mut AuthContainer) -> Result<(), AuthViewError> {
        self.message = None;
        require("Username", &self.user_name)?;
        require("Email", &self.email)?;
        auth.update_profile(self.user_name.trim(), self.email.trim()).await?;
        if auth.success() {
            self.message = Some(PROFILE_UPDATED.to_string());
        }
        Ok(())
    }
}
