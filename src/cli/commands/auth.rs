use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_record, output_success, value_or_prompt};
use crate::cli::Console;
use crate::views::auth::{
    ForgotPasswordView, LoginView, ProfileView, RegisterView, ResetPasswordView, VerifyOtpView,
};
use crate::views::Route;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login with email and password")]
    Login {
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Register a new admin account")]
    Register {
        #[arg(help = "Username")]
        user_name: String,
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
        #[arg(long, help = "Password confirmation (will prompt if not provided)")]
        confirm: Option<String>,
    },

    #[command(about = "Request a password reset OTP by email")]
    ForgotPassword {
        #[arg(help = "Email")]
        email: String,
    },

    #[command(about = "Check a password reset OTP")]
    VerifyOtp {
        #[arg(help = "Email the OTP was sent to")]
        email: String,
        #[arg(help = "One-time password")]
        otp: String,
    },

    #[command(about = "Set a new password with a verified OTP")]
    ResetPassword {
        #[arg(help = "Email the OTP was sent to")]
        email: String,
        #[arg(help = "One-time password")]
        otp: String,
        #[arg(long, help = "New password (will prompt if not provided)")]
        password: Option<String>,
        #[arg(long, help = "Password confirmation (will prompt if not provided)")]
        confirm: Option<String>,
    },

    #[command(about = "Forget the stored session")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,

    #[command(about = "Show current user information")]
    Whoami,

    #[command(about = "Show or update the profile of the logged-in user")]
    Profile {
        #[arg(long, help = "New username")]
        user_name: Option<String>,
        #[arg(long, help = "New email")]
        email: Option<String>,
    },
}

pub async fn handle(cmd: AuthCommands, console: &mut Console) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password } => {
            if !entering(console, Route::Login)? {
                return Ok(());
            }
            let view = LoginView {
                email,
                password: value_or_prompt(password, "Password")?,
            };
            let next = view.submit(&mut console.state.auth).await?;
            signed_in(console, "Logged in", &next)
        }
        AuthCommands::Register {
            user_name,
            email,
            password,
            confirm,
        } => {
            if !entering(console, Route::Register)? {
                return Ok(());
            }
            let password = value_or_prompt(password, "Password")?;
            let view = RegisterView {
                user_name,
                email,
                confirm_password: value_or_prompt(confirm, "Confirm password")?,
                password,
            };
            let next = view.submit(&mut console.state.auth).await?;
            signed_in(console, "Registered", &next)
        }
        AuthCommands::ForgotPassword { email } => {
            if !entering(console, Route::ForgotPassword)? {
                return Ok(());
            }
            let view = ForgotPasswordView { email };
            let next = view.submit(&mut console.state.auth).await?;
            let message = console.state.auth.message().unwrap_or("OTP sent").to_string();
            output_success(&console.output_format, &message, Some(json!({ "next": next.path() })))
        }
        AuthCommands::VerifyOtp { email, otp } => {
            if !entering(console, Route::VerifyOtp { email: None })? {
                return Ok(());
            }
            let mut view = VerifyOtpView::from_route(Some(&email)).map_err(redirected)?;
            view.otp = otp;
            let next = view.submit(&mut console.state.auth).await?;
            output_success(&console.output_format, "OTP verified", Some(json!({ "next": next.path() })))
        }
        AuthCommands::ResetPassword {
            email,
            otp,
            password,
            confirm,
        } => {
            if !entering(console, Route::ResetPassword { email: None, otp: None })? {
                return Ok(());
            }
            let mut view = ResetPasswordView::from_route(Some(&email), Some(&otp)).map_err(redirected)?;
            view.password = value_or_prompt(password, "New password")?;
            view.confirm_password = value_or_prompt(confirm, "Confirm password")?;
            let next = view.submit(&mut console.state.auth).await?;
            signed_in(console, "Password reset", &next)
        }
        AuthCommands::Logout => {
            console.state.auth.logout()?;
            output_success(&console.output_format, "Logged out", None)
        }
        AuthCommands::Status => {
            let auth = &console.state.auth;
            let user = auth.user_info().and_then(|s| s.user_name()).unwrap_or("-");
            let message = if auth.is_authenticated() {
                format!("Logged in as {}", user)
            } else {
                "Not logged in".to_string()
            };
            output_success(
                &console.output_format,
                &message,
                Some(json!({ "authenticated": auth.is_authenticated() })),
            )
        }
        AuthCommands::Whoami => {
            console.require(Route::Profile)?;
            match console.state.auth.user_info().and_then(|s| s.data.as_ref()) {
                Some(user) => output_record(&console.output_format, "user", user),
                None => anyhow::bail!("The stored session carries no user details"),
            }
        }
        AuthCommands::Profile { user_name, email } => {
            console.require(Route::Profile)?;
            let mut view = ProfileView::default();
            view.sync(&console.state.auth);
            if user_name.is_none() && email.is_none() {
                return output_record(
                    &console.output_format,
                    "profile",
                    &json!({ "userName": view.user_name, "email": view.email }),
                );
            }
            if let Some(user_name) = user_name {
                view.user_name = user_name;
            }
            if let Some(email) = email {
                view.email = email;
            }
            view.submit(&mut console.state.auth).await?;
            let message = view.message().unwrap_or("Profile updated").to_string();
            output_success(
                &console.output_format,
                &message,
                Some(json!({ "userName": view.user_name, "email": view.email })),
            )
        }
    }
}

/// Public pages bounce a logged-in user to the dashboard; report that instead of acting
fn entering(console: &Console, route: Route) -> anyhow::Result<bool> {
    match console.resolve(route) {
        Route::Dashboard => {
            let user = console.state.auth.user_info().and_then(|s| s.user_name()).unwrap_or("-");
            output_success(
                &console.output_format,
                &format!("Already logged in as {}", user),
                Some(json!({ "next": Route::Dashboard.path() })),
            )?;
            Ok(false)
        }
        _ => Ok(true),
    }
}

fn signed_in(console: &Console, action: &str, next: &Route) -> anyhow::Result<()> {
    let user = console.state.auth.user_info().and_then(|s| s.data.clone());
    let name = user.as_ref().map(|u| u.user_name.as_str()).unwrap_or("-");
    output_success(
        &console.output_format,
        &format!("{} as {}", action, name),
        Some(json!({ "user": user, "next": next.path() })),
    )
}

fn redirected(route: Route) -> anyhow::Error {
    anyhow::anyhow!("Missing email or OTP; start again from {}", route)
}
