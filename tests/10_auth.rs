mod common;

use anyhow::Result;
use common::{FakePortal, ADMIN_EMAIL, ADMIN_PASSWORD, OTP, TOKEN};
use jobportal_admin::session::SessionProvider;
use jobportal_admin::views::auth::{
    AuthViewError, ForgotPasswordView, ProfileView, RegisterView, ResetPasswordView, VerifyOtpView, PROFILE_UPDATED,
};
use jobportal_admin::views::Route;

#[tokio::test]
async fn login_persists_the_session() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let (mut state, store) = portal.anonymous();

    let session = state.auth.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    assert_eq!(session.token, TOKEN);
    assert_eq!(session.user_name(), Some("admin"));

    assert_eq!(store.get().map(|s| s.token), Some(TOKEN.to_string()));
    assert!(state.auth.is_authenticated());
    // Login only stores the session; the success flag is for password and profile flows
    assert!(!state.auth.success());
    Ok(())
}

#[tokio::test]
async fn bad_credentials_surface_the_server_message() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let (mut state, store) = portal.anonymous();

    let err = state.auth.login(ADMIN_EMAIL, "wrong").await.unwrap_err();
    assert_eq!(err.reason(), "Invalid credentials");
    assert_eq!(state.auth.error(), Some("Invalid credentials"));
    assert!(!state.auth.loading());
    assert!(store.get().is_none());
    Ok(())
}

#[tokio::test]
async fn register_mismatch_never_reaches_the_server() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let (mut state, _store) = portal.anonymous();

    let view = RegisterView {
        user_name: "editor".into(),
        email: "editor@portal.test".into(),
        password: "one".into(),
        confirm_password: "two".into(),
    };
    assert_eq!(view.submit(&mut state.auth).await, Err(AuthViewError::PasswordMismatch));
    assert_eq!(portal.state.lock().unwrap().users.len(), 1);

    let view = RegisterView {
        confirm_password: "one".into(),
        ..view
    };
    assert_eq!(view.submit(&mut state.auth).await, Ok(Route::Dashboard));
    assert!(state.auth.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn password_reset_walks_through_otp() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let (mut state, store) = portal.anonymous();

    let next = ForgotPasswordView {
        email: ADMIN_EMAIL.into(),
    }
    .submit(&mut state.auth)
    .await?;
    assert_eq!(state.auth.message(), Some(format!("OTP sent to {}", ADMIN_EMAIL).as_str()));
    let Route::VerifyOtp { email } = next else {
        panic!("expected the OTP page");
    };

    let mut verify = VerifyOtpView::from_route(email.as_deref()).unwrap();
    verify.otp = "000000".into();
    let err = verify.submit(&mut state.auth).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid or expired OTP");

    verify.otp = OTP.into();
    let Route::ResetPassword { email, otp } = verify.submit(&mut state.auth).await? else {
        panic!("expected the reset page");
    };

    let mut reset = ResetPasswordView::from_route(email.as_deref(), otp.as_deref()).unwrap();
    reset.password = "fresh".into();
    reset.confirm_password = "fresh".into();
    assert_eq!(reset.submit(&mut state.auth).await?, Route::Dashboard);
    assert!(store.get().is_some());

    state.auth.logout()?;
    assert!(state.auth.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.is_err());
    assert!(state.auth.login(ADMIN_EMAIL, "fresh").await.is_ok());
    Ok(())
}

#[tokio::test]
async fn unknown_email_cannot_request_an_otp() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let (mut state, _store) = portal.anonymous();

    let err = state.auth.request_password_reset("nobody@portal.test").await.unwrap_err();
    assert_eq!(err.reason(), "There is no user with that email");
    Ok(())
}

#[tokio::test]
async fn profile_update_keeps_the_token() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let (mut state, store) = portal.anonymous();
    state.auth.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;

    let mut view = ProfileView::default();
    view.sync(&state.auth);
    assert_eq!(view.user_name, "admin");

    view.user_name = "chief".into();
    view.submit(&mut state.auth).await?;
    assert_eq!(view.message(), Some(PROFILE_UPDATED));

    let stored = store.get().unwrap();
    assert_eq!(stored.token, TOKEN);
    assert_eq!(stored.user_name(), Some("chief"));
    Ok(())
}

#[tokio::test]
async fn logout_forgets_the_session() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let (mut state, store) = portal.anonymous();
    state.auth.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;

    state.auth.logout()?;
    assert!(!state.auth.is_authenticated());
    assert!(store.get().is_none());
    Ok(())
}
