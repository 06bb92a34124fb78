//! Console routes and the rule deciding which of them a visitor may see.

use std::fmt;
use url::Url;

use crate::types::ResourceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    VerifyOtp { email: Option<String> },
    ResetPassword { email: Option<String>, otp: Option<String> },
    Profile,
    Dashboard,
    List(ResourceKind),
    Create(ResourceKind),
    Edit(ResourceKind, String),
    Notifications,
    NotFound(String),
}

impl Route {
    /// Parse a console path such as `/admin/company/c1/edit` or
    /// `/reset-password?email=a@x.io&otp=123456`
    pub fn parse(path: &str) -> Route {
        let Ok(url) = Url::parse("console:/").and_then(|base| base.join(path.trim())) else {
            return Route::NotFound(path.to_string());
        };
        let query = |key: &str| {
            url.query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty())
        };
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] | ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["verify-otp"] => Route::VerifyOtp { email: query("email") },
            ["reset-password"] => Route::ResetPassword {
                email: query("email"),
                otp: query("otp"),
            },
            ["profile"] => Route::Profile,
            ["dashboard"] => Route::Dashboard,
            ["admin", "notifications"] => Route::Notifications,
            ["admin", segment] => match ResourceKind::from_list_segment(segment) {
                Some(kind) => Route::List(kind),
                None => Route::NotFound(path.to_string()),
            },
            ["admin", segment, "create"] => match ResourceKind::from_entity_segment(segment) {
                Some(kind) => Route::Create(kind),
                None => Route::NotFound(path.to_string()),
            },
            ["admin", segment, id, "edit"] => match ResourceKind::from_entity_segment(segment) {
                Some(kind) => Route::Edit(kind, id.to_string()),
                None => Route::NotFound(path.to_string()),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::VerifyOtp { email } => with_query("/verify-otp", &[("email", email.as_deref())]),
            Route::ResetPassword { email, otp } => with_query(
                "/reset-password",
                &[("email", email.as_deref()), ("otp", otp.as_deref())],
            ),
            Route::Profile => "/profile".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::List(kind) => format!("/admin/{}", kind.list_segment()),
            Route::Create(kind) => format!("/admin/{}/create", kind.entity_segment()),
            Route::Edit(kind, id) => format!("/admin/{}/{}/edit", kind.entity_segment(), id),
            Route::Notifications => "/admin/notifications".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Pages reachable without a session; a logged-in visitor is sent to the dashboard
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login | Route::Register | Route::ForgotPassword | Route::VerifyOtp { .. } | Route::ResetPassword { .. }
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn with_query(path: &str, pairs: &[(&str, Option<&str>)]) -> String {
    let present: Vec<(&str, &str)> = pairs.iter().filter_map(|(k, v)| v.map(|v| (*k, v))).collect();
    if present.is_empty() {
        return path.to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(present)
        .finish();
    format!("{}?{}", path, query)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    pub fn from_token(present: bool) -> Self {
        if present {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

/// Where a visitor actually lands when asking for `route`.
/// The requested route is not remembered across the redirect.
pub fn resolve(route: Route, state: AuthState) -> Route {
    match (state, route) {
        (_, route @ Route::NotFound(_)) => route,
        (AuthState::Authenticated, route) if route.is_public() => Route::Dashboard,
        (AuthState::Unauthenticated, route) if !route.is_public() => Route::Login,
        (_, route) => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_admin_routes() {
        assert_eq!(Route::parse("/admin/companies"), Route::List(ResourceKind::Company));
        assert_eq!(Route::parse("/admin/jobdetail"), Route::List(ResourceKind::JobDetail));
        assert_eq!(Route::parse("/admin/jobad/create"), Route::Create(ResourceKind::JobAd));
        assert_eq!(
            Route::parse("/admin/newspaper/n1/edit"),
            Route::Edit(ResourceKind::Newspaper, "n1".into())
        );
        assert_eq!(Route::parse("/admin/notifications"), Route::Notifications);
        assert!(matches!(Route::parse("/admin/unknown"), Route::NotFound(_)));
        assert_eq!(Route::parse("/"), Route::Login);
    }

    #[test]
    fn query_parameters_round_trip() {
        let route = Route::ResetPassword {
            email: Some("a+b@x.io".into()),
            otp: Some("123456".into()),
        };
        assert_eq!(Route::parse(&route.path()), route);
        assert_eq!(Route::parse("/verify-otp"), Route::VerifyOtp { email: None });
        assert_eq!(Route::parse("/verify-otp?email="), Route::VerifyOtp { email: None });
    }

    #[test]
    fn protected_routes_need_a_session() {
        let target = Route::Edit(ResourceKind::Company, "c1".into());
        assert_eq!(resolve(target.clone(), AuthState::Unauthenticated), Route::Login);
        assert_eq!(resolve(target.clone(), AuthState::Authenticated), target);
        assert_eq!(resolve(Route::Profile, AuthState::Unauthenticated), Route::Login);
    }

    #[test]
    fn public_routes_bounce_logged_in_visitors() {
        assert_eq!(resolve(Route::Login, AuthState::Authenticated), Route::Dashboard);
        assert_eq!(resolve(Route::Register, AuthState::Unauthenticated), Route::Register);
    }
}
