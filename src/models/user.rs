use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The login/registration response, persisted as-is and rehydrated at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<User>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            token: token.into(),
            data: user,
        }
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.data.as_ref().map(|u| u.user_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_login_response() {
        let session: Session = serde_json::from_value(json!({
            "success": true,
            "token": "abc",
            "data": { "_id": "u1", "userName": "admin", "email": "a@x.io", "role": "admin" }
        }))
        .unwrap();

        assert!(session.has_token());
        assert_eq!(session.user_name(), Some("admin"));
        assert_eq!(session.data.unwrap().role.as_deref(), Some("admin"));
    }

    #[test]
    fn blank_token_is_not_a_session() {
        assert!(!Session::new("  ", None).has_token());
    }
}
