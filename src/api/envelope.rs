use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// `{data: ...}` / `{message: ...}` wrapper every response comes in.
/// Extra members such as `success` or `count` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Result<T, ClientError> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(ClientError::decode(
                self.message
                    .unwrap_or_else(|| "Response envelope has no data".to_string()),
            )),
        }
    }
}

/// Envelope for endpoints that only answer with a message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageEnvelope {
    pub message: Option<String>,
}

impl MessageEnvelope {
    pub fn message_or(self, fallback: &str) -> String {
        self.message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}
