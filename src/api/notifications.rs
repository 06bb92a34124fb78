use async_trait::async_trait;
use reqwest::Method;

use super::client::{ApiClient, Auth};
use crate::error::ClientError;
use crate::models::{NotificationContent, NotificationPayload};

#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// Job ads, notices, results and solutions that can be announced
    async fn content(&self) -> Result<NotificationContent, ClientError>;

    /// Queue a push notification; returns the server's confirmation message
    async fn send(&self, payload: &NotificationPayload) -> Result<String, ClientError>;
}

pub struct RestNotifications {
    client: ApiClient,
}

impl RestNotifications {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationApi for RestNotifications {
    async fn content(&self) -> Result<NotificationContent, ClientError> {
        self.client
            .get::<NotificationContent>("notifications/content", Auth::Required)
            .await?
            .into_data()
    }

    async fn send(&self, payload: &NotificationPayload) -> Result<String, ClientError> {
        let envelope = self
            .client
            .send_for_message(Method::POST, "notifications/send", Auth::Required, payload)
            .await?;
        Ok(envelope.message_or("Notification sent"))
    }
}
