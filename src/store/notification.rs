use std::collections::BTreeMap;
use std::sync::Arc;

use super::command::{CommandFailure, CommandState};
use crate::api::NotificationApi;
use crate::error::ClientError;
use crate::models::{NotificationContent, NotificationPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationOperation {
    FetchContent,
    Send,
}

/// Announceable content plus the outcome of the last send
pub struct NotificationContainer {
    api: Arc<dyn NotificationApi>,
    content: NotificationContent,
    loading: bool,
    error: Option<String>,
    success_message: Option<String>,
    commands: BTreeMap<NotificationOperation, CommandState<()>>,
}

impl NotificationContainer {
    pub fn new(api: Arc<dyn NotificationApi>) -> Self {
        Self {
            api,
            content: NotificationContent::default(),
            loading: false,
            error: None,
            success_message: None,
            commands: BTreeMap::new(),
        }
    }

    pub fn content(&self) -> &NotificationContent {
        &self.content
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn command(&self, op: NotificationOperation) -> CommandState<()> {
        self.commands.get(&op).cloned().unwrap_or_default()
    }

    pub async fn fetch_content(&mut self) -> Result<&NotificationContent, CommandFailure> {
        self.begin(NotificationOperation::FetchContent);
        match self.api.content().await {
            Ok(content) => {
                self.content = content;
                self.finish(NotificationOperation::FetchContent);
                Ok(&self.content)
            }
            Err(err) => Err(self.fail(NotificationOperation::FetchContent, err)),
        }
    }

    pub async fn send(&mut self, payload: &NotificationPayload) -> Result<String, CommandFailure> {
        self.begin(NotificationOperation::Send);
        self.success_message = None;
        match self.api.send(payload).await {
            Ok(message) => {
                tracing::info!(
                    "Notification sent for {} {}",
                    payload.data_payload.kind,
                    payload.data_payload.id
                );
                self.success_message = Some(message.clone());
                self.finish(NotificationOperation::Send);
                Ok(message)
            }
            Err(err) => Err(self.fail(NotificationOperation::Send, err)),
        }
    }

    pub fn reset(&mut self) {
        self.loading = false;
        self.error = None;
        self.success_message = None;
        self.commands.clear();
    }

    fn begin(&mut self, op: NotificationOperation) {
        self.loading = true;
        self.error = None;
        self.commands.insert(op, CommandState::Pending);
    }

    fn finish(&mut self, op: NotificationOperation) {
        self.loading = false;
        self.commands.insert(op, CommandState::Succeeded(()));
    }

    fn fail(&mut self, op: NotificationOperation, err: ClientError) -> CommandFailure {
        tracing::warn!("notification {:?} failed: {}", op, err);
        let failure = CommandFailure::from(err);
        self.loading = false;
        self.error = Some(failure.reason().to_string());
        self.commands.insert(op, CommandState::Failed(failure.reason().to_string()));
        failure
    }
}
