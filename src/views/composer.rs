use std::fmt;
use thiserror::Error;

use crate::models::{ContentKind, DataPayload, NotificationContent, NotificationPayload};
use crate::store::{CommandFailure, NotificationContainer};

/// Picklist value `kind:id`, e.g. `jobAd:A1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub kind: ContentKind,
    pub id: String,
}

impl Selection {
    pub fn parse(key: &str) -> Option<Self> {
        let (kind, id) = key.trim().split_once(':')?;
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        Some(Self {
            kind: ContentKind::parse(kind)?,
            id: id.to_string(),
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub group: &'static str,
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    #[error("Select an item to notify about")]
    NoSelection,

    #[error("'{0}' is not a valid selection")]
    UnknownSelection(String),

    #[error("{0}")]
    Failed(#[from] CommandFailure),
}

/// Push notification form
#[derive(Debug, Clone, Default)]
pub struct Composer {
    selection: Option<Selection>,
    pub title: String,
    pub body: String,
    banner: Option<String>,
    mounted: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the announceable content the first time the page opens
    pub async fn mount(&mut self, container: &mut NotificationContainer) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let _ = container.fetch_content().await;
    }

    /// Every item of every category, grouped in a fixed order
    pub fn picklist(content: &NotificationContent) -> Vec<PickItem> {
        ContentKind::ALL
            .into_iter()
            .flat_map(|kind| {
                content.entries(kind).into_iter().map(move |(id, title)| PickItem {
                    group: kind.group_label(),
                    key: format!("{}:{}", kind, id),
                    label: title.to_string(),
                })
            })
            .collect()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Choose an item and fill title and body from its category template.
    /// An empty key clears the selection and both fields.
    pub fn select(&mut self, key: &str, content: &NotificationContent) -> Result<(), ComposerError> {
        if key.trim().is_empty() {
            self.clear();
            return Ok(());
        }
        let selection = Selection::parse(key).ok_or_else(|| ComposerError::UnknownSelection(key.to_string()))?;

        self.title = selection.kind.template_title().to_string();
        self.body = content
            .title_of(selection.kind, &selection.id)
            .unwrap_or_else(|| selection.kind.fallback_body())
            .to_string();
        self.selection = Some(selection);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selection = None;
        self.title.clear();
        self.body.clear();
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn payload(&self) -> Result<NotificationPayload, ComposerError> {
        let selection = self.selection.as_ref().ok_or(ComposerError::NoSelection)?;
        Ok(NotificationPayload {
            title: self.title.clone(),
            body: self.body.clone(),
            data_payload: DataPayload {
                kind: selection.kind,
                id: selection.id.clone(),
            },
        })
    }

    pub async fn submit(&mut self, container: &mut NotificationContainer) -> Result<String, ComposerError> {
        let payload = self.payload()?;
        self.banner = None;
        let message = container.send(&payload).await?;
        self.banner = Some(message.clone());
        Ok(message)
    }
}
