use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ExamResult, JobAd, Notice, Solution};

/// Content categories a push notification can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    #[serde(rename = "jobAd")]
    JobAd,
    #[serde(rename = "notice")]
    Notice,
    #[serde(rename = "result")]
    Result,
    #[serde(rename = "solution")]
    Solution,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::JobAd,
        ContentKind::Notice,
        ContentKind::Result,
        ContentKind::Solution,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::JobAd => "jobAd",
            ContentKind::Notice => "notice",
            ContentKind::Result => "result",
            ContentKind::Solution => "solution",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        ContentKind::ALL.into_iter().find(|k| k.as_str() == raw.trim())
    }

    /// Picklist group heading
    pub fn group_label(self) -> &'static str {
        match self {
            ContentKind::JobAd => "Job Ads",
            ContentKind::Notice => "Notices",
            ContentKind::Result => "Results",
            ContentKind::Solution => "Solutions",
        }
    }

    /// Fixed notification title for the category
    pub fn template_title(self) -> &'static str {
        match self {
            ContentKind::JobAd => "Job Advertisement",
            ContentKind::Notice => "Job Notice",
            ContentKind::Result => "Result Published",
            ContentKind::Solution => "Solution Published",
        }
    }

    /// Body used when the selected item has no title of its own
    pub fn fallback_body(self) -> &'static str {
        match self {
            ContentKind::JobAd => "A new job advertisement has been published.",
            ContentKind::Notice => "A new notice has been published.",
            ContentKind::Result => "A new result has been published.",
            ContentKind::Solution => "A new exam solution has been published.",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of `GET notifications/content`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContent {
    #[serde(default)]
    pub job_ads: Vec<JobAd>,
    #[serde(default)]
    pub notices: Vec<Notice>,
    #[serde(default)]
    pub results: Vec<ExamResult>,
    #[serde(default)]
    pub solutions: Vec<Solution>,
}

impl NotificationContent {
    /// Title of the item with this id in the given category, if it exists
    pub fn title_of(&self, kind: ContentKind, id: &str) -> Option<&str> {
        let title = match kind {
            ContentKind::JobAd => self.job_ads.iter().find(|i| i.id == id).map(|i| i.job_ad_title.as_str()),
            ContentKind::Notice => self.notices.iter().find(|i| i.id == id).map(|i| i.title.as_str()),
            ContentKind::Result => self.results.iter().find(|i| i.id == id).map(|i| i.title.as_str()),
            ContentKind::Solution => self.solutions.iter().find(|i| i.id == id).map(|i| i.title.as_str()),
        };
        title.filter(|t| !t.trim().is_empty())
    }

    /// `(id, title)` pairs of one category, in server order
    pub fn entries(&self, kind: ContentKind) -> Vec<(&str, &str)> {
        match kind {
            ContentKind::JobAd => self.job_ads.iter().map(|i| (i.id.as_str(), i.job_ad_title.as_str())).collect(),
            ContentKind::Notice => self.notices.iter().map(|i| (i.id.as_str(), i.title.as_str())).collect(),
            ContentKind::Result => self.results.iter().map(|i| (i.id.as_str(), i.title.as_str())).collect(),
            ContentKind::Solution => self.solutions.iter().map(|i| (i.id.as_str(), i.title.as_str())).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.job_ads.is_empty() && self.notices.is_empty() && self.results.is_empty() && self.solutions.is_empty()
    }
}

/// Tells the mobile app what to open when the notification is tapped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPayload {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub id: String,
}

/// Body of `POST notifications/send`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    pub data_payload: DataPayload,
}
