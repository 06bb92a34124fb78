use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::types::{PublishStatus, ResourceKind};

/// Published exam result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub main_txt: Option<String>,
    #[serde(default)]
    pub result_url_img_array: Vec<String>,
    #[serde(rename = "resultUrlPDF", default)]
    pub result_url_pdf: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResultDraft {
    pub title: String,
    pub main_txt: String,
    pub result_url_img_array: Vec<String>,
    #[serde(rename = "resultUrlPDF")]
    pub result_url_pdf: String,
    pub url: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl Resource for ExamResult {
    type Draft = ExamResultDraft;

    const KIND: ResourceKind = ResourceKind::Result;
    const COLLECTION: &'static str = "results";
    const NAME: &'static str = "result";
    const LABEL: &'static str = "Result";

    fn id(&self) -> &str {
        &self.id
    }
}
