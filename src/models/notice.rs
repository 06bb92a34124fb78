use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::types::{PublishStatus, ResourceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub main_txt: Option<String>,
    #[serde(default)]
    pub is_admit_card: bool,
    #[serde(default)]
    pub notice_url_img_array: Vec<String>,
    #[serde(rename = "noticeUrlPDF", default)]
    pub notice_url_pdf: Option<String>,
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
pub struct NoticeDraft {
    pub title: String,
    pub main_txt: String,
    pub is_admit_card: bool,
    pub notice_url_img_array: Vec<String>,
    #[serde(rename = "noticeUrlPDF")]
    pub notice_url_pdf: String,
    pub url: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl Resource for Notice {
    type Draft = NoticeDraft;

    const KIND: ResourceKind = ResourceKind::Notice;
    const COLLECTION: &'static str = "notices";
    const NAME: &'static str = "notice";
    const LABEL: &'static str = "Notice";

    fn id(&self) -> &str {
        &self.id
    }
}
