use serde::{Deserialize, Serialize};

use super::Resource;
use crate::types::{PublishStatus, ResourceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyNewspaper {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "newsPaperName", default)]
    pub news_paper_name: String,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub paper_url_img_array: Vec<String>,
    #[serde(rename = "paperUrlPDF", default)]
    pub paper_url_pdf: Option<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyNewspaperDraft {
    #[serde(rename = "newsPaperName")]
    pub news_paper_name: String,
    pub publish_date: String,
    pub paper_url_img_array: Vec<String>,
    #[serde(rename = "paperUrlPDF")]
    pub paper_url_pdf: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl Resource for WeeklyNewspaper {
    type Draft = WeeklyNewspaperDraft;

    const KIND: ResourceKind = ResourceKind::Newspaper;
    const COLLECTION: &'static str = "newspapers";
    const NAME: &'static str = "newspaper";
    const LABEL: &'static str = "Newspaper";

    fn id(&self) -> &str {
        &self.id
    }
}
