use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::types::{PublishStatus, ResourceKind};

/// Answer sheet for a past exam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub main_txt: Option<String>,
    #[serde(default)]
    pub exam_date: Option<String>,
    #[serde(default)]
    pub solution_url_img_array: Vec<String>,
    #[serde(rename = "solutionUrlPDF", default)]
    pub solution_url_pdf: Option<String>,
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
pub struct SolutionDraft {
    pub title: String,
    pub main_txt: String,
    pub exam_date: String,
    pub solution_url_img_array: Vec<String>,
    #[serde(rename = "solutionUrlPDF")]
    pub solution_url_pdf: String,
    pub url: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl Resource for Solution {
    type Draft = SolutionDraft;

    const KIND: ResourceKind = ResourceKind::Solution;
    const COLLECTION: &'static str = "solutions";
    const NAME: &'static str = "solution";
    const LABEL: &'static str = "Solution";

    fn id(&self) -> &str {
        &self.id
    }
}
