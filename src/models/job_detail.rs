use serde::{Deserialize, Serialize};

use super::Resource;
use crate::types::ResourceKind;

/// One position advertised inside a job ad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub job_ad_id: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_position: Option<u32>,
    #[serde(default)]
    pub edu_qu: Option<String>,
    #[serde(default)]
    pub others_qu: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailDraft {
    pub job_ad_id: String,
    pub job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_position: Option<u32>,
    pub edu_qu: String,
    pub others_qu: String,
    pub salary: String,
    pub age: String,
}

impl Resource for JobDetail {
    type Draft = JobDetailDraft;

    const KIND: ResourceKind = ResourceKind::JobDetail;
    const COLLECTION: &'static str = "jobdetails";
    const NAME: &'static str = "jobdetail";
    const LABEL: &'static str = "Job detail";

    fn id(&self) -> &str {
        &self.id
    }

    // There is no bulk GET on the collection; the per-ad route takes a sentinel.
    fn list_path() -> String {
        Self::for_ad_path(Self::ALL_ADS)
    }
}

impl JobDetail {
    /// Ad id the API treats as "every ad" on the per-ad listing route
    pub const ALL_ADS: &'static str = "all";

    pub fn for_ad_path(ad_id: &str) -> String {
        format!("{}/for-ad/{}", Self::COLLECTION, super::path_segment(ad_id))
    }
}
