use serde::{Deserialize, Serialize};
use std::fmt;

use super::Resource;
use crate::types::{PublishStatus, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApplicationMethod {
    #[default]
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "offline")]
    Offline,
    #[serde(rename = "walk-in")]
    WalkIn,
}

impl ApplicationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationMethod::Online => "online",
            ApplicationMethod::Offline => "offline",
            ApplicationMethod::WalkIn => "walk-in",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "online" => Some(ApplicationMethod::Online),
            "offline" => Some(ApplicationMethod::Offline),
            "walk-in" | "walkin" => Some(ApplicationMethod::WalkIn),
            _ => None,
        }
    }
}

impl fmt::Display for ApplicationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference from a job ad to its company. The API returns either the bare id
/// or the company populated with at least its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrgRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(rename = "orgName", default)]
        org_name: Option<String>,
    },
}

impl OrgRef {
    pub fn id(&self) -> &str {
        match self {
            OrgRef::Id(id) => id,
            OrgRef::Populated { id, .. } => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            OrgRef::Id(_) => None,
            OrgRef::Populated { org_name, .. } => org_name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAd {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub org_id: Option<OrgRef>,
    #[serde(default)]
    pub job_ad_title: String,
    #[serde(default)]
    pub ad_publish_date: Option<String>,
    #[serde(default)]
    pub application_start_date: Option<String>,
    #[serde(default)]
    pub application_end_date: Option<String>,
    #[serde(default)]
    pub job_categories: Vec<String>,
    #[serde(default)]
    pub total_job_position: Option<u32>,
    #[serde(default)]
    pub application_method: ApplicationMethod,
    #[serde(default)]
    pub application_link: Option<String>,
    #[serde(default)]
    pub ad_url_img_array: Vec<String>,
    #[serde(rename = "adUrlPDF", default)]
    pub ad_url_pdf: Option<String>,
    #[serde(default)]
    pub ad_info: Option<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAdDraft {
    pub org_id: String,
    pub job_ad_title: String,
    pub ad_publish_date: String,
    pub application_start_date: String,
    pub application_end_date: String,
    pub job_categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_job_position: Option<u32>,
    pub application_method: ApplicationMethod,
    pub application_link: String,
    pub ad_url_img_array: Vec<String>,
    #[serde(rename = "adUrlPDF")]
    pub ad_url_pdf: String,
    pub ad_info: String,
    pub status: PublishStatus,
    pub remark: String,
}

impl Resource for JobAd {
    type Draft = JobAdDraft;

    const KIND: ResourceKind = ResourceKind::JobAd;
    const COLLECTION: &'static str = "jobs";
    const NAME: &'static str = "jobad";
    const LABEL: &'static str = "Job ad";

    fn id(&self) -> &str {
        &self.id
    }
}
