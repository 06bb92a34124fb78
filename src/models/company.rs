use serde::{Deserialize, Serialize};
use std::fmt;

use super::Resource;
use crate::types::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrgType {
    Government,
    #[default]
    Private,
    #[serde(rename = "NGO")]
    Ngo,
    #[serde(rename = "BANK")]
    Bank,
}

impl OrgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrgType::Government => "Government",
            OrgType::Private => "Private",
            OrgType::Ngo => "NGO",
            OrgType::Bank => "BANK",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "government" => Some(OrgType::Government),
            "private" => Some(OrgType::Private),
            "ngo" => Some(OrgType::Ngo),
            "bank" => Some(OrgType::Bank),
            _ => None,
        }
    }
}

impl fmt::Display for OrgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation state of a company listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Approved,
    #[default]
    Pending,
    Rejected,
}

impl CompanyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CompanyStatus::Approved => "approved",
            CompanyStatus::Pending => "pending",
            CompanyStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "approved" => Some(CompanyStatus::Approved),
            "pending" => Some(CompanyStatus::Pending),
            "rejected" => Some(CompanyStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: String,
    pub org_name: String,
    #[serde(default)]
    pub org_location: Option<String>,
    #[serde(default)]
    pub org_web: Option<String>,
    #[serde(default)]
    pub org_logo: Option<String>,
    #[serde(default)]
    pub org_info: Option<String>,
    #[serde(default)]
    pub org_type: OrgType,
    #[serde(default)]
    pub is_hot_job: bool,
    #[serde(default)]
    pub status: CompanyStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    pub org_name: String,
    pub org_location: String,
    pub org_web: String,
    pub org_logo: String,
    pub org_info: String,
    pub org_type: OrgType,
    pub is_hot_job: bool,
    pub status: CompanyStatus,
}

impl Resource for Company {
    type Draft = CompanyDraft;

    const KIND: ResourceKind = ResourceKind::Company;
    const COLLECTION: &'static str = "companies";
    const NAME: &'static str = "company";
    const LABEL: &'static str = "Company";
    const AUTHENTICATED_READS: bool = true;

    fn id(&self) -> &str {
        &self.id
    }
}
