/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Commands a resource container can run.
/// Used as the key for per-command state and in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    List,
    GetById,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Reads leave the `success` flag alone when they start
    pub fn is_read(self) -> bool {
        matches!(self, Operation::List | Operation::GetById)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::GetById => "get_by_id",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Console sections that manage one resource collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Company,
    JobAd,
    JobDetail,
    Notice,
    Result,
    Solution,
    Newspaper,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Company,
        ResourceKind::JobAd,
        ResourceKind::JobDetail,
        ResourceKind::Notice,
        ResourceKind::Result,
        ResourceKind::Solution,
        ResourceKind::Newspaper,
    ];

    /// Route segment of the list page, e.g. `/admin/companies`
    pub fn list_segment(self) -> &'static str {
        match self {
            ResourceKind::Company => "companies",
            ResourceKind::JobAd => "jobads",
            ResourceKind::JobDetail => "jobdetail",
            ResourceKind::Notice => "notices",
            ResourceKind::Result => "results",
            ResourceKind::Solution => "solutions",
            ResourceKind::Newspaper => "newspapers",
        }
    }

    /// Route segment of the create and edit pages, e.g. `/admin/company/create`
    pub fn entity_segment(self) -> &'static str {
        match self {
            ResourceKind::Company => "company",
            ResourceKind::JobAd => "jobad",
            ResourceKind::JobDetail => "jobdetail",
            ResourceKind::Notice => "notice",
            ResourceKind::Result => "result",
            ResourceKind::Solution => "solution",
            ResourceKind::Newspaper => "newspaper",
        }
    }

    /// CLI command group name
    pub fn command(self) -> &'static str {
        match self {
            ResourceKind::Company => "company",
            ResourceKind::JobAd => "job-ad",
            ResourceKind::JobDetail => "job-detail",
            ResourceKind::Notice => "notice",
            ResourceKind::Result => "result",
            ResourceKind::Solution => "solution",
            ResourceKind::Newspaper => "newspaper",
        }
    }

    pub fn from_list_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.list_segment() == segment)
    }

    pub fn from_entity_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.entity_segment() == segment)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Publication state shared by job ads, notices, results, solutions and newspapers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
    Expired,
}

impl PublishStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PublishStatus::Draft => "draft",
            PublishStatus::Published => "published",
            PublishStatus::Expired => "expired",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "draft" => Some(PublishStatus::Draft),
            "published" => Some(PublishStatus::Published),
            "expired" => Some(PublishStatus::Expired),
            _ => None,
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
