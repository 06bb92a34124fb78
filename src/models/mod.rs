//! Records managed through the admin console.
//!
//! Every record is flat, keyed by the server-assigned `_id`, and travels in
//! camelCase. Each record type comes with a draft type, the payload sent on
//! create and update.

pub mod company;
pub mod job_ad;
pub mod job_detail;
pub mod newspaper;
pub mod notice;
pub mod notification;
pub mod result;
pub mod solution;
pub mod user;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::types::ResourceKind;

pub use company::{Company, CompanyDraft, CompanyStatus, OrgType};
pub use job_ad::{ApplicationMethod, JobAd, JobAdDraft, OrgRef};
pub use job_detail::{JobDetail, JobDetailDraft};
pub use newspaper::{WeeklyNewspaper, WeeklyNewspaperDraft};
pub use notice::{Notice, NoticeDraft};
pub use notification::{ContentKind, DataPayload, NotificationContent, NotificationPayload};
pub use result::{ExamResult, ExamResultDraft};
pub use solution::{Solution, SolutionDraft};
pub use user::{Session, User};

/// A record type backed by one REST collection.
pub trait Resource:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Payload shape accepted by POST and PUT
    type Draft: Serialize + Clone + fmt::Debug + Send + Sync;

    /// Which console section the record belongs to
    const KIND: ResourceKind;

    /// Collection path segment under the API prefix, e.g. `companies`
    const COLLECTION: &'static str;

    /// Singular name used in routes and log lines, e.g. `company`
    const NAME: &'static str;

    /// Human label used in messages, e.g. `Company`
    const LABEL: &'static str;

    /// Whether GET requests need a session token
    const AUTHENTICATED_READS: bool = false;

    fn id(&self) -> &str;

    /// Path used by `list()`. Defaults to the collection itself.
    fn list_path() -> String {
        Self::COLLECTION.to_string()
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::COLLECTION, path_segment(id))
    }
}

/// Characters that would end or split a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a record id so it stays one segment of the request path
pub fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// Shorthand used by containers and views to locate a record in a slice
pub fn position_of<R: Resource>(items: &[R], id: &str) -> Option<usize> {
    items.iter().position(|r| r.id() == id)
}
