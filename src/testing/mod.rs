//! In-memory backends and fixtures for unit tests.
//!
//! The backends implement the same traits as the REST backends so that
//! containers and views can be driven without a server. Failures are
//! injected with `fail_with` and stay active until `recover`.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Mutex;
use uuid::Uuid;

use crate::api::auth::{LoginRequest, OtpRequest, ProfileUpdate, RegisterRequest, ResetPasswordRequest};
use crate::api::{AuthApi, NotificationApi, ResourceApi};
use crate::error::ClientError;
use crate::models::{
    CompanyDraft, CompanyStatus, JobAdDraft, JobDetailDraft, NotificationContent, NotificationPayload, OrgType,
    Resource, Session, User,
};
use crate::types::PublishStatus;

fn injected(failure: &Mutex<Option<(u16, String)>>) -> Result<(), ClientError> {
    match failure.lock().unwrap().as_ref() {
        Some((status, message)) => Err(ClientError::from_status(*status, Some(&json!({ "message": message })))),
        None => Ok(()),
    }
}

fn not_found(label: &str) -> ClientError {
    ClientError::from_status(404, Some(&json!({ "message": format!("{} not found", label) })))
}

/// A collection held in a `Vec`, in insertion order
pub struct MemoryBackend<R: Resource> {
    records: Mutex<Vec<R>>,
    next_id: Mutex<Option<String>>,
    failure: Mutex<Option<(u16, String)>>,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> Default for MemoryBackend<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> MemoryBackend<R> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: Mutex::new(None),
            failure: Mutex::new(None),
            _marker: PhantomData,
        }
    }

    /// Insert a record directly, bypassing failure injection
    pub fn seed(&self, draft: &R::Draft) -> R {
        let record = materialize::<R>(&self.take_id(), draft);
        self.records.lock().unwrap().push(record.clone());
        record
    }

    /// Id to hand out on the next create or seed instead of a fresh one
    pub fn pin_next_id(&self, id: impl Into<String>) {
        *self.next_id.lock().unwrap() = Some(id.into());
    }

    pub fn fail_with(&self, status: u16, message: &str) {
        *self.failure.lock().unwrap() = Some((status, message.to_string()));
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn records(&self) -> Vec<R> {
        self.records.lock().unwrap().clone()
    }

    fn take_id(&self) -> String {
        self.next_id
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
    }
}

/// Build a record from a draft the way the server does: same wire fields plus `_id`
pub fn materialize<R: Resource>(id: &str, draft: &R::Draft) -> R {
    let mut value = serde_json::to_value(draft).expect("draft serializes");
    value["_id"] = Value::String(id.to_string());
    serde_json::from_value(value).expect("draft fields decode as a record")
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for MemoryBackend<R> {
    async fn list_at(&self, path: &str) -> Result<Vec<R>, ClientError> {
        injected(&self.failure)?;
        let records = self.records();
        if path == R::COLLECTION {
            return Ok(records);
        }

        let per_ad = format!("{}/for-ad/", R::COLLECTION);
        match path.strip_prefix(&per_ad) {
            Some("all") => Ok(records),
            Some(ad_id) => Ok(records
                .into_iter()
                .filter(|r| serde_json::to_value(r).ok().and_then(|v| v.get("jobAdId").cloned()) == Some(json!(ad_id)))
                .collect()),
            None => Err(ClientError::from_status(404, None)),
        }
    }

    async fn get(&self, id: &str) -> Result<R, ClientError> {
        injected(&self.failure)?;
        self.records()
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found(R::LABEL))
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, ClientError> {
        injected(&self.failure)?;
        let record = materialize::<R>(&self.take_id(), draft);
        let mut records = self.records.lock().unwrap();
        match records.iter().position(|r| r.id() == record.id()) {
            Some(index) => records[index] = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(record)
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, ClientError> {
        injected(&self.failure)?;
        let mut records = self.records.lock().unwrap();
        let index = records.iter().position(|r| r.id() == id).ok_or_else(|| not_found(R::LABEL))?;
        let record = materialize::<R>(id, draft);
        records[index] = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        injected(&self.failure)?;
        let mut records = self.records.lock().unwrap();
        let index = records.iter().position(|r| r.id() == id).ok_or_else(|| not_found(R::LABEL))?;
        records.remove(index);
        Ok(())
    }
}

struct Account {
    user: User,
    password: String,
}

/// Accounts, OTPs and a "current user" standing in for the bearer token
#[derive(Default)]
pub struct MemoryAuth {
    accounts: Mutex<Vec<Account>>,
    otps: Mutex<HashMap<String, String>>,
    current: Mutex<Option<String>>,
    issued: Mutex<u32>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user_name: &str, email: &str, password: &str) -> User {
        let user = User {
            id: Uuid::new_v4().simple().to_string(),
            user_name: user_name.to_string(),
            email: email.to_string(),
            role: Some("admin".to_string()),
        };
        self.accounts.lock().unwrap().push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        user
    }

    pub fn issued_otp(&self, email: &str) -> Option<String> {
        self.otps.lock().unwrap().get(email).cloned()
    }

    fn session_for(&self, user: &User) -> Session {
        *self.current.lock().unwrap() = Some(user.id.clone());
        Session::new(format!("token-{}", user.id), Some(user.clone()))
    }

    fn check_otp(&self, email: &str, otp: &str) -> Result<(), ClientError> {
        match self.otps.lock().unwrap().get(email) {
            Some(issued) if issued == otp => Ok(()),
            _ => Err(ClientError::from_status(400, Some(&json!({ "message": "Invalid or expired OTP" })))),
        }
    }
}

#[async_trait]
impl AuthApi for MemoryAuth {
    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        let user = self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.user.email == request.email && a.password == request.password)
            .map(|a| a.user.clone());
        match user {
            Some(user) => Ok(self.session_for(&user)),
            None => Err(ClientError::from_status(401, Some(&json!({ "message": "Invalid credentials" })))),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Session, ClientError> {
        let exists = self.accounts.lock().unwrap().iter().any(|a| a.user.email == request.email);
        if exists {
            return Err(ClientError::from_status(400, Some(&json!({ "message": "User already exists" }))));
        }
        let user = self.add_user(&request.user_name, &request.email, &request.password);
        Ok(self.session_for(&user))
    }

    async fn forgot_password(&self, email: &str) -> Result<String, ClientError> {
        let known = self.accounts.lock().unwrap().iter().any(|a| a.user.email == email);
        if !known {
            return Err(ClientError::from_status(404, Some(&json!({ "message": "There is no user with that email" }))));
        }
        let mut issued = self.issued.lock().unwrap();
        *issued += 1;
        self.otps.lock().unwrap().insert(email.to_string(), format!("{:06}", 100_000 + *issued));
        Ok(format!("OTP sent to {}", email))
    }

    async fn verify_otp(&self, request: &OtpRequest) -> Result<(), ClientError> {
        self.check_otp(&request.email, &request.otp)
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Session, ClientError> {
        self.check_otp(&request.email, &request.otp)?;
        self.otps.lock().unwrap().remove(&request.email);
        let user = {
            let mut accounts = self.accounts.lock().unwrap();
            let account = accounts
                .iter_mut()
                .find(|a| a.user.email == request.email)
                .ok_or_else(|| not_found("User"))?;
            account.password = request.password.clone();
            account.user.clone()
        };
        Ok(self.session_for(&user))
    }

    async fn update_details(&self, update: &ProfileUpdate) -> Result<User, ClientError> {
        let current = self.current.lock().unwrap().clone().ok_or(ClientError::NoSession)?;
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.user.id == current)
            .ok_or_else(|| not_found("User"))?;
        account.user.user_name = update.user_name.clone();
        account.user.email = update.email.clone();
        Ok(account.user.clone())
    }
}

/// Fixed content plus a log of everything sent
pub struct MemoryNotifications {
    content: NotificationContent,
    sent: Mutex<Vec<NotificationPayload>>,
    failure: Mutex<Option<(u16, String)>>,
}

impl MemoryNotifications {
    pub fn new(content: NotificationContent) -> Self {
        Self {
            content,
            sent: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    pub fn sent(&self) -> Vec<NotificationPayload> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_with(&self, status: u16, message: &str) {
        *self.failure.lock().unwrap() = Some((status, message.to_string()));
    }
}

#[async_trait]
impl NotificationApi for MemoryNotifications {
    async fn content(&self) -> Result<NotificationContent, ClientError> {
        injected(&self.failure)?;
        Ok(self.content.clone())
    }

    async fn send(&self, payload: &NotificationPayload) -> Result<String, ClientError> {
        injected(&self.failure)?;
        self.sent.lock().unwrap().push(payload.clone());
        Ok("Notification sent successfully".to_string())
    }
}

pub fn company_draft(name: &str) -> CompanyDraft {
    CompanyDraft {
        org_name: name.to_string(),
        org_location: "Dhaka".to_string(),
        org_web: String::new(),
        org_logo: "https://cdn.example.com/logo.png".to_string(),
        org_info: String::new(),
        org_type: OrgType::Private,
        is_hot_job: false,
        status: CompanyStatus::Pending,
    }
}

pub fn job_ad_draft(org_id: &str, title: &str) -> JobAdDraft {
    JobAdDraft {
        org_id: org_id.to_string(),
        job_ad_title: title.to_string(),
        ad_publish_date: "2024-03-01".to_string(),
        application_start_date: "2024-03-02".to_string(),
        application_end_date: "2024-03-30".to_string(),
        job_categories: vec!["Government".to_string()],
        total_job_position: Some(5),
        application_method: Default::default(),
        application_link: String::new(),
        ad_url_img_array: Vec::new(),
        ad_url_pdf: String::new(),
        ad_info: String::new(),
        status: PublishStatus::Draft,
        remark: String::new(),
    }
}

pub fn job_detail_draft(ad_id: &str, title: &str) -> JobDetailDraft {
    JobDetailDraft {
        job_ad_id: ad_id.to_string(),
        job_title: title.to_string(),
        job_position: Some(1),
        edu_qu: "Graduate".to_string(),
        others_qu: String::new(),
        salary: String::new(),
        age: String::new(),
    }
}

/// One item per category, plus a notice with a blank title
pub fn sample_content() -> NotificationContent {
    serde_json::from_value(json!({
        "jobAds": [{ "_id": "A1", "jobAdTitle": "Officer Recruitment", "status": "published" }],
        "notices": [
            { "_id": "N1", "title": "Admit Card Notice", "status": "published" },
            { "_id": "N2", "title": "   ", "status": "published" }
        ],
        "results": [{ "_id": "R1", "title": "Written Exam Result", "status": "published" }],
        "solutions": [{ "_id": "S1", "title": "Preliminary Solution", "status": "published" }]
    }))
    .expect("sample content decodes")
}
