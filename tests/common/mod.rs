#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Path as UrlPath, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use tower_http::trace::TraceLayer;

use jobportal_admin::api::ApiClient;
use jobportal_admin::config::AppConfig;
use jobportal_admin::models::Session;
use jobportal_admin::session::{MemorySessionStore, SharedSession};
use jobportal_admin::store::RootState;

pub const TOKEN: &str = "test-token";
pub const ADMIN_EMAIL: &str = "admin@portal.test";
pub const ADMIN_PASSWORD: &str = "secret";
pub const OTP: &str = "123456";

#[derive(Default)]
pub struct Portal {
    pub collections: HashMap<String, Vec<Value>>,
    pub users: Vec<(String, String, String)>,
    pub otps: HashMap<String, String>,
    pub sent: Vec<Value>,
    next_id: u64,
}

impl Portal {
    fn allocate_id(&mut self, collection: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", collection, self.next_id)
    }

    fn user_json(&self, email: &str) -> Value {
        let name = self
            .users
            .iter()
            .find(|(_, e, _)| e == email)
            .map(|(n, _, _)| n.clone())
            .unwrap_or_default();
        json!({ "_id": format!("u-{}", email), "userName": name, "email": email, "role": "admin" })
    }

    fn session(&self, email: &str) -> Value {
        json!({ "success": true, "token": TOKEN, "data": self.user_json(email) })
    }
}

pub type Shared = Arc<Mutex<Portal>>;

/// Fake job portal API on a random local port, one per test
pub struct FakePortal {
    pub root: String,
    pub state: Shared,
}

impl FakePortal {
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind fake portal")?;

        let state: Shared = Arc::new(Mutex::new(Portal::default()));
        state
            .lock()
            .unwrap()
            .users
            .push(("admin".into(), ADMIN_EMAIL.into(), ADMIN_PASSWORD.into()));

        let app = router(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            root: format!("http://127.0.0.1:{}/api/v1", port),
            state,
        })
    }

    pub fn seed(&self, collection: &str, record: Value) {
        self.state
            .lock()
            .unwrap()
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn sent(&self) -> Vec<Value> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn client(&self, session: SharedSession) -> ApiClient {
        ApiClient::new(&self.root, session).unwrap()
    }

    pub fn anonymous(&self) -> (RootState, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        (RootState::connect(self.client(store.clone())), store)
    }

    pub fn signed_in(&self) -> RootState {
        let store = Arc::new(MemorySessionStore::with_session(Session::new(TOKEN, None)));
        RootState::connect(self.client(store))
    }

    /// Configuration pointing the CLI at this portal with the session kept in `dir`
    pub fn config(&self, dir: &Path) -> AppConfig {
        let mut config = AppConfig::from_env();
        config.api.base_url = self.root.trim_end_matches("/api/v1").to_string();
        config.api.prefix = "/api/v1".to_string();
        config.session.config_dir = Some(dir.to_path_buf());
        config.session.storage_key = "userInfo".to_string();
        config
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/forgotpassword", post(forgot_password))
        .route("/api/v1/auth/verifyotp", post(verify_otp))
        .route("/api/v1/auth/resetpassword", put(reset_password))
        .route("/api/v1/auth/updatedetails", put(update_details))
        .route("/api/v1/notifications/content", get(notification_content))
        .route("/api/v1/notifications/send", post(send_notification))
        .route("/api/v1/jobdetails/for-ad/:ad_id", get(details_for_ad))
        .route("/api/v1/:collection", get(list).post(create))
        .route("/api/v1/:collection/:id", get(fetch).put(update).delete(remove))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

fn authorized(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {}", TOKEN);
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(fail(StatusCode::UNAUTHORIZED, "Not authorized to access this route")),
    }
}

fn text(body: &Value, key: &str) -> String {
    body.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let portal = state.lock().unwrap();
    let (email, password) = (text(&body, "email"), text(&body, "password"));
    if portal.users.iter().any(|(_, e, p)| *e == email && *p == password) {
        Json(portal.session(&email)).into_response()
    } else {
        fail(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut portal = state.lock().unwrap();
    let email = text(&body, "email");
    if portal.users.iter().any(|(_, e, _)| *e == email) {
        return fail(StatusCode::BAD_REQUEST, "User already exists");
    }
    portal
        .users
        .push((text(&body, "userName"), email.clone(), text(&body, "password")));
    (StatusCode::CREATED, Json(portal.session(&email))).into_response()
}

async fn forgot_password(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut portal = state.lock().unwrap();
    let email = text(&body, "email");
    if !portal.users.iter().any(|(_, e, _)| *e == email) {
        return fail(StatusCode::NOT_FOUND, "There is no user with that email");
    }
    portal.otps.insert(email.clone(), OTP.to_string());
    Json(json!({ "success": true, "message": format!("OTP sent to {}", email) })).into_response()
}

async fn verify_otp(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let portal = state.lock().unwrap();
    match portal.otps.get(&text(&body, "email")) {
        Some(otp) if *otp == text(&body, "otp") => {
            Json(json!({ "success": true, "message": "OTP verified" })).into_response()
        }
        _ => fail(StatusCode::BAD_REQUEST, "Invalid or expired OTP"),
    }
}

async fn reset_password(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut portal = state.lock().unwrap();
    let email = text(&body, "email");
    if portal.otps.get(&email).map(String::as_str) != Some(text(&body, "otp").as_str()) {
        return fail(StatusCode::BAD_REQUEST, "Invalid or expired OTP");
    }
    portal.otps.remove(&email);
    let password = text(&body, "password");
    if let Some(user) = portal.users.iter_mut().find(|(_, e, _)| *e == email) {
        user.2 = password;
    }
    Json(portal.session(&email)).into_response()
}

async fn update_details(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(denied) = authorized(&headers) {
        return denied;
    }
    let mut portal = state.lock().unwrap();
    let (user_name, email) = (text(&body, "userName"), text(&body, "email"));
    if let Some(user) = portal.users.iter_mut().find(|(n, _, _)| *n == "admin") {
        user.0 = user_name;
        user.1 = email.clone();
    }
    Json(json!({ "success": true, "data": portal.user_json(&email) })).into_response()
}

/// Job ads come back with their company populated when it exists
fn populate_org(portal: &Portal, mut ad: Value) -> Value {
    let org = ad.get("orgId").and_then(Value::as_str).map(str::to_string);
    if let Some(org_id) = org {
        let company = portal
            .collections
            .get("companies")
            .and_then(|cs| cs.iter().find(|c| c["_id"] == org_id.as_str()));
        if let Some(company) = company {
            ad["orgId"] = json!({ "_id": org_id, "orgName": company["orgName"] });
        }
    }
    ad
}

async fn list(State(state): State<Shared>, headers: HeaderMap, UrlPath(collection): UrlPath<String>) -> Response {
    if collection == "companies" {
        if let Err(denied) = authorized(&headers) {
            return denied;
        }
    }
    let portal = state.lock().unwrap();
    let mut records = portal.collections.get(&collection).cloned().unwrap_or_default();
    if collection == "jobs" {
        records = records.into_iter().map(|ad| populate_org(&portal, ad)).collect();
    }
    Json(json!({ "success": true, "count": records.len(), "data": records })).into_response()
}

async fn fetch(
    State(state): State<Shared>,
    headers: HeaderMap,
    UrlPath((collection, id)): UrlPath<(String, String)>,
) -> Response {
    if collection == "companies" {
        if let Err(denied) = authorized(&headers) {
            return denied;
        }
    }
    let portal = state.lock().unwrap();
    let found = portal
        .collections
        .get(&collection)
        .and_then(|records| records.iter().find(|r| r["_id"] == id.as_str()))
        .cloned();
    match found {
        Some(record) => Json(json!({ "success": true, "data": record })).into_response(),
        None => fail(StatusCode::NOT_FOUND, &format!("No record found with id {}", id)),
    }
}

async fn create(
    State(state): State<Shared>,
    headers: HeaderMap,
    UrlPath(collection): UrlPath<String>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    if let Err(denied) = authorized(&headers) {
        return denied;
    }
    let mut portal = state.lock().unwrap();
    let mut record = body;
    record.insert("_id".into(), json!(portal.allocate_id(&collection)));
    record.insert("createdAt".into(), json!("2024-05-01T10:00:00.000Z"));
    let record = Value::Object(record);
    portal
        .collections
        .entry(collection)
        .or_default()
        .push(record.clone());
    (StatusCode::CREATED, Json(json!({ "success": true, "data": record }))).into_response()
}

async fn update(
    State(state): State<Shared>,
    headers: HeaderMap,
    UrlPath((collection, id)): UrlPath<(String, String)>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    if let Err(denied) = authorized(&headers) {
        return denied;
    }
    let mut portal = state.lock().unwrap();
    let existing = portal
        .collections
        .get_mut(&collection)
        .and_then(|records| records.iter_mut().find(|r| r["_id"] == id.as_str()));
    match existing {
        Some(Value::Object(fields)) => {
            fields.extend(body);
            let record = Value::Object(fields.clone());
            Json(json!({ "success": true, "data": record })).into_response()
        }
        _ => fail(StatusCode::NOT_FOUND, &format!("No record found with id {}", id)),
    }
}

async fn remove(
    State(state): State<Shared>,
    headers: HeaderMap,
    UrlPath((collection, id)): UrlPath<(String, String)>,
) -> Response {
    if let Err(denied) = authorized(&headers) {
        return denied;
    }
    let mut portal = state.lock().unwrap();
    let Some(records) = portal.collections.get_mut(&collection) else {
        return fail(StatusCode::NOT_FOUND, &format!("No record found with id {}", id));
    };
    let before = records.len();
    records.retain(|r| r["_id"] != id.as_str());
    if records.len() == before {
        return fail(StatusCode::NOT_FOUND, &format!("No record found with id {}", id));
    }
    Json(json!({ "success": true, "data": {} })).into_response()
}

async fn details_for_ad(State(state): State<Shared>, UrlPath(ad_id): UrlPath<String>) -> Response {
    let portal = state.lock().unwrap();
    let records: Vec<Value> = portal
        .collections
        .get("jobdetails")
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .filter(|d| ad_id == "all" || d["jobAdId"] == ad_id.as_str())
        .collect();
    Json(json!({ "success": true, "count": records.len(), "data": records })).into_response()
}

async fn notification_content(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(denied) = authorized(&headers) {
        return denied;
    }
    let portal = state.lock().unwrap();
    let of = |name: &str| portal.collections.get(name).cloned().unwrap_or_default();
    Json(json!({
        "success": true,
        "data": {
            "jobAds": of("jobs"),
            "notices": of("notices"),
            "results": of("results"),
            "solutions": of("solutions"),
        }
    }))
    .into_response()
}

async fn send_notification(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(denied) = authorized(&headers) {
        return denied;
    }
    state.lock().unwrap().sent.push(body);
    Json(json!({ "success": true, "message": "Notification sent successfully" })).into_response()
}
