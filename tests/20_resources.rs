mod common;

use anyhow::Result;
use common::FakePortal;
use jobportal_admin::models::{JobAd, JobDetail, Notice, Resource, Session};
use jobportal_admin::session::MemorySessionStore;
use jobportal_admin::store::{NoticeContainer, ResourceContainer, RootState};
use jobportal_admin::types::{Operation, ResourceKind};
use jobportal_admin::views::forms::{CompanyForm, NoticeForm};
use jobportal_admin::views::{EditMode, EditView, ListScreen, ListView, ResourceForm, Route};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn company_lifecycle_through_the_views() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let mut state = portal.signed_in();

    let mut create = EditView::<CompanyForm>::new(EditMode::Create);
    create.mount(&mut state.companies).await;
    create.form_mut().set("orgName", "Acme")?;
    create.form_mut().set("orgLogo", "https://cdn.test/acme.png")?;
    create.form_mut().set("orgType", "Government")?;
    create.submit(&mut state.companies).await?;
    assert_eq!(create.navigate_to(), Some(&Route::List(ResourceKind::Company)));

    let stored = portal.records("companies");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["orgName"], "Acme");
    assert_eq!(stored[0]["status"], "pending");
    let id = stored[0]["_id"].as_str().unwrap().to_string();

    let mut edit = EditView::<CompanyForm>::new(EditMode::Edit(id.clone()));
    edit.mount(&mut state.companies).await;
    assert_eq!(edit.form().org_name, "Acme");
    edit.form_mut().set("status", "approved")?;
    edit.submit(&mut state.companies).await?;
    assert_eq!(portal.records("companies")[0]["status"], "approved");

    let mut list = ListView::new();
    list.mount(&mut state.companies).await;
    let ListScreen::Table(table) = list.render(&state.companies) else {
        panic!("expected a table");
    };
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], id);

    let record = state.companies.find(&id).cloned().unwrap();
    list.request_delete(&record);
    list.confirm_delete(&mut state.companies).await?;
    assert!(portal.records("companies").is_empty());
    assert!(state.companies.items().is_empty());
    Ok(())
}

#[tokio::test]
async fn mutations_without_a_session_fail_locally() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let (mut state, _store) = portal.anonymous();

    let mut view = EditView::<NoticeForm>::new(EditMode::Create);
    view.form_mut().set("title", "Admit Card")?;
    assert!(view.submit(&mut state.notices).await.is_err());
    assert_eq!(state.notices.error(), Some("Not authorized, no session token"));
    assert!(portal.records("notices").is_empty());

    // Companies are only readable with a session
    assert!(state.companies.list().await.is_err());
    Ok(())
}

#[tokio::test]
async fn stale_tokens_get_the_server_rejection() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    portal.seed("notices", json!({ "_id": "N1", "title": "Admit Card" }));
    let store = Arc::new(MemorySessionStore::with_session(Session::new("stale", None)));
    let mut notices: NoticeContainer = RootState::connect(portal.client(store)).notices;

    let notice = notices.get_by_id("N1").await?.clone();
    let draft = NoticeForm::populate(&notice).to_draft(&EditMode::Edit("N1".into()))?;
    let err = notices.update("N1", &draft).await.unwrap_err();
    assert_eq!(err.reason(), "Not authorized to access this route");
    assert_eq!(notices.command(Operation::Update).failure(), Some("Not authorized to access this route"));
    Ok(())
}

#[tokio::test]
async fn missing_records_report_not_found() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    let mut state = portal.signed_in();

    let mut edit = EditView::<NoticeForm>::new(EditMode::Edit("ghost".into()));
    edit.mount(&mut state.notices).await;
    assert_eq!(state.notices.error(), Some("No record found with id ghost"));
    assert_eq!(edit.form(), &NoticeForm::default());
    Ok(())
}

#[tokio::test]
async fn job_ads_show_their_company_name() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    portal.seed("companies", json!({ "_id": "C1", "orgName": "Acme" }));
    portal.seed("jobs", json!({ "_id": "A1", "orgId": "C1", "jobAdTitle": "Officer Recruitment" }));
    portal.seed("jobs", json!({ "_id": "A2", "orgId": "C9", "jobAdTitle": "Clerk" }));
    let mut state = portal.signed_in();

    let mut list = ListView::<JobAd>::new();
    list.mount(&mut state.job_ads).await;
    let ListScreen::Table(table) = list.render(&state.job_ads) else {
        panic!("expected a table");
    };
    assert_eq!(table.rows[0][2], "Acme");
    assert_eq!(table.rows[1][2], "N/A");
    Ok(())
}

#[tokio::test]
async fn job_details_filter_by_ad() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    portal.seed("jobs", json!({ "_id": "A1", "jobAdTitle": "Officer Recruitment" }));
    portal.seed("jobdetails", json!({ "_id": "D1", "jobAdId": "A1", "jobTitle": "Officer" }));
    portal.seed("jobdetails", json!({ "_id": "D2", "jobAdId": "A2", "jobTitle": "Clerk" }));
    let mut state = portal.signed_in();

    let details: &mut ResourceContainer<JobDetail> = &mut state.job_details;
    assert_eq!(details.list_for_ad("A1").await?.len(), 1);
    assert_eq!(details.list_for_ad(JobDetail::ALL_ADS).await?.len(), 2);

    let mut list = ListView::<JobDetail>::new();
    list.mount_with_ads(&mut state.job_details, &mut state.job_ads).await;
    let ListScreen::Table(table) = list.render(&state.job_details) else {
        panic!("expected a table");
    };
    let parents: Vec<&str> = table.rows.iter().map(|r| r[2].as_str()).collect();
    assert!(parents.contains(&"Officer Recruitment"));
    assert!(parents.contains(&"N/A"));
    Ok(())
}

#[tokio::test]
async fn notices_list_without_a_session() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    portal.seed("notices", json!({ "_id": "N1", "title": "Admit Card" }));
    portal.seed("notices", json!({ "_id": "N1", "title": "Admit Card (dup)" }));
    let (mut state, _store) = portal.anonymous();

    let notices: Vec<Notice> = state.notices.list().await?.to_vec();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].id(), "N1");
    Ok(())
}

#[tokio::test]
async fn ids_cannot_reach_other_collections() -> Result<()> {
    let portal = FakePortal::spawn().await?;
    portal.seed("jobs", json!({ "_id": "A1", "jobAdTitle": "Officer Recruitment" }));
    portal.seed("notices", json!({ "_id": "N1", "title": "Admit Card" }));
    let mut state = portal.signed_in();

    let err = state.companies.get_by_id("../jobs/A1").await.unwrap_err();
    assert_eq!(err.reason(), "No record found with id ../jobs/A1");

    let err = state.notices.delete("N1?x=1").await.unwrap_err();
    assert_eq!(err.reason(), "No record found with id N1?x=1");
    assert_eq!(portal.records("notices").len(), 1);

    assert!(state.notices.delete("..").await.is_err());
    assert_eq!(portal.records("notices").len(), 1);

    assert!(state.job_details.list_for_ad("../../jobs").await?.is_empty());
    Ok(())
}
