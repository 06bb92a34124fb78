use std::collections::HashMap;

use super::table::Table;
use crate::models::{Company, JobAd, JobDetail, Resource};
use crate::store::{CommandFailure, ResourceContainer};

/// Titles of referenced records keyed by id, e.g. job ad titles for the job detail table
pub type References = HashMap<String, String>;

/// Records that render as a row of the list table
pub trait Tabular: Resource {
    const HEADERS: &'static [&'static str];

    fn cells(&self, refs: &References) -> Vec<String>;
}

/// What the list page shows right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScreen {
    Loading,
    Error(String),
    Table(Table),
}

/// List page state: the delete confirmation target and reference titles.
/// Records themselves stay in the container.
pub struct ListView<R: Tabular> {
    pending_delete: Option<R>,
    references: References,
}

impl<R: Tabular> Default for ListView<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Tabular> ListView<R> {
    pub fn new() -> Self {
        Self {
            pending_delete: None,
            references: References::new(),
        }
    }

    /// Failures end up in the container's error flag and show in `render`
    pub async fn mount(&mut self, container: &mut ResourceContainer<R>) {
        let _ = container.list().await;
    }

    pub fn set_references(&mut self, references: References) {
        self.references = references;
    }

    pub fn render(&self, container: &ResourceContainer<R>) -> ListScreen {
        if container.loading() {
            return ListScreen::Loading;
        }
        if let Some(error) = container.error() {
            return ListScreen::Error(error.to_string());
        }

        let mut headers = vec!["ID"];
        headers.extend_from_slice(R::HEADERS);
        let mut table = Table::new(&headers);
        for record in container.items() {
            let mut row = vec![record.id().to_string()];
            row.extend(record.cells(&self.references));
            table.push(row);
        }
        ListScreen::Table(table)
    }

    /// Open the confirmation for `record`
    pub fn request_delete(&mut self, record: &R) {
        self.pending_delete = Some(record.clone());
    }

    pub fn pending_delete(&self) -> Option<&R> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the confirmed record and refresh the list when that worked.
    /// The confirmation closes either way.
    pub async fn confirm_delete(&mut self, container: &mut ResourceContainer<R>) -> Result<(), CommandFailure> {
        let Some(target) = self.pending_delete.take() else {
            return Ok(());
        };
        container.delete(target.id()).await?;
        let _ = container.list().await;
        Ok(())
    }
}

/// Organization names by id, for job ads whose company came back unpopulated
pub fn company_names(companies: &[Company]) -> References {
    companies.iter().map(|c| (c.id.clone(), c.org_name.clone())).collect()
}

/// Ad titles by id, for the parent ad column of the job detail list
pub fn ad_titles(ads: &[JobAd]) -> References {
    ads.iter().map(|ad| (ad.id.clone(), ad.job_ad_title.clone())).collect()
}

impl ListView<JobDetail> {
    /// Load details and the ads they belong to side by side
    pub async fn mount_with_ads(
        &mut self,
        details: &mut ResourceContainer<JobDetail>,
        ads: &mut ResourceContainer<JobAd>,
    ) {
        let (_, ads_loaded) = futures::join!(details.list(), ads.list());
        if let Ok(list) = ads_loaded {
            self.references = ad_titles(list);
        }
    }
}
