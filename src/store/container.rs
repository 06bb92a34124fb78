use std::collections::BTreeMap;
use std::sync::Arc;

use super::command::{CommandFailure, CommandState, Outcome};
use crate::api::ResourceApi;
use crate::error::ClientError;
use crate::models::{position_of, JobDetail, Resource};
use crate::types::Operation;

/// Client-side cache of one resource collection.
///
/// Every command goes through the same three steps: mark the operation
/// pending, await the backend, then fold the result into the cache or record
/// the failure message. Failed commands never touch `items` or `detail`.
pub struct ResourceContainer<R: Resource> {
    api: Arc<dyn ResourceApi<R>>,
    items: Vec<R>,
    detail: Option<R>,
    loading: bool,
    error: Option<String>,
    success: bool,
    commands: BTreeMap<Operation, CommandState<Outcome>>,
}

impl<R: Resource> ResourceContainer<R> {
    pub fn new(api: Arc<dyn ResourceApi<R>>) -> Self {
        Self {
            api,
            items: Vec::new(),
            detail: None,
            loading: false,
            error: None,
            success: false,
            commands: BTreeMap::new(),
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn detail(&self) -> Option<&R> {
        self.detail.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// State of the last command issued for `op`
    pub fn command(&self, op: Operation) -> CommandState<Outcome> {
        self.commands.get(&op).cloned().unwrap_or_default()
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub async fn list(&mut self) -> Result<&[R], CommandFailure> {
        let path = R::list_path();
        self.list_from(&path).await
    }

    pub async fn get_by_id(&mut self, id: &str) -> Result<&R, CommandFailure> {
        self.begin(Operation::GetById);
        match self.api.get(id).await {
            Ok(record) => {
                self.finish(Operation::GetById, Outcome::Fetched(record.id().to_string()));
                Ok(&*self.detail.insert(record))
            }
            Err(err) => Err(self.fail(Operation::GetById, err)),
        }
    }

    /// Create a record. The returned record is upserted into the cached list.
    pub async fn create(&mut self, draft: &R::Draft) -> Result<&R, CommandFailure> {
        self.begin(Operation::Create);
        match self.api.create(draft).await {
            Ok(record) => {
                let id = record.id().to_string();
                tracing::info!("Created {} {}", R::NAME, id);
                let index = self.upsert(record);
                self.success = true;
                self.finish(Operation::Create, Outcome::Created(id));
                Ok(&self.items[index])
            }
            Err(err) => Err(self.fail(Operation::Create, err)),
        }
    }

    /// Update a record. Replaces the cached entry with the same id and
    /// refreshes `detail` with the server's version.
    pub async fn update(&mut self, id: &str, draft: &R::Draft) -> Result<&R, CommandFailure> {
        self.begin(Operation::Update);
        match self.api.update(id, draft).await {
            Ok(record) => {
                let id = record.id().to_string();
                tracing::info!("Updated {} {}", R::NAME, id);
                if let Some(index) = position_of(&self.items, &id) {
                    self.items[index] = record.clone();
                }
                self.success = true;
                self.finish(Operation::Update, Outcome::Updated(id));
                Ok(&*self.detail.insert(record))
            }
            Err(err) => Err(self.fail(Operation::Update, err)),
        }
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), CommandFailure> {
        self.begin(Operation::Delete);
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted {} {}", R::NAME, id);
                self.items.retain(|r| r.id() != id);
                if self.detail.as_ref().is_some_and(|d| d.id() == id) {
                    self.detail = None;
                }
                self.success = true;
                self.finish(Operation::Delete, Outcome::Deleted(id.to_string()));
                Ok(())
            }
            Err(err) => Err(self.fail(Operation::Delete, err)),
        }
    }

    /// Clear detail and status flags. The cached list is kept.
    pub fn reset(&mut self) {
        self.detail = None;
        self.loading = false;
        self.error = None;
        self.success = false;
        self.commands.clear();
    }

    async fn list_from(&mut self, path: &str) -> Result<&[R], CommandFailure> {
        self.begin(Operation::List);
        match self.api.list_at(path).await {
            Ok(records) => {
                self.items = dedupe(records);
                tracing::debug!("Listed {} {} records from {}", self.items.len(), R::NAME, path);
                self.finish(Operation::List, Outcome::Listed(self.items.len()));
                Ok(&self.items)
            }
            Err(err) => Err(self.fail(Operation::List, err)),
        }
    }

    fn upsert(&mut self, record: R) -> usize {
        match position_of(&self.items, record.id()) {
            Some(index) => {
                self.items[index] = record;
                index
            }
            None => {
                self.items.push(record);
                self.items.len() - 1
            }
        }
    }

    fn begin(&mut self, op: Operation) {
        self.loading = true;
        self.error = None;
        if !op.is_read() {
            self.success = false;
        }
        self.commands.insert(op, CommandState::Pending);
    }

    fn finish(&mut self, op: Operation, outcome: Outcome) {
        self.loading = false;
        self.commands.insert(op, CommandState::Succeeded(outcome));
    }

    fn fail(&mut self, op: Operation, err: ClientError) -> CommandFailure {
        tracing::warn!("{} {} failed: {}", R::NAME, op, err);
        let failure = CommandFailure::from(err);
        self.loading = false;
        self.error = Some(failure.reason().to_string());
        self.commands.insert(op, CommandState::Failed(failure.reason().to_string()));
        failure
    }
}

impl ResourceContainer<JobDetail> {
    /// Details belonging to one job ad; `JobDetail::ALL_ADS` lists every ad's details
    pub async fn list_for_ad(&mut self, ad_id: &str) -> Result<&[JobDetail], CommandFailure> {
        let path = JobDetail::for_ad_path(ad_id);
        self.list_from(&path).await
    }
}

/// Keep the first record for each id
fn dedupe<R: Resource>(records: Vec<R>) -> Vec<R> {
    let mut out: Vec<R> = Vec::with_capacity(records.len());
    for record in records {
        if position_of(&out, record.id()).is_none() {
            out.push(record);
        }
    }
    out
}
