use thiserror::Error;

use super::fields::FieldError;
use super::guard::Route;
use crate::models::{Company, JobAd, Resource};
use crate::store::{CommandFailure, ResourceContainer};

/// Create or edit, decided by whether the route carries an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(String),
}

impl EditMode {
    pub fn from_route_id(id: Option<&str>) -> Self {
        match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => EditMode::Edit(id.to_string()),
            None => EditMode::Create,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            EditMode::Create => None,
            EditMode::Edit(id) => Some(id),
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, EditMode::Create)
    }
}

/// Text-first form state for one record type.
///
/// `Default` holds the values a fresh create form starts with.
pub trait ResourceForm: Default + Clone + std::fmt::Debug {
    type Record: Resource;

    /// Wire names of the editable fields, in form order
    const FIELDS: &'static [&'static str];

    /// Set one field from its text value, addressed by wire name
    fn set(&mut self, field: &str, value: &str) -> Result<(), FieldError>;

    /// Copy every field of a fetched record into the form
    fn populate(record: &Self::Record) -> Self;

    /// Validate and convert to the payload sent to the server
    fn to_draft(&self, mode: &EditMode) -> Result<<Self::Record as Resource>::Draft, FieldError>;

    /// Label and current value of the field picked from a parent list, if the form has one
    fn parent(&self) -> Option<(&'static str, &str)> {
        None
    }
}

/// One entry of a parent picklist: the id sent to the server and what the user sees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(#[from] FieldError),

    #[error("{0}")]
    Failed(#[from] CommandFailure),
}

pub struct EditView<F: ResourceForm> {
    mode: EditMode,
    form: F,
    initialized: Option<String>,
    validation: Option<String>,
    navigate_to: Option<Route>,
    options: Option<Vec<ParentOption>>,
}

impl<F: ResourceForm> EditView<F> {
    pub fn new(mode: EditMode) -> Self {
        Self {
            mode,
            form: F::default(),
            initialized: None,
            validation: None,
            navigate_to: None,
            options: None,
        }
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn validation(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    /// Where the page should go next, set once a submit succeeds
    pub fn navigate_to(&self) -> Option<&Route> {
        self.navigate_to.as_ref()
    }

    /// Parent picklist, `None` until a parent list has loaded
    pub fn options(&self) -> Option<&[ParentOption]> {
        self.options.as_deref()
    }

    pub fn title(&self) -> String {
        let verb = if self.mode.is_create() { "Create" } else { "Edit" };
        format!("{} {}", verb, <F::Record as Resource>::LABEL)
    }

    /// Reset the container and, in edit mode, fetch the record
    pub async fn mount(&mut self, container: &mut ResourceContainer<F::Record>) {
        container.reset();
        if let EditMode::Edit(id) = &self.mode {
            let _ = container.get_by_id(id).await;
        }
        self.sync(container);
    }

    /// Like `mount`, with the parent list loaded alongside the record.
    /// A parent list that fails to load leaves the picklist unset.
    pub async fn mount_with_parents<P: Resource>(
        &mut self,
        container: &mut ResourceContainer<F::Record>,
        parents: &mut ResourceContainer<P>,
        label: fn(&P) -> String,
    ) {
        container.reset();
        let fetch = async {
            if let EditMode::Edit(id) = &self.mode {
                let _ = container.get_by_id(id).await;
            }
        };
        let (_, loaded) = futures::join!(fetch, parents.list());
        if let Ok(list) = loaded {
            self.options = Some(
                list.iter()
                    .map(|p| ParentOption {
                        id: p.id().to_string(),
                        label: label(p),
                    })
                    .collect(),
            );
        }
        self.sync(container);
    }

    fn check_parent(&self) -> Result<(), FieldError> {
        let (Some(options), Some((field, id))) = (&self.options, self.form.parent()) else {
            return Ok(());
        };
        let id = id.trim();
        if options.iter().any(|o| o.id == id) {
            Ok(())
        } else {
            Err(FieldError::NotAnOption {
                field,
                value: id.to_string(),
            })
        }
    }

    /// Fill the form from the detail slot, once per record id.
    /// Returns whether the form was overwritten.
    pub fn sync(&mut self, container: &ResourceContainer<F::Record>) -> bool {
        let Some(record) = container.detail() else {
            return false;
        };
        if self.initialized.as_deref() == Some(record.id()) {
            return false;
        }
        self.form = F::populate(record);
        self.initialized = Some(record.id().to_string());
        true
    }

    pub async fn submit(&mut self, container: &mut ResourceContainer<F::Record>) -> Result<(), SubmitError> {
        self.validation = None;
        let draft = match self.form.to_draft(&self.mode).and_then(|draft| {
            self.check_parent()?;
            Ok(draft)
        }) {
            Ok(draft) => draft,
            Err(err) => {
                self.validation = Some(err.to_string());
                return Err(err.into());
            }
        };

        match &self.mode {
            EditMode::Create => {
                container.create(&draft).await?;
            }
            EditMode::Edit(id) => {
                container.update(id, &draft).await?;
            }
        }

        if container.success() {
            self.navigate_to = Some(Route::List(<F::Record as Resource>::KIND));
        }
        Ok(())
    }
}

impl EditView<super::forms::JobAdForm> {
    /// Edit page of a job ad with its "Select Company" list
    pub async fn mount_with_companies(
        &mut self,
        ads: &mut ResourceContainer<JobAd>,
        companies: &mut ResourceContainer<Company>,
    ) {
        self.mount_with_parents(ads, companies, |c: &Company| c.org_name.clone()).await;
    }
}

impl EditView<super::forms::JobDetailForm> {
    /// Edit page of a job detail with its "Select Parent Ad" list
    pub async fn mount_with_ads(
        &mut self,
        details: &mut ResourceContainer<crate::models::JobDetail>,
        ads: &mut ResourceContainer<JobAd>,
    ) {
        self.mount_with_parents(details, ads, |ad: &JobAd| ad.job_ad_title.clone()).await;
    }
}
