use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{confirm, output_empty_collection, output_record, output_success, output_table};
use crate::cli::{Console, OutputFormat};
use crate::models::{JobDetail, Resource};
use crate::store::{Outcome, ResourceContainer};
use crate::types::{Operation, ResourceKind};
use crate::views::forms::{
    CompanyForm, JobAdForm, JobDetailForm, NewspaperForm, NoticeForm, ResultForm, SolutionForm,
};
use crate::views::list::{ad_titles, company_names};
use crate::views::{EditMode, EditView, ListScreen, ListView, References, ResourceForm, Route, Tabular};

#[derive(Subcommand)]
pub enum ResourceCommands {
    #[command(about = "List records")]
    List {
        #[arg(long, help = "Job details only: restrict to one job ad id ('all' for every ad)")]
        ad: Option<String>,
    },

    #[command(about = "Show one record")]
    Show {
        #[arg(help = "Record id")]
        id: String,
    },

    #[command(about = "Create a record from field values")]
    Create {
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Form field to set, repeatable")]
        set: Vec<String>,
    },

    #[command(about = "Load a record, change some fields and save it")]
    Update {
        #[arg(help = "Record id")]
        id: String,
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Form field to change, repeatable")]
        set: Vec<String>,
    },

    #[command(about = "Delete a record")]
    Delete {
        #[arg(help = "Record id")]
        id: String,
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "List the form fields accepted by --set")]
    Fields,
}

impl ResourceCommands {
    /// Edit mode and field overrides of `create`/`update`, or the command back
    fn into_edit(self) -> Result<(EditMode, Vec<String>), Self> {
        match self {
            ResourceCommands::Create { set } => Ok((EditMode::Create, set)),
            ResourceCommands::Update { id, set } => Ok((EditMode::Edit(id), set)),
            other => Err(other),
        }
    }

    /// The console page this command stands in for
    fn route(&self, kind: ResourceKind) -> Option<Route> {
        match self {
            ResourceCommands::List { .. } | ResourceCommands::Delete { .. } => Some(Route::List(kind)),
            ResourceCommands::Show { id } | ResourceCommands::Update { id, .. } => {
                Some(Route::Edit(kind, id.clone()))
            }
            ResourceCommands::Create { .. } => Some(Route::Create(kind)),
            ResourceCommands::Fields => None,
        }
    }
}

pub async fn handle(kind: ResourceKind, cmd: ResourceCommands, console: &mut Console) -> anyhow::Result<()> {
    if let Some(route) = cmd.route(kind) {
        console.require(route)?;
    }
    if let ResourceCommands::List { ad: Some(_) } = &cmd {
        if kind != ResourceKind::JobDetail {
            anyhow::bail!("--ad only applies to job-detail");
        }
    }

    let output_format = console.output_format.clone();
    let state = &mut console.state;
    match kind {
        ResourceKind::Company => {
            dispatch::<CompanyForm>(cmd, &mut state.companies, References::new(), &output_format).await
        }
        ResourceKind::JobAd => match cmd.into_edit() {
            Ok((mode, set)) => {
                let mut view = EditView::<JobAdForm>::new(mode);
                view.mount_with_companies(&mut state.job_ads, &mut state.companies).await;
                save(view, &set, &mut state.job_ads, &output_format).await
            }
            Err(cmd) => {
                let refs = match &cmd {
                    ResourceCommands::List { .. } => match state.companies.list().await {
                        Ok(companies) => company_names(companies),
                        Err(_) => References::new(),
                    },
                    _ => References::new(),
                };
                dispatch::<JobAdForm>(cmd, &mut state.job_ads, refs, &output_format).await
            }
        },
        ResourceKind::JobDetail => match cmd.into_edit() {
            Ok((mode, set)) => {
                let mut view = EditView::<JobDetailForm>::new(mode);
                view.mount_with_ads(&mut state.job_details, &mut state.job_ads).await;
                save(view, &set, &mut state.job_details, &output_format).await
            }
            Err(ResourceCommands::List { ad }) => {
                let mut view = ListView::<JobDetail>::new();
                match ad {
                    None => view.mount_with_ads(&mut state.job_details, &mut state.job_ads).await,
                    Some(ad_id) => {
                        let (_, ads) = futures::join!(state.job_details.list_for_ad(&ad_id), state.job_ads.list());
                        if let Ok(ads) = ads {
                            view.set_references(ad_titles(ads));
                        }
                    }
                }
                show_list(&view, &state.job_details, &output_format)
            }
            Err(other) => dispatch::<JobDetailForm>(other, &mut state.job_details, References::new(), &output_format).await,
        },
        ResourceKind::Notice => {
            dispatch::<NoticeForm>(cmd, &mut state.notices, References::new(), &output_format).await
        }
        ResourceKind::Result => {
            dispatch::<ResultForm>(cmd, &mut state.results, References::new(), &output_format).await
        }
        ResourceKind::Solution => {
            dispatch::<SolutionForm>(cmd, &mut state.solutions, References::new(), &output_format).await
        }
        ResourceKind::Newspaper => {
            dispatch::<NewspaperForm>(cmd, &mut state.newspapers, References::new(), &output_format).await
        }
    }
}

async fn dispatch<F>(
    cmd: ResourceCommands,
    container: &mut ResourceContainer<F::Record>,
    refs: References,
    output_format: &OutputFormat,
) -> anyhow::Result<()>
where
    F: ResourceForm,
    F::Record: Tabular,
{
    match cmd {
        ResourceCommands::List { .. } => {
            let mut view = ListView::<F::Record>::new();
            view.set_references(refs);
            view.mount(container).await;
            show_list(&view, container, output_format)
        }
        ResourceCommands::Show { id } => {
            let record = container.get_by_id(&id).await?;
            output_record(output_format, <F::Record as Resource>::NAME, record)
        }
        ResourceCommands::Create { set } => {
            let mut view = EditView::<F>::new(EditMode::Create);
            view.mount(container).await;
            save(view, &set, container, output_format).await
        }
        ResourceCommands::Update { id, set } => {
            let mut view = EditView::<F>::new(EditMode::Edit(id));
            view.mount(container).await;
            save(view, &set, container, output_format).await
        }
        ResourceCommands::Delete { id, yes } => delete(&id, yes, container, output_format).await,
        ResourceCommands::Fields => {
            let fields = F::FIELDS;
            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&json!({ "fields": fields }))?);
                }
                OutputFormat::Text => {
                    for field in fields {
                        println!("{}", field);
                    }
                }
            }
            Ok(())
        }
    }
}

fn show_list<R: Tabular>(
    view: &ListView<R>,
    container: &ResourceContainer<R>,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    match view.render(container) {
        ListScreen::Error(error) => anyhow::bail!(error),
        ListScreen::Loading => anyhow::bail!("{} list did not finish loading", R::LABEL),
        ListScreen::Table(table) if table.is_empty() => {
            output_empty_collection(output_format, R::COLLECTION, &format!("No {} records found", R::NAME))
        }
        ListScreen::Table(table) => output_table(output_format, R::COLLECTION, container.items(), &table),
    }
}

/// Finish a mounted edit page: apply the `FIELD=VALUE` overrides, submit
async fn save<F: ResourceForm>(
    mut view: EditView<F>,
    assignments: &[String],
    container: &mut ResourceContainer<F::Record>,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    if let Some(error) = container.error() {
        anyhow::bail!(error.to_string());
    }

    for assignment in assignments {
        let (field, value) = split_assignment(assignment)?;
        view.form_mut().set(field, value)?;
    }
    view.submit(container).await?;

    let (op, verb) = if view.mode().is_create() {
        (Operation::Create, "created")
    } else {
        (Operation::Update, "updated")
    };
    let state = container.command(op);
    let saved = match state.value() {
        Some(Outcome::Created(id)) => container.find(id),
        Some(Outcome::Updated(_)) => container.detail(),
        _ => None,
    };
    let label = <F::Record as Resource>::LABEL;
    let name = <F::Record as Resource>::NAME;
    match saved {
        Some(record) => output_success(
            output_format,
            &format!("{} {} ({})", label, verb, record.id()),
            Some(json!({ name: record })),
        ),
        None => output_success(output_format, &format!("{} {}", label, verb), None),
    }
}

async fn delete<R: Tabular>(
    id: &str,
    yes: bool,
    container: &mut ResourceContainer<R>,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    let mut view = ListView::<R>::new();
    let record = container.get_by_id(id).await?.clone();
    view.request_delete(&record);

    if !yes && !confirm(&format!("Delete {} {}?", R::NAME, id))? {
        view.cancel_delete();
        return output_success(output_format, "Delete cancelled", None);
    }

    view.confirm_delete(container).await?;
    output_success(
        output_format,
        &format!("{} '{}' deleted successfully", R::LABEL, id),
        Some(json!({ "deleted": id })),
    )
}

fn split_assignment(assignment: &str) -> anyhow::Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value)),
        _ => anyhow::bail!("Expected FIELD=VALUE, got '{}'", assignment),
    }
}
