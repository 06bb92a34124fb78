use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_empty_collection, output_success, output_table};
use crate::cli::Console;
use crate::views::composer::PickItem;
use crate::views::{Composer, Route, Table};

#[derive(Subcommand)]
pub enum NotifyCommands {
    #[command(about = "List the content a notification can point at")]
    List,

    #[command(about = "Send a push notification about one item")]
    Send {
        #[arg(help = "Item to announce as kind:id, e.g. jobAd:A1 (see `notify list`)")]
        item: String,
        #[arg(long, help = "Override the category title")]
        title: Option<String>,
        #[arg(long, help = "Override the body (defaults to the item title)")]
        body: Option<String>,
    },
}

pub async fn handle(cmd: NotifyCommands, console: &mut Console) -> anyhow::Result<()> {
    console.require(Route::Notifications)?;

    let output_format = console.output_format.clone();
    let container = &mut console.state.notifications;
    let mut composer = Composer::new();
    composer.mount(container).await;
    if let Some(error) = container.error() {
        anyhow::bail!(error.to_string());
    }

    match cmd {
        NotifyCommands::List => {
            let items = Composer::picklist(container.content());
            if items.is_empty() {
                return output_empty_collection(&output_format, "items", "Nothing to notify about");
            }
            output_table(&output_format, "items", &rows(&items), &table(&items))
        }
        NotifyCommands::Send { item, title, body } => {
            composer.select(&item, container.content())?;
            if let Some(title) = title {
                composer.title = title;
            }
            if let Some(body) = body {
                composer.body = body;
            }
            let payload = composer.payload()?;
            let message = composer.submit(container).await?;
            output_success(&output_format, &message, Some(json!({ "notification": payload })))
        }
    }
}

fn table(items: &[PickItem]) -> Table {
    let mut table = Table::new(&["GROUP", "ITEM", "TITLE"]);
    for item in items {
        table.push(vec![item.group.to_string(), item.key.clone(), item.label.clone()]);
    }
    table
}

fn rows(items: &[PickItem]) -> Vec<serde_json::Value> {
    items
        .iter()
        .map(|item| json!({ "group": item.group, "item": item.key, "title": item.label }))
        .collect()
}
