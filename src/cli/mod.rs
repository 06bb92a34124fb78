pub mod commands;
pub mod context;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub use context::Console;

use crate::config::AppConfig;
use crate::types::ResourceKind;

#[derive(Parser)]
#[command(name = "jpadmin")]
#[command(about = "Job portal admin console - manage portal content from the command line")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Login, registration, password reset and profile")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Hiring organizations")]
    Company {
        #[command(subcommand)]
        cmd: commands::resource::ResourceCommands,
    },

    #[command(about = "Job advertisements")]
    JobAd {
        #[command(subcommand)]
        cmd: commands::resource::ResourceCommands,
    },

    #[command(about = "Positions within a job advertisement")]
    JobDetail {
        #[command(subcommand)]
        cmd: commands::resource::ResourceCommands,
    },

    #[command(about = "Exam notices")]
    Notice {
        #[command(subcommand)]
        cmd: commands::resource::ResourceCommands,
    },

    #[command(about = "Exam results")]
    Result {
        #[command(subcommand)]
        cmd: commands::resource::ResourceCommands,
    },

    #[command(about = "Answer keys")]
    Solution {
        #[command(subcommand)]
        cmd: commands::resource::ResourceCommands,
    },

    #[command(about = "Weekly employment newspapers")]
    Newspaper {
        #[command(subcommand)]
        cmd: commands::resource::ResourceCommands,
    },

    #[command(about = "Push notifications about published content")]
    Notify {
        #[command(subcommand)]
        cmd: commands::notify::NotifyCommands,
    },

    #[command(about = "Show where a console path leads for the current session")]
    Route {
        #[arg(help = "Console path, e.g. /admin/companies or /company/C1/edit")]
        path: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    run_with(cli, crate::config::config()).await
}

/// Run against an explicit configuration instead of the process-wide one
pub async fn run_with(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let mut console = Console::open(config, output_format)?;

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, &mut console).await,
        Commands::Company { cmd } => commands::resource::handle(ResourceKind::Company, cmd, &mut console).await,
        Commands::JobAd { cmd } => commands::resource::handle(ResourceKind::JobAd, cmd, &mut console).await,
        Commands::JobDetail { cmd } => commands::resource::handle(ResourceKind::JobDetail, cmd, &mut console).await,
        Commands::Notice { cmd } => commands::resource::handle(ResourceKind::Notice, cmd, &mut console).await,
        Commands::Result { cmd } => commands::resource::handle(ResourceKind::Result, cmd, &mut console).await,
        Commands::Solution { cmd } => commands::resource::handle(ResourceKind::Solution, cmd, &mut console).await,
        Commands::Newspaper { cmd } => commands::resource::handle(ResourceKind::Newspaper, cmd, &mut console).await,
        Commands::Notify { cmd } => commands::notify::handle(cmd, &mut console).await,
        Commands::Route { path } => commands::route::handle(&path, &mut console),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resource_commands() {
        let cli = Cli::try_parse_from([
            "jpadmin", "--json", "company", "create", "--set", "orgName=Acme", "--set", "logo=https://x/l.png",
        ])
        .unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        match cli.command {
            Commands::Company {
                cmd: commands::resource::ResourceCommands::Create { set },
            } => assert_eq!(set, vec!["orgName=Acme", "logo=https://x/l.png"]),
            _ => panic!("expected company create"),
        }
    }

    #[test]
    fn job_detail_list_accepts_an_ad_filter() {
        let cli = Cli::try_parse_from(["jpadmin", "job-detail", "list", "--ad", "A1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::JobDetail {
                cmd: commands::resource::ResourceCommands::List { ad: Some(ref id) }
            } if id == "A1"
        ));
    }
}
