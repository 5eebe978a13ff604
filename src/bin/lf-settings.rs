use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lf_locations::{
    constants::{DEFAULT_SETTINGS_PATH, SETTINGS_PATH_ENV},
    Settings,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lf-settings", about = "Manage location finder settings")]
struct Args {
    #[arg(
        short = 's',
        long,
        env = SETTINGS_PATH_ENV,
        default_value = DEFAULT_SETTINGS_PATH,
        global = true,
        help = "Settings file to read or write"
    )]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[clap(name = "set", about = "Write the lookup service settings")]
    Set {
        #[arg(short = 'u', long, help = "Location lookup endpoint")]
        api_url: String,
        #[arg(short = 'n', long, help = "Name of the header carrying the credential")]
        header_name: String,
        #[arg(short = 'v', long, help = "Credential sent in that header")]
        header_value: String,
    },

    #[clap(name = "show", about = "Print the current settings with the credential masked")]
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Set {
            api_url,
            header_name,
            header_value,
        } => {
            let settings = Settings::try_new(&api_url, &header_name, &header_value)?;
            settings
                .save(&args.settings)
                .await
                .with_context(|| format!("unable to save {}", args.settings.display()))?;
            tracing::info!(path = %args.settings.display(), "settings saved");
            println!("The configuration options have been saved.");
        }
        Command::Show => {
            let settings = Settings::load(&args.settings)
                .await
                .with_context(|| format!("unable to load {}", args.settings.display()))?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "api_url": settings.api_url,
                    "header_name": settings.header_name,
                    "header_value": settings.masked_header_value(),
                }))?
            );
        }
    }
    Ok(())
}
