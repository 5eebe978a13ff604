use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use lf_locations::{
    constants::{DEFAULT_REQUEST_TIMEOUT, SETTINGS_PATH_ENV, TIMEOUT_SECS_ENV},
    util::http_client,
    LocationFinder, OutputFormat, SearchCriteria, Settings,
};
use tracing_subscriber::EnvFilter;

/// Exit code for input that fails validation
const INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "locfinder", about = "Find locations open on weekends")]
struct CliArgs {
    #[command(subcommand)]
    pub subcommand: Command,

    #[command(flatten)]
    pub global_opts: GlobalOpts,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    #[arg(
        short = 's',
        long,
        env = SETTINGS_PATH_ENV,
        global = true,
        help = "Settings file. Without one, settings are read from LOCATION_FINDER_* variables."
    )]
    pub settings: Option<PathBuf>,

    #[arg(
        short = 't',
        long,
        env = TIMEOUT_SECS_ENV,
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs(),
        global = true,
        help = "Request timeout in seconds"
    )]
    pub timeout_secs: u64,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[clap(
        name = "find",
        about = "Look up locations open on weekends with an even street number"
    )]
    Find {
        #[command(flatten)]
        search: SearchOpts,

        #[arg(short = 'f', long, default_value = "yaml", help = "Output format (yaml or json)")]
        format: OutputFormat,
    },

    #[clap(name = "validate", about = "Check search input without contacting the service")]
    Validate {
        #[command(flatten)]
        search: SearchOpts,
    },
}

#[derive(Args, Debug)]
struct SearchOpts {
    #[arg(short = 'c', long, help = "Two letter country code, e.g. DE")]
    pub country_code: String,

    #[arg(short = 'y', long, help = "City name, e.g. Dresden")]
    pub city: String,

    #[arg(short = 'p', long, help = "Postal code, e.g. 01067")]
    pub postal_code: String,
}

impl SearchOpts {
    fn criteria(&self) -> SearchCriteria {
        SearchCriteria::new(&self.country_code, &self.city, &self.postal_code)
    }
}

fn spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Looking up locations...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    match args.subcommand {
        Command::Validate { search } => {
            let errors = search.criteria().validate();
            if errors.is_empty() {
                println!("Input is valid.");
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("{errors}");
                Ok(ExitCode::from(INVALID_INPUT))
            }
        }
        Command::Find { search, format } => find(&args.global_opts, &search, format).await,
    }
}

async fn find(
    global_opts: &GlobalOpts,
    search: &SearchOpts,
    format: OutputFormat,
) -> Result<ExitCode> {
    let criteria = search.criteria();
    if let Err(errors) = criteria.validate().into_result() {
        eprintln!("{errors}");
        return Ok(ExitCode::from(INVALID_INPUT));
    }

    let settings = Settings::load_or_env(global_opts.settings.as_deref())
        .await
        .context("unable to load location finder settings")?;
    let http = http_client(Duration::from_secs(global_opts.timeout_secs))
        .context("unable to build the HTTP client")?;
    let finder = LocationFinder::new(http, settings);

    let progress = spinner()?;
    let result = finder.find(&criteria).await;
    progress.finish_and_clear();

    match result {
        Err(errors) => {
            eprintln!("{errors}");
            Ok(ExitCode::from(INVALID_INPUT))
        }
        Ok(result) => {
            println!("{}", result.render(format)?);
            if result.is_upstream_error() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
