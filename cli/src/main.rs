mod locations;
mod render;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use watclassroom::net::api::DEFAULT_BACKEND_URL;
use watclassroom::net::types::ApiError;
use watclassroom::{ApiConfig, AvailabilityController, BuildingOption, FetchError, HttpBuildingApi, TransitionError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("backend client init failed: {0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Transition(#[from] TransitionError),
    #[error("{}", .0.user_message())]
    Fetch(FetchError),
    #[error("unknown building code `{0}`; run `watclassroom buildings` to list codes")]
    UnknownBuilding(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: std::io::Error },
}

#[derive(Parser, Debug)]
#[command(name = "watclassroom", about = "Find open classrooms near a campus building")]
struct Cli {
    #[arg(long, env = "WATCLASSROOM_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    #[arg(long, env = "WATCLASSROOM_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List buildings that can be searched from.
    Buildings {
        #[arg(long, help = "Case-insensitive substring over `CODE - Name` labels")]
        filter: Option<String>,
    },
    /// Show open rooms near a building.
    Rooms(RoomsArgs),
    /// Rebuild the server's building location file from Open Data.
    RefreshLocations {
        #[arg(long, env = "UWATERLOO_API_KEY", hide_env_values = true)]
        api_key: String,

        #[arg(long, default_value = "buildings.json")]
        out: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RoomsArgs {
    building_code: String,

    #[arg(long = "expand", value_name = "CODE", conflicts_with = "expand_all")]
    expand: Vec<String>,

    #[arg(long, default_value_t = false)]
    expand_all: bool,
}

type Controller = AvailabilityController<HttpBuildingApi>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let timeout = Duration::from_secs(cli.timeout_secs);

    match cli.command {
        Command::Buildings { filter } => run_buildings(&cli.backend_url, timeout, filter.as_deref()).await,
        Command::Rooms(args) => run_rooms(&cli.backend_url, timeout, args).await,
        Command::RefreshLocations { api_key, out } => run_refresh_locations(&api_key, timeout, out).await,
    }
}

async fn started_controller(backend_url: &str, timeout: Duration) -> Result<Controller, CliError> {
    let api = HttpBuildingApi::new(ApiConfig::new(backend_url).with_request_timeout(timeout))?;
    let mut controller = AvailabilityController::new(Arc::new(api));
    controller.on_startup().await?;
    Ok(controller)
}

async fn run_buildings(backend_url: &str, timeout: Duration, filter: Option<&str>) -> Result<(), CliError> {
    let controller = started_controller(backend_url, timeout).await?;
    if let Some(notice) = controller.notice() {
        return Err(CliError::Fetch(notice.clone()));
    }
    print!("{}", render::render_options(controller.options(), filter));
    Ok(())
}

async fn run_rooms(backend_url: &str, timeout: Duration, args: RoomsArgs) -> Result<(), CliError> {
    let mut controller = started_controller(backend_url, timeout).await?;
    if let Some(notice) = controller.notice() {
        print!("{}", render::render_view(controller.phase(), Some(notice)));
        return Err(CliError::Fetch(notice.clone()));
    }

    let code = option_code(controller.options(), &args.building_code)
        .ok_or_else(|| CliError::UnknownBuilding(args.building_code.clone()))?
        .to_owned();
    controller.on_select(&code)?;
    controller.on_submit().await;

    let toggles: Vec<String> = if args.expand_all {
        controller
            .availability()
            .map(|data| data.keys().cloned().collect())
            .unwrap_or_default()
    } else {
        args.expand
    };
    if controller.availability().is_some() {
        for code in &toggles {
            controller.on_toggle_building(code)?;
        }
    }

    print!("{}", render::render_view(controller.phase(), controller.notice()));
    match controller.notice() {
        Some(notice) => Err(CliError::Fetch(notice.clone())),
        None => Ok(()),
    }
}

/// Option code for user input, ignoring case and surrounding space.
fn option_code<'a>(options: &'a [BuildingOption], input: &str) -> Option<&'a str> {
    let input = input.trim();
    options
        .iter()
        .find(|option| option.code.eq_ignore_ascii_case(input))
        .map(|option| option.code.as_str())
}

async fn run_refresh_locations(api_key: &str, timeout: Duration, out: PathBuf) -> Result<(), CliError> {
    let body = locations::fetch_locations(api_key, timeout).await?;
    let buildings = locations::parse_locations(&body)?;
    let json = serde_json::to_string_pretty(&buildings)?;
    tokio::fs::write(&out, json)
        .await
        .map_err(|source| CliError::Write { path: out.display().to_string(), source })?;
    println!("saved {} buildings to {}", buildings.len(), out.display());
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
