mod commands;
mod host;
mod terminal;

use clap::{Parser, Subcommand};
use maplink_core::{Platform, ProviderId, UrlCompat};
use tracing_subscriber::EnvFilter;

use crate::commands::OpenArgs;

#[derive(Debug, Parser)]
#[command(name = "maplink")]
#[command(about = "Open a location in an installed navigation app")]
struct Cli {
    /// Platform to build links for (overrides `MAPLINK_PLATFORM`)
    #[arg(long, global = true)]
    platform: Option<Platform>,

    /// Keep (`preserve`) or repair (`fixed`) the legacy uber/moovit query strings
    #[arg(long, global = true)]
    compat: Option<UrlCompat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List supported navigation apps with their URL prefixes
    Apps,
    /// Print the deep link for a location without opening it
    Url {
        /// Target app (e.g. waze, google-maps)
        #[arg(long)]
        app: ProviderId,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Report whether one or all navigation apps are installed
    Installed {
        /// App key to check; all apps when omitted
        app: Option<String>,
    },
    /// Open a location, asking which app to use when none is given
    Open(OpenArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = maplink_core::load_app_config()?;
    if let Some(platform) = cli.platform {
        config.platform = platform;
    }
    if let Some(compat) = cli.compat {
        config.url_compat = compat;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Apps => commands::run_apps(&config),
        Commands::Url {
            app,
            lat,
            lng,
            title,
            address,
        } => commands::run_url(&config, app, lat, lng, title, address),
        Commands::Installed { app } => commands::run_installed(&config, app.as_deref()).await,
        Commands::Open(args) => commands::run_open(&config, &args).await,
    }
}
