//! Subcommand handlers.

use anyhow::Context;
use clap::Args;
use maplink_core::{
    format_url, load_installed_apps, AppConfig, ConfigError, InstalledAppsFile, LocationRequest,
    ProviderId, ProviderRegistry,
};
use maplink_launcher::{MapLinker, PlatformPrompt};

use crate::host::DesktopHost;
use crate::terminal::Terminal;

type CliLinker = MapLinker<DesktopHost, PlatformPrompt<Terminal, Terminal>>;

#[derive(Debug, Args)]
pub struct OpenArgs {
    #[arg(long, allow_negative_numbers = true, required_unless_present = "request")]
    pub lat: Option<f64>,

    #[arg(long, allow_negative_numbers = true, required_unless_present = "request")]
    pub lng: Option<f64>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Target app; prompts for a choice when omitted
    #[arg(long)]
    pub app: Option<ProviderId>,

    /// Only offer these apps in the prompt (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<ProviderId>,

    /// Raw JSON location request, validated as is
    #[arg(long, conflicts_with_all = ["lat", "lng", "title", "address", "app", "only"])]
    pub request: Option<String>,

    /// Print the link instead of launching it
    #[arg(long)]
    pub dry_run: bool,
}

impl OpenArgs {
    fn location_request(&self) -> Option<LocationRequest> {
        let mut request = LocationRequest::new(self.lat?, self.lng?);
        if let Some(title) = &self.title {
            request = request.with_title(title.clone());
        }
        if let Some(address) = &self.address {
            request = request.with_address(address.clone());
        }
        if let Some(app) = self.app {
            request = request.with_app(app);
        }
        request.apps_white_list.clone_from(&self.only);
        Some(request)
    }
}

pub(crate) fn run_apps(config: &AppConfig) -> anyhow::Result<()> {
    let registry = ProviderRegistry::new(config.link_config());
    for descriptor in registry.descriptors() {
        println!(
            "{:<12} {:<16} {}",
            descriptor.id, descriptor.title, descriptor.url_prefix
        );
    }
    Ok(())
}

pub(crate) fn run_url(
    config: &AppConfig,
    app: ProviderId,
    lat: f64,
    lng: f64,
    title: Option<String>,
    address: Option<String>,
) -> anyhow::Result<()> {
    let registry = ProviderRegistry::new(config.link_config());

    let mut request = LocationRequest::new(lat, lng).with_app(app);
    if let Some(title) = title {
        request = request.with_title(title);
    }
    if let Some(address) = address {
        request = request.with_address(address);
    }

    let url = format_url(&registry, app, &request)
        .with_context(|| format!("'{app}' has no deep-link format"))?;
    println!("{url}");
    Ok(())
}

pub(crate) async fn run_installed(config: &AppConfig, app: Option<&str>) -> anyhow::Result<()> {
    let linker = build_linker(config)?;

    let keys: Vec<String> = match app {
        Some(key) => vec![key.to_string()],
        None => linker
            .registry()
            .all_ids()
            .map(|id| id.as_str().to_string())
            .collect(),
    };

    for key in keys {
        let installed = linker.is_provider_installed(&key).await;
        println!(
            "{key:<12} {}",
            if installed { "installed" } else { "not installed" }
        );
    }
    Ok(())
}

pub(crate) async fn run_open(config: &AppConfig, args: &OpenArgs) -> anyhow::Result<()> {
    let linker = build_linker(config)?;

    let request = match &args.request {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("--request is not valid JSON")?;
            maplink_core::validate(&value)?
        }
        None => args
            .location_request()
            .context("--lat and --lng are required without --request")?,
    };

    let outcome = if args.dry_run {
        linker.resolve_url(&request).await
    } else {
        linker.open(&request).await?
    };

    match outcome {
        Some(url) => println!("{url}"),
        None => tracing::info!("no navigation app selected, nothing opened"),
    }
    Ok(())
}

fn build_linker(config: &AppConfig) -> anyhow::Result<CliLinker> {
    let registry = ProviderRegistry::new(config.link_config());
    let installed = installed_apps(config)?;
    let host = DesktopHost::new(&registry, &installed, config.open_command.clone());
    let prompt = PlatformPrompt::for_platform(config.platform, Terminal, Terminal);
    Ok(MapLinker::new(config.link_config(), host, prompt))
}

/// A missing apps file means nothing is installed; any other problem is fatal.
fn installed_apps(config: &AppConfig) -> anyhow::Result<InstalledAppsFile> {
    match load_installed_apps(&config.apps_path) {
        Ok(apps) => Ok(apps),
        Err(ConfigError::AppsFileIo { path, source })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            tracing::warn!(
                path = %path,
                "installed apps file not found, treating every app as missing"
            );
            Ok(InstalledAppsFile::default())
        }
        Err(e) => Err(e.into()),
    }
}
