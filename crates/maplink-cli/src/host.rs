//! Desktop stand-in for the mobile URL dispatch facility.
//!
//! A desktop cannot ask the OS which navigation apps are installed, so the
//! answer comes from the installed-apps file; launching shells out to the
//! configured opener command.

use async_trait::async_trait;
use maplink_core::{InstalledAppsFile, ProviderRegistry};
use maplink_launcher::{HostError, UrlHandler};

#[derive(Debug, Clone)]
pub struct DesktopHost {
    handled_prefixes: Vec<&'static str>,
    open_command: String,
}

impl DesktopHost {
    pub fn new(
        registry: &ProviderRegistry,
        installed: &InstalledAppsFile,
        open_command: impl Into<String>,
    ) -> Self {
        let handled_prefixes = registry
            .all_ids()
            .filter(|id| installed.contains(*id))
            .map(|id| registry.prefix_for(id))
            .collect();

        Self {
            handled_prefixes,
            open_command: open_command.into(),
        }
    }

    fn handles(&self, url: &str) -> bool {
        self.handled_prefixes
            .iter()
            .any(|prefix| url.starts_with(prefix))
    }
}

#[async_trait]
impl UrlHandler for DesktopHost {
    async fn can_handle_url(&self, url: &str) -> Result<bool, HostError> {
        Ok(self.handles(url))
    }

    async fn launch_url(&self, url: &str) -> Result<(), HostError> {
        let status = tokio::process::Command::new(&self.open_command)
            .arg(url)
            .status()
            .await
            .map_err(|e| HostError::new(format!("failed to run {}: {e}", self.open_command)))?;

        if status.success() {
            Ok(())
        } else {
            Err(HostError::new(format!(
                "{} exited with {status}",
                self.open_command
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use maplink_core::{LinkConfig, Platform, ProviderId, UrlCompat};

    use super::*;

    fn host(platform: Platform, installed: Vec<ProviderId>, command: &str) -> DesktopHost {
        let registry = ProviderRegistry::new(LinkConfig::new(platform, UrlCompat::Preserve));
        DesktopHost::new(&registry, &InstalledAppsFile { installed }, command)
    }

    #[tokio::test]
    async fn probes_follow_installed_file() {
        let host = host(
            Platform::Android,
            vec![ProviderId::Waze, ProviderId::GoogleMaps],
            "true",
        );
        assert!(host.can_handle_url("waze://").await.unwrap());
        assert!(host.can_handle_url("https://maps.google.com/").await.unwrap());
        assert!(!host.can_handle_url("uber://").await.unwrap());
        assert!(!host.can_handle_url("comgooglemaps://").await.unwrap());
    }

    #[tokio::test]
    async fn full_links_match_their_prefix() {
        let host = host(Platform::Ios, vec![ProviderId::GoogleMaps], "true");
        assert!(host
            .can_handle_url("comgooglemaps://?api=1&ll=1,2&q=Location")
            .await
            .unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn launch_reports_command_failure() {
        let ok = host(Platform::Android, vec![], "true");
        assert!(ok.launch_url("waze://?ll=1,2&navigate=yes").await.is_ok());

        let failing = host(Platform::Android, vec![], "false");
        let err = failing.launch_url("waze://").await.unwrap_err();
        assert!(err.0.starts_with("false exited with"), "got: {err}");
    }

    #[tokio::test]
    async fn launch_reports_missing_command() {
        let host = host(Platform::Android, vec![], "maplink-no-such-opener");
        let err = host.launch_url("waze://").await.unwrap_err();
        assert!(err.0.contains("failed to run"), "got: {err}");
    }
}
