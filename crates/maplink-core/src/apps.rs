//! Installed-apps file used by hosts that cannot query the OS for URL
//! scheme handlers.
//!
//! ```yaml
//! installed:
//!   - google-maps
//!   - waze
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::provider::ProviderId;
use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstalledAppsFile {
    #[serde(default)]
    pub installed: Vec<ProviderId>,
}

impl InstalledAppsFile {
    #[must_use]
    pub fn contains(&self, id: ProviderId) -> bool {
        self.installed.contains(&id)
    }
}

/// Load and validate the installed-apps list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or lists an app
/// more than once. Unknown app keys fail at parse time.
pub fn load_installed_apps(path: &Path) -> Result<InstalledAppsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AppsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_installed_apps(&content)
}

fn parse_installed_apps(content: &str) -> Result<InstalledAppsFile, ConfigError> {
    let apps: InstalledAppsFile = serde_yaml::from_str(content)?;
    validate_installed_apps(&apps)?;
    Ok(apps)
}

fn validate_installed_apps(apps: &InstalledAppsFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in &apps.installed {
        if !seen.insert(*id) {
            return Err(ConfigError::Validation(format!(
                "duplicate installed app: '{id}'"
            )));
        }
    }
    Ok(())
}
