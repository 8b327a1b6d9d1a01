use std::path::PathBuf;

use crate::link_config::{LinkConfig, Platform, UrlCompat};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub platform: Platform,
    pub url_compat: UrlCompat,
    pub log_level: String,
    /// YAML file listing the apps the desktop host reports as installed.
    pub apps_path: PathBuf,
    /// External command that receives a deep link as its only argument.
    pub open_command: String,
}

impl AppConfig {
    #[must_use]
    pub fn link_config(&self) -> LinkConfig {
        LinkConfig::new(self.platform, self.url_compat)
    }
}
