//! Core, synchronous layer of maplink.
//!
//! Holds the provider registry, the deep-link formatter and the request
//! validator. Nothing in this crate performs I/O except configuration
//! loading; availability probing and user prompts live in
//! `maplink-launcher`.

pub mod app_config;
pub mod apps;
pub mod config;
pub mod error;
pub mod format;
pub mod link_config;
pub mod provider;
pub mod request;

pub use app_config::AppConfig;
pub use apps::{load_installed_apps, InstalledAppsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, InvalidProviderError, ValidationError};
pub use format::format_url;
pub use link_config::{LinkConfig, Platform, UrlCompat};
pub use provider::{ProviderDescriptor, ProviderId, ProviderRegistry};
pub use request::{
    validate, Coordinate, LocationRequest, DEFAULT_CANCEL_TEXT, DEFAULT_DIALOG_MESSAGE,
    DEFAULT_DIALOG_TITLE,
};
