//! Asynchronous half of maplink: availability probing, choosing a provider
//! with the user, and handing the final deep link to the host.
//!
//! The host platform is reached only through the traits in [`host`] and
//! [`prompt`], so the same engine drives a mobile shell, a desktop CLI or a
//! test double.

pub mod arbiter;
pub mod error;
pub mod host;
pub mod linker;
pub mod prober;
pub mod prompt;

pub use arbiter::{available_providers, choose_provider, PromptText};
pub use error::{HostError, OpenError};
pub use host::{ChoicePrompt, ChoiceRequest, UrlHandler};
pub use linker::MapLinker;
pub use prober::{is_installed, is_installed_key};
pub use prompt::{
    ActionSheetHost, ActionSheetPrompt, DialogButton, DialogCallback, DialogHost, DialogPrompt,
    PlatformPrompt,
};
