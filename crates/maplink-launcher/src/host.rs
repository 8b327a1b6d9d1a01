//! Capabilities the host environment supplies.

use async_trait::async_trait;

use crate::error::HostError;

/// URL dispatch on the host: checking whether a scheme has a handler and
/// handing a URL over to it.
#[async_trait]
pub trait UrlHandler: Send + Sync {
    /// Whether some installed application can open `url`.
    async fn can_handle_url(&self, url: &str) -> Result<bool, HostError>;

    async fn launch_url(&self, url: &str) -> Result<(), HostError>;
}

/// A single-choice question shown to the user.
///
/// `options` never contains the cancel entry; prompts add `cancel_label`
/// themselves in whatever position their UI expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRequest {
    pub title: String,
    pub message: String,
    pub options: Vec<String>,
    pub cancel_label: String,
}

#[async_trait]
pub trait ChoicePrompt: Send + Sync {
    /// Present `request` and wait for the user.
    ///
    /// Returns the index of the picked entry in `request.options`, or `None`
    /// if the user cancelled or dismissed the prompt. There is no timeout.
    async fn choose(&self, request: &ChoiceRequest) -> Option<usize>;
}
