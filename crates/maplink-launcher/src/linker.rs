//! The public entry point: validate, choose, format, launch.

use maplink_core::{
    format_url, validate, LinkConfig, LocationRequest, ProviderId, ProviderRegistry,
};
use serde_json::Value;

use crate::arbiter::{choose_provider, PromptText};
use crate::error::{HostError, OpenError};
use crate::host::{ChoicePrompt, UrlHandler};
use crate::prober::is_installed_key;

pub struct MapLinker<H, P> {
    registry: ProviderRegistry,
    host: H,
    prompt: P,
}

impl<H, P> MapLinker<H, P>
where
    H: UrlHandler,
    P: ChoicePrompt,
{
    pub fn new(config: LinkConfig, host: H, prompt: P) -> Self {
        Self {
            registry: ProviderRegistry::new(config),
            host,
            prompt,
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether the provider named by `app` is installed. Never fails.
    pub async fn is_provider_installed(&self, app: &str) -> bool {
        is_installed_key(&self.registry, &self.host, app).await
    }

    /// Ask the user to pick among the installed providers.
    pub async fn prompt_provider_choice(
        &self,
        title: Option<&str>,
        message: Option<&str>,
    ) -> Option<ProviderId> {
        let defaults = PromptText::default();
        let text = PromptText {
            title: title.filter(|t| !t.is_empty()).unwrap_or(defaults.title),
            message: message.filter(|m| !m.is_empty()).unwrap_or(defaults.message),
            ..defaults
        };
        choose_provider(&self.registry, &self.host, &self.prompt, text, &[]).await
    }

    /// Validate a raw request and open it.
    ///
    /// Validation happens before any probe or prompt. Returns the launched
    /// URL, or `None` when no app was chosen or the chosen app has no link
    /// format.
    ///
    /// # Errors
    ///
    /// [`OpenError::Validation`] for a malformed request,
    /// [`OpenError::Launch`] if the host fails to launch the URL.
    pub async fn open_location(&self, raw: &Value) -> Result<Option<String>, OpenError> {
        let request = validate(raw)?;
        Ok(self.open(&request).await?)
    }

    /// Open an already validated request.
    ///
    /// # Errors
    ///
    /// Returns the host's [`HostError`] if launching fails.
    pub async fn open(&self, request: &LocationRequest) -> Result<Option<String>, HostError> {
        let Some(url) = self.resolve_url(request).await else {
            return Ok(None);
        };

        tracing::info!(url = %url, "launching navigation app");
        self.host.launch_url(&url).await?;
        Ok(Some(url))
    }

    /// Pick the provider (asking the user if needed) and format the link,
    /// without launching it.
    pub async fn resolve_url(&self, request: &LocationRequest) -> Option<String> {
        let app = match request.app {
            Some(app) => app,
            None => {
                let text = PromptText {
                    title: request.dialog_title(),
                    message: request.dialog_message(),
                    cancel: request.cancel_text(),
                };
                choose_provider(
                    &self.registry,
                    &self.host,
                    &self.prompt,
                    text,
                    &request.apps_white_list,
                )
                .await?
            }
        };

        let url = format_url(&self.registry, app, request);
        if url.is_none() {
            tracing::debug!(app = %app, "provider has no link format, nothing to open");
        }
        url
    }
}
