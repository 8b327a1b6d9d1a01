//! Choosing a provider when the caller did not name one.

use futures::future::join_all;
use maplink_core::{
    ProviderId, ProviderRegistry, DEFAULT_CANCEL_TEXT, DEFAULT_DIALOG_MESSAGE,
    DEFAULT_DIALOG_TITLE,
};

use crate::host::{ChoicePrompt, ChoiceRequest, UrlHandler};
use crate::prober::is_installed;

/// Text shown in the choice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptText<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub cancel: &'a str,
}

impl Default for PromptText<'_> {
    fn default() -> Self {
        Self {
            title: DEFAULT_DIALOG_TITLE,
            message: DEFAULT_DIALOG_MESSAGE,
            cancel: DEFAULT_CANCEL_TEXT,
        }
    }
}

/// Probe providers and return the installed ones in registry order.
///
/// When `allowed` is non-empty only those providers are probed. Probes run
/// concurrently; outcomes are independent so the result does not depend on
/// completion order.
pub async fn available_providers<H>(
    registry: &ProviderRegistry,
    host: &H,
    allowed: &[ProviderId],
) -> Vec<ProviderId>
where
    H: UrlHandler + ?Sized,
{
    let candidates: Vec<ProviderId> = registry
        .all_ids()
        .filter(|id| allowed.is_empty() || allowed.contains(id))
        .collect();

    let probes = candidates.iter().map(move |&id| async move {
        is_installed(registry, host, id).await.then_some(id)
    });

    join_all(probes).await.into_iter().flatten().collect()
}

/// Resolve which provider to use.
///
/// With zero or one installed provider the answer is immediate and no
/// prompt is shown. Otherwise the user picks from the installed providers'
/// titles; cancelling or dismissing yields `None`.
pub async fn choose_provider<H, P>(
    registry: &ProviderRegistry,
    host: &H,
    prompt: &P,
    text: PromptText<'_>,
    allowed: &[ProviderId],
) -> Option<ProviderId>
where
    H: UrlHandler + ?Sized,
    P: ChoicePrompt + ?Sized,
{
    let available = available_providers(registry, host, allowed).await;

    match available.as_slice() {
        [] => {
            tracing::debug!("no navigation apps available");
            return None;
        }
        [only] => {
            tracing::debug!(app = %only, "single navigation app available, skipping prompt");
            return Some(*only);
        }
        _ => {}
    }

    let request = ChoiceRequest {
        title: text.title.to_string(),
        message: text.message.to_string(),
        options: available
            .iter()
            .map(|&id| registry.title_for(id).to_string())
            .collect(),
        cancel_label: text.cancel.to_string(),
    };

    let picked = prompt
        .choose(&request)
        .await
        .and_then(|index| available.get(index).copied());

    match picked {
        Some(app) => tracing::debug!(app = %app, "user picked navigation app"),
        None => tracing::debug!("navigation app choice cancelled"),
    }
    picked
}
