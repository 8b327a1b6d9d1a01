//! Availability probing.
//!
//! Probing is advisory: every failure is logged and reported as "not
//! installed", never returned to the caller.

use maplink_core::{ProviderId, ProviderRegistry};

use crate::host::UrlHandler;

/// Ask the host whether `app`'s URL scheme can be handled.
pub async fn is_installed<H>(registry: &ProviderRegistry, host: &H, app: ProviderId) -> bool
where
    H: UrlHandler + ?Sized,
{
    let prefix = registry.prefix_for(app);
    match host.can_handle_url(prefix).await {
        Ok(installed) => {
            tracing::debug!(app = %app, prefix, installed, "probed provider");
            installed
        }
        Err(e) => {
            tracing::warn!(app = %app, prefix, error = %e, "availability probe failed");
            false
        }
    }
}

/// Like [`is_installed`] but takes a provider key; unknown keys are simply
/// not installed.
pub async fn is_installed_key<H>(registry: &ProviderRegistry, host: &H, key: &str) -> bool
where
    H: UrlHandler + ?Sized,
{
    match registry.lookup(key) {
        Ok(descriptor) => is_installed(registry, host, descriptor.id).await,
        Err(e) => {
            tracing::debug!(error = %e, "probe requested for unregistered provider");
            false
        }
    }
}
