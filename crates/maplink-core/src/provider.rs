//! Registry of supported navigation providers.
//!
//! The set of providers is closed: every [`ProviderId`] has exactly one
//! [`ProviderDescriptor`], resolved once when the registry is built from a
//! [`LinkConfig`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidProviderError;
use crate::link_config::{LinkConfig, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderId {
    AppleMaps,
    GoogleMaps,
    Citymapper,
    Uber,
    Lyft,
    Transit,
    Waze,
    Yandex,
    Moovit,
    Navigon,
}

impl ProviderId {
    /// Every provider, in registry order. Prompt options follow this order.
    pub const ALL: [ProviderId; 10] = [
        ProviderId::AppleMaps,
        ProviderId::GoogleMaps,
        ProviderId::Citymapper,
        ProviderId::Uber,
        ProviderId::Lyft,
        ProviderId::Transit,
        ProviderId::Waze,
        ProviderId::Yandex,
        ProviderId::Moovit,
        ProviderId::Navigon,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::AppleMaps => "apple-maps",
            ProviderId::GoogleMaps => "google-maps",
            ProviderId::Citymapper => "citymapper",
            ProviderId::Uber => "uber",
            ProviderId::Lyft => "lyft",
            ProviderId::Transit => "transit",
            ProviderId::Waze => "waze",
            ProviderId::Yandex => "yandex",
            ProviderId::Moovit => "moovit",
            ProviderId::Navigon => "navigon",
        }
    }

    /// Comma-separated list of every provider key, used in error messages.
    #[must_use]
    pub fn supported_keys() -> String {
        Self::ALL
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn prefix(self, platform: Platform) -> &'static str {
        match (self, platform) {
            (ProviderId::AppleMaps, Platform::Ios) => "http://maps.apple.com/",
            (ProviderId::AppleMaps, Platform::Android) => "applemaps://",
            (ProviderId::GoogleMaps, Platform::Ios) => "comgooglemaps://",
            (ProviderId::GoogleMaps, Platform::Android) => "https://maps.google.com/",
            (ProviderId::Citymapper, _) => "citymapper://",
            (ProviderId::Uber, _) => "uber://",
            (ProviderId::Lyft, _) => "lyft://",
            (ProviderId::Transit, _) => "transit://",
            (ProviderId::Waze, _) => "waze://",
            (ProviderId::Yandex, _) => "yandexnavi://",
            (ProviderId::Moovit, _) => "moovit://",
            (ProviderId::Navigon, _) => "navigon://",
        }
    }

    fn title(self) -> &'static str {
        match self {
            ProviderId::AppleMaps => "Apple Maps",
            ProviderId::GoogleMaps => "Google Maps",
            ProviderId::Citymapper => "Citymapper",
            ProviderId::Uber => "Uber",
            ProviderId::Lyft => "Lyft",
            ProviderId::Transit => "The Transit App",
            ProviderId::Waze => "Waze",
            ProviderId::Yandex => "Yandex.Navi",
            ProviderId::Moovit => "Moovit",
            ProviderId::Navigon => "Navigon",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = InvalidProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| InvalidProviderError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub id: ProviderId,
    pub url_prefix: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    config: LinkConfig,
    descriptors: Vec<ProviderDescriptor>,
}

impl ProviderRegistry {
    /// Build the registry, resolving platform-dependent prefixes once.
    #[must_use]
    pub fn new(config: LinkConfig) -> Self {
        let descriptors = ProviderId::ALL
            .into_iter()
            .map(|id| ProviderDescriptor {
                id,
                url_prefix: id.prefix(config.platform),
                title: id.title(),
            })
            .collect();

        Self {
            config,
            descriptors,
        }
    }

    #[must_use]
    pub fn config(&self) -> LinkConfig {
        self.config
    }

    #[must_use]
    pub fn descriptor(&self, id: ProviderId) -> &ProviderDescriptor {
        // Descriptors are built from `ProviderId::ALL`, whose order matches
        // the enum declaration order.
        &self.descriptors[id as usize]
    }

    #[must_use]
    pub fn prefix_for(&self, id: ProviderId) -> &'static str {
        self.descriptor(id).url_prefix
    }

    #[must_use]
    pub fn title_for(&self, id: ProviderId) -> &'static str {
        self.descriptor(id).title
    }

    /// All provider ids in registry order.
    pub fn all_ids(&self) -> impl Iterator<Item = ProviderId> + '_ {
        self.descriptors.iter().map(|d| d.id)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ProviderDescriptor> {
        self.descriptors.iter()
    }

    /// Look up a provider by its string key.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidProviderError`] if `key` is not a registered provider.
    pub fn lookup(&self, key: &str) -> Result<&ProviderDescriptor, InvalidProviderError> {
        let id = key.parse::<ProviderId>()?;
        Ok(self.descriptor(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link_config::UrlCompat;

    fn registry(platform: Platform) -> ProviderRegistry {
        ProviderRegistry::new(LinkConfig::new(platform, UrlCompat::Preserve))
    }

    #[test]
    fn every_provider_has_prefix_and_title() {
        for platform in [Platform::Ios, Platform::Android] {
            let reg = registry(platform);
            for id in reg.all_ids() {
                assert!(!reg.prefix_for(id).is_empty(), "{id} has empty prefix");
                assert!(!reg.title_for(id).is_empty(), "{id} has empty title");
            }
        }
    }

    #[test]
    fn registry_order_matches_all() {
        let reg = registry(Platform::Android);
        let ids: Vec<_> = reg.all_ids().collect();
        assert_eq!(ids, ProviderId::ALL.to_vec());
    }

    #[test]
    fn descriptor_indexing_matches_id() {
        let reg = registry(Platform::Ios);
        for id in ProviderId::ALL {
            assert_eq!(reg.descriptor(id).id, id);
        }
    }

    #[test]
    fn apple_and_google_prefixes_depend_on_platform() {
        let ios = registry(Platform::Ios);
        let android = registry(Platform::Android);

        assert_eq!(ios.prefix_for(ProviderId::AppleMaps), "http://maps.apple.com/");
        assert_eq!(android.prefix_for(ProviderId::AppleMaps), "applemaps://");
        assert_eq!(ios.prefix_for(ProviderId::GoogleMaps), "comgooglemaps://");
        assert_eq!(
            android.prefix_for(ProviderId::GoogleMaps),
            "https://maps.google.com/"
        );
    }

    #[test]
    fn other_prefixes_are_platform_independent() {
        let ios = registry(Platform::Ios);
        let android = registry(Platform::Android);
        for id in ProviderId::ALL
            .into_iter()
            .filter(|id| !matches!(id, ProviderId::AppleMaps | ProviderId::GoogleMaps))
        {
            assert_eq!(ios.prefix_for(id), android.prefix_for(id), "{id}");
        }
    }

    #[test]
    fn lookup_unknown_key_fails() {
        let reg = registry(Platform::Android);
        let err = reg.lookup("bogus-app").unwrap_err();
        assert_eq!(err, InvalidProviderError("bogus-app".to_string()));
    }

    #[test]
    fn lookup_known_key_returns_descriptor() {
        let reg = registry(Platform::Android);
        let desc = reg.lookup("yandex").unwrap();
        assert_eq!(desc.id, ProviderId::Yandex);
        assert_eq!(desc.url_prefix, "yandexnavi://");
        assert_eq!(desc.title, "Yandex.Navi");
    }

    #[test]
    fn provider_id_string_forms_agree_with_serde() {
        for id in ProviderId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
            assert_eq!(id.as_str().parse::<ProviderId>().unwrap(), id);
        }
    }
}
