//! Provider choice: no prompt for zero or one app, prompt otherwise.

mod common;

use common::{FakeHost, ScriptedPrompt};
use maplink_core::{LinkConfig, Platform, ProviderId, ProviderRegistry, UrlCompat};
use maplink_launcher::{available_providers, choose_provider, PromptText};

fn android() -> ProviderRegistry {
    ProviderRegistry::new(LinkConfig::new(Platform::Android, UrlCompat::Preserve))
}

#[tokio::test]
async fn available_providers_keep_registry_order() {
    let host = FakeHost::with_installed(&["waze://", "citymapper://", "applemaps://"]);
    let available = available_providers(&android(), &host, &[]).await;

    assert_eq!(
        available,
        vec![ProviderId::AppleMaps, ProviderId::Citymapper, ProviderId::Waze]
    );
    assert_eq!(host.probes().len(), ProviderId::ALL.len());
}

#[tokio::test]
async fn white_list_limits_probing() {
    let host = FakeHost::with_installed(&["waze://", "citymapper://", "uber://"]);
    let available =
        available_providers(&android(), &host, &[ProviderId::Uber, ProviderId::Waze]).await;

    assert_eq!(available, vec![ProviderId::Uber, ProviderId::Waze]);
    assert_eq!(host.probes(), vec!["uber://", "waze://"]);
}

#[tokio::test]
async fn nothing_installed_resolves_none_without_prompt() {
    let host = FakeHost::default();
    let prompt = ScriptedPrompt::answering(Some(0));

    let chosen = choose_provider(&android(), &host, &prompt, PromptText::default(), &[]).await;

    assert_eq!(chosen, None);
    assert!(prompt.shown().is_empty());
}

#[tokio::test]
async fn single_app_resolves_without_prompt() {
    let host = FakeHost::with_installed(&["transit://"]);
    let prompt = ScriptedPrompt::answering(None);

    let chosen = choose_provider(&android(), &host, &prompt, PromptText::default(), &[]).await;

    assert_eq!(chosen, Some(ProviderId::Transit));
    assert!(prompt.shown().is_empty());
}

#[tokio::test]
async fn failed_probe_counts_as_unavailable() {
    let host = FakeHost::with_installed(&["transit://", "waze://"]).failing_probe(&["waze://"]);
    let prompt = ScriptedPrompt::answering(None);

    let chosen = choose_provider(&android(), &host, &prompt, PromptText::default(), &[]).await;

    assert_eq!(chosen, Some(ProviderId::Transit));
    assert!(prompt.shown().is_empty());
}

#[tokio::test]
async fn prompt_lists_titles_in_order_and_maps_index() {
    let host = FakeHost::with_installed(&["waze://", "https://maps.google.com/", "moovit://"]);
    let prompt = ScriptedPrompt::answering(Some(2));
    let text = PromptText {
        title: "Directions",
        message: "Pick an app",
        cancel: "Never mind",
    };

    let chosen = choose_provider(&android(), &host, &prompt, text, &[]).await;

    assert_eq!(chosen, Some(ProviderId::Moovit));
    let shown = prompt.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Directions");
    assert_eq!(shown[0].message, "Pick an app");
    assert_eq!(shown[0].options, vec!["Google Maps", "Waze", "Moovit"]);
    assert_eq!(shown[0].cancel_label, "Never mind");
}

#[tokio::test]
async fn cancelled_prompt_resolves_none() {
    let host = FakeHost::with_installed(&["waze://", "uber://"]);
    let prompt = ScriptedPrompt::answering(None);

    let chosen = choose_provider(&android(), &host, &prompt, PromptText::default(), &[]).await;

    assert_eq!(chosen, None);
    assert_eq!(prompt.shown().len(), 1);
}

#[tokio::test]
async fn out_of_range_answer_resolves_none() {
    let host = FakeHost::with_installed(&["waze://", "uber://"]);
    let prompt = ScriptedPrompt::answering(Some(7));

    let chosen = choose_provider(&android(), &host, &prompt, PromptText::default(), &[]).await;

    assert_eq!(chosen, None);
}
