//! Adapters from the two host prompt styles to [`ChoicePrompt`].
//!
//! iOS-style hosts show a bottom action sheet and report the pressed index,
//! with cancel as the last entry. Other hosts show a modal dialog with one
//! callback per button plus a dismiss callback.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use maplink_core::Platform;
use tokio::sync::oneshot;

use crate::host::{ChoicePrompt, ChoiceRequest};

#[async_trait]
pub trait ActionSheetHost: Send + Sync {
    /// Show a sheet with `options` (cancel included at `cancel_index`) and
    /// return the index the user pressed.
    async fn present_action_sheet(
        &self,
        title: &str,
        message: &str,
        options: &[String],
        cancel_index: usize,
    ) -> usize;
}

pub type DialogCallback = Box<dyn FnOnce() + Send + 'static>;

pub struct DialogButton {
    pub label: String,
    pub on_press: DialogCallback,
}

impl std::fmt::Debug for DialogButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogButton")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub trait DialogHost: Send + Sync {
    /// Show a modal dialog. The host calls at most one of the callbacks:
    /// a button's `on_press` or `on_dismiss` when the user taps outside.
    fn present_choice_dialog(
        &self,
        title: &str,
        message: &str,
        buttons: Vec<DialogButton>,
        on_dismiss: DialogCallback,
    );
}

#[derive(Debug, Clone)]
pub struct ActionSheetPrompt<H> {
    host: H,
}

impl<H> ActionSheetPrompt<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

#[async_trait]
impl<H: ActionSheetHost> ChoicePrompt for ActionSheetPrompt<H> {
    async fn choose(&self, request: &ChoiceRequest) -> Option<usize> {
        let cancel_index = request.options.len();
        let mut options = request.options.clone();
        options.push(request.cancel_label.clone());

        let pressed = self
            .host
            .present_action_sheet(&request.title, &request.message, &options, cancel_index)
            .await;

        (pressed < cancel_index).then_some(pressed)
    }
}

#[derive(Debug, Clone)]
pub struct DialogPrompt<H> {
    host: H,
}

impl<H> DialogPrompt<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

type Reply = Arc<Mutex<Option<oneshot::Sender<Option<usize>>>>>;

/// Build a callback that resolves the pending choice with `answer`.
/// Only the first callback to fire has any effect.
fn resolver(reply: &Reply, answer: Option<usize>) -> DialogCallback {
    let reply = Arc::clone(reply);
    Box::new(move || {
        let sender = reply.lock().ok().and_then(|mut slot| slot.take());
        if let Some(sender) = sender {
            let _ = sender.send(answer);
        }
    })
}

#[async_trait]
impl<H: DialogHost> ChoicePrompt for DialogPrompt<H> {
    async fn choose(&self, request: &ChoiceRequest) -> Option<usize> {
        let (tx, rx) = oneshot::channel();
        let reply: Reply = Arc::new(Mutex::new(Some(tx)));

        let mut buttons: Vec<DialogButton> = request
            .options
            .iter()
            .enumerate()
            .map(|(index, label)| DialogButton {
                label: label.clone(),
                on_press: resolver(&reply, Some(index)),
            })
            .collect();
        buttons.push(DialogButton {
            label: request.cancel_label.clone(),
            on_press: resolver(&reply, None),
        });

        self.host.present_choice_dialog(
            &request.title,
            &request.message,
            buttons,
            resolver(&reply, None),
        );
        drop(reply);

        // Every callback dropped without firing means the dialog went away.
        rx.await.ok().flatten()
    }
}

/// The prompt style matching a platform.
#[derive(Debug, Clone)]
pub enum PlatformPrompt<S, D> {
    Sheet(ActionSheetPrompt<S>),
    Dialog(DialogPrompt<D>),
}

impl<S, D> PlatformPrompt<S, D> {
    pub fn for_platform(platform: Platform, sheet: S, dialog: D) -> Self {
        match platform {
            Platform::Ios => PlatformPrompt::Sheet(ActionSheetPrompt::new(sheet)),
            Platform::Android => PlatformPrompt::Dialog(DialogPrompt::new(dialog)),
        }
    }
}

#[async_trait]
impl<S: ActionSheetHost, D: DialogHost> ChoicePrompt for PlatformPrompt<S, D> {
    async fn choose(&self, request: &ChoiceRequest) -> Option<usize> {
        match self {
            PlatformPrompt::Sheet(prompt) => prompt.choose(request).await,
            PlatformPrompt::Dialog(prompt) => prompt.choose(request).await,
        }
    }
}
