//! Test doubles for the host capabilities.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use maplink_launcher::{ChoicePrompt, ChoiceRequest, HostError, UrlHandler};

#[derive(Debug, Default)]
struct HostState {
    probes: Vec<String>,
    launches: Vec<String>,
}

/// Host that reports a fixed set of URL prefixes as installed.
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    installed: HashSet<String>,
    failing: HashSet<String>,
    launch_error: Option<String>,
    state: Arc<Mutex<HostState>>,
}

impl FakeHost {
    pub fn with_installed(prefixes: &[&str]) -> Self {
        Self {
            installed: prefixes.iter().map(|p| (*p).to_string()).collect(),
            ..Self::default()
        }
    }

    /// Probes for these prefixes return an error instead of an answer.
    pub fn failing_probe(mut self, prefixes: &[&str]) -> Self {
        self.failing = prefixes.iter().map(|p| (*p).to_string()).collect();
        self
    }

    pub fn failing_launch(mut self, message: &str) -> Self {
        self.launch_error = Some(message.to_string());
        self
    }

    pub fn probes(&self) -> Vec<String> {
        self.state.lock().unwrap().probes.clone()
    }

    pub fn launches(&self) -> Vec<String> {
        self.state.lock().unwrap().launches.clone()
    }
}

#[async_trait]
impl UrlHandler for FakeHost {
    async fn can_handle_url(&self, url: &str) -> Result<bool, HostError> {
        self.state.lock().unwrap().probes.push(url.to_string());
        if self.failing.contains(url) {
            return Err(HostError::new(format!("probe exploded for {url}")));
        }
        Ok(self.installed.contains(url))
    }

    async fn launch_url(&self, url: &str) -> Result<(), HostError> {
        self.state.lock().unwrap().launches.push(url.to_string());
        match &self.launch_error {
            Some(message) => Err(HostError::new(message.clone())),
            None => Ok(()),
        }
    }
}

/// Prompt that always gives the same answer and records what it was shown.
#[derive(Debug, Clone)]
pub struct ScriptedPrompt {
    answer: Option<usize>,
    shown: Arc<Mutex<Vec<ChoiceRequest>>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: Option<usize>) -> Self {
        Self {
            answer,
            shown: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn shown(&self) -> Vec<ChoiceRequest> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChoicePrompt for ScriptedPrompt {
    async fn choose(&self, request: &ChoiceRequest) -> Option<usize> {
        self.shown.lock().unwrap().push(request.clone());
        self.answer
    }
}
