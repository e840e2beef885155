use std::sync::Arc;

use anyhow::Context;
use kanal::{AsyncReceiver, AsyncSender};
use lugat_client::{DictionaryClient, DictionaryService};
use lugat_config::Config;
use lugat_io::AudioOutput;
use lugat_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64), // Rendered screens
            ui_to_app: kanal::bounded_async(64), // UI interactions, lookup and playback reports
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    config: Config,
    service: Arc<dyn DictionaryService>,
    audio: Option<AudioOutput>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client =
            DictionaryClient::new(config.api.clone()).context("Failed to build HTTP client")?;
        Ok(Self::with_service(config, Arc::new(client)))
    }

    pub fn with_service(config: Config, service: Arc<dyn DictionaryService>) -> Self {
        let channels = ChannelSet::new();

        let audio = if config.audio.enabled {
            match AudioOutput::spawn(config.audio.clamped_volume(), channels.ui_to_app.0.clone()) {
                Ok(audio) => Some(audio),
                Err(e) => {
                    tracing::error!("Failed to start audio thread: {}", e);
                    None
                }
            }
        } else {
            tracing::warn!("Audio disabled, pronunciation clips will not be offered");
            None
        };

        Self {
            channels,
            config,
            service,
            audio,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Must be called inside a tokio runtime context
    pub fn spawn_tasks(&mut self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.config.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.0.clone(),
            self.service.clone(),
            self.audio.take(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    /// Channel ends the UI thread needs
    pub fn ui_channels(&self) -> (AsyncReceiver<AppEvent>, AsyncSender<AppEvent>) {
        (
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
        )
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
