use lugat_config::audio::AudioConfig;
use lugat_config::ui::UiConfig;
use lugat_types::{AudioCommand, ClipId, Generation, LookupOutcome, Screen, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::audio::AudioPlayer;
use crate::fetch::{FetchCoordinator, LookupTicket};
use crate::lookup::LookupState;
use crate::prefs::Preferences;
use crate::render::render;
use crate::search::SearchController;

/// Side effects the owner of the view has to carry out
#[derive(Debug)]
pub enum Effect {
    Lookup(LookupTicket),
    Audio(AudioCommand),
}

/// Word lookup screen state. Owned by a single task; every change comes in
/// through one of the `&mut self` methods and is reported back as effects.
pub struct WordLookupView {
    search: SearchController,
    fetch: FetchCoordinator,
    lookup: LookupState,
    audio: AudioPlayer,
    prefs: Preferences,
    placeholder: String,
    audio_enabled: bool,
}

impl WordLookupView {
    pub fn new(ui: &UiConfig, audio: &AudioConfig, cancel: CancellationToken) -> Self {
        Self {
            search: SearchController::new(ui.default_term.clone()),
            fetch: FetchCoordinator::new(cancel),
            lookup: LookupState::Loading,
            audio: AudioPlayer::new(),
            prefs: Preferences::new(ui.dark, ui.font),
            placeholder: ui.placeholder.clone(),
            audio_enabled: audio.enabled,
        }
    }

    pub fn lookup(&self) -> &LookupState {
        &self.lookup
    }

    pub fn audio(&self) -> &AudioPlayer {
        &self.audio
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    /// Initial lookup for the default term
    pub fn mount(&mut self) -> Vec<Effect> {
        let term = self.search.committed().to_string();
        self.start_lookup(term)
    }

    pub fn handle_ui(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::SearchEdited(text) => {
                self.search.edit(text);
                vec![]
            }
            UiEvent::SearchSubmitted(text) => match self.search.submit(text) {
                Some(term) => self.start_lookup(term),
                None => vec![],
            },
            UiEvent::ToggleTheme => {
                self.prefs.toggle_theme();
                vec![]
            }
            UiEvent::SelectFont(font) => {
                self.prefs.select_font(font);
                vec![]
            }
            UiEvent::TogglePlayback => self.audio.toggle().map(Effect::Audio).into_iter().collect(),
            UiEvent::Close => vec![],
        }
    }

    fn start_lookup(&mut self, term: String) -> Vec<Effect> {
        tracing::info!("Looking up '{}'", term);
        self.lookup = LookupState::Loading;

        let mut effects = Vec::new();
        if let Some(stop) = self.audio.bind(None) {
            effects.push(Effect::Audio(stop));
        }
        effects.push(Effect::Lookup(self.fetch.begin(term)));
        effects
    }

    pub fn lookup_finished(
        &mut self,
        generation: Generation,
        result: Result<LookupOutcome, String>,
    ) -> Vec<Effect> {
        if !self.fetch.finish(generation) {
            return vec![];
        }

        self.lookup = result.into();
        match &self.lookup {
            LookupState::Found(entries) => tracing::info!("Found {} entries", entries.len()),
            LookupState::NotFound { reason } => tracing::info!("Not found: {}", reason),
            LookupState::Failed(message) => tracing::warn!("Lookup failed: {}", message),
            LookupState::Loading => {}
        }

        let clip = self.lookup.audio_clip().filter(|_| self.audio_enabled);
        self.audio.bind(clip).map(Effect::Audio).into_iter().collect()
    }

    pub fn playback_ended(&mut self, clip: ClipId) -> bool {
        self.audio.ended(clip)
    }

    pub fn playback_failed(&mut self, clip: ClipId) -> bool {
        self.audio.failed(clip)
    }

    pub fn screen(&self) -> Screen {
        render(&self.lookup, &self.prefs, &self.audio, &self.placeholder)
    }
}
