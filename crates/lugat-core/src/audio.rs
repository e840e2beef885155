use lugat_types::{AudioCommand, ClipId, PlaybackIcon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Playing/paused state of the single pronunciation clip.
///
/// Every emitted [`AudioCommand::Play`] carries a fresh clip id; end and
/// failure reports for older ids are ignored.
#[derive(Debug, Default)]
pub struct AudioPlayer {
    state: PlaybackState,
    source: Option<String>,
    clip: ClipId,
    loaded: bool,
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn clip(&self) -> ClipId {
        self.clip
    }

    pub fn icon(&self) -> PlaybackIcon {
        match self.state {
            PlaybackState::Playing => PlaybackIcon::Pause,
            PlaybackState::Paused => PlaybackIcon::Play,
        }
    }

    /// Rebind to a derived source. A changed source forces Paused and stops
    /// whatever was loaded.
    pub fn bind(&mut self, source: Option<&str>) -> Option<AudioCommand> {
        if self.source.as_deref() == source {
            return None;
        }

        let active = self.loaded || self.state == PlaybackState::Playing;
        self.source = source.map(str::to_owned);
        self.state = PlaybackState::Paused;
        self.loaded = false;
        self.clip += 1;

        active.then_some(AudioCommand::Stop)
    }

    /// User pressed the play/pause control
    pub fn toggle(&mut self) -> Option<AudioCommand> {
        let url = self.source.clone()?;

        let command = match self.state {
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                AudioCommand::Pause
            }
            PlaybackState::Paused if self.loaded => {
                self.state = PlaybackState::Playing;
                AudioCommand::Resume
            }
            PlaybackState::Paused => {
                self.clip += 1;
                self.loaded = true;
                self.state = PlaybackState::Playing;
                AudioCommand::Play {
                    clip: self.clip,
                    url,
                }
            }
        };
        Some(command)
    }

    /// Clip played to its end
    pub fn ended(&mut self, clip: ClipId) -> bool {
        self.unload(clip)
    }

    /// Output could not play the clip
    pub fn failed(&mut self, clip: ClipId) -> bool {
        self.unload(clip)
    }

    fn unload(&mut self, clip: ClipId) -> bool {
        if clip != self.clip {
            tracing::debug!("Ignoring report for stale clip {} (current {})", clip, self.clip);
            return false;
        }
        self.state = PlaybackState::Paused;
        self.loaded = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.org/keyboard-us.mp3";

    fn bound() -> AudioPlayer {
        let mut player = AudioPlayer::new();
        assert_eq!(player.bind(Some(URL)), None);
        player
    }

    #[test]
    fn starts_paused_with_play_icon() {
        let player = bound();
        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(player.icon(), PlaybackIcon::Play);
    }

    #[test]
    fn toggle_plays_then_pauses_then_resumes() {
        let mut player = bound();

        let Some(AudioCommand::Play { clip, url }) = player.toggle() else {
            panic!("expected play");
        };
        assert_eq!(url, URL);
        assert_eq!(clip, player.clip());
        assert_eq!(player.icon(), PlaybackIcon::Pause);

        assert_eq!(player.toggle(), Some(AudioCommand::Pause));
        assert_eq!(player.state(), PlaybackState::Paused);

        assert_eq!(player.toggle(), Some(AudioCommand::Resume));
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn natural_end_returns_to_paused_and_next_toggle_restarts() {
        let mut player = bound();
        player.toggle();
        let clip = player.clip();

        assert!(player.ended(clip));
        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(player.icon(), PlaybackIcon::Play);

        assert!(matches!(player.toggle(), Some(AudioCommand::Play { .. })));
        assert_ne!(player.clip(), clip);
    }

    #[test]
    fn stale_end_is_ignored() {
        let mut player = bound();
        player.toggle();
        let old = player.clip();
        player.ended(old);
        player.toggle();

        assert!(!player.ended(old));
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn source_change_while_playing_stops() {
        let mut player = bound();
        player.toggle();

        assert_eq!(player.bind(None), Some(AudioCommand::Stop));
        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(player.toggle(), None);
    }

    #[test]
    fn rebinding_unplayed_source_needs_no_stop() {
        let mut player = bound();
        assert_eq!(player.bind(Some("https://example.org/other.mp3")), None);
        assert_eq!(player.bind(Some("https://example.org/other.mp3")), None);
    }

    #[test]
    fn failure_resets_to_paused() {
        let mut player = bound();
        player.toggle();
        assert!(player.failed(player.clip()));
        assert_eq!(player.state(), PlaybackState::Paused);
    }
}
