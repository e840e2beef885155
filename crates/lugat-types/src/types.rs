use crate::entry::LookupOutcome;
use crate::prefs::FontPreference;
use crate::view::Screen;

/// Identifies one issued lookup; newer lookups get larger values
pub type Generation = u64;

/// Identifies one loaded pronunciation clip
pub type ClipId = u64;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    LookupFinished {
        generation: Generation,
        result: Result<LookupOutcome, String>,
    },
    PlaybackEnded {
        clip: ClipId,
    },
    PlaybackFailed {
        clip: ClipId,
        message: String,
    },
    Render(Screen),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SearchEdited(String),
    SearchSubmitted(String),
    ToggleTheme,
    SelectFont(FontPreference),
    TogglePlayback,
    Close,
}

/// Instruction for the audio output
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    Play { clip: ClipId, url: String },
    Pause,
    Resume,
    Stop,
}
