use crate::prefs::{FontPreference, Theme};

/// Everything the window needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub theme: Theme,
    pub font: FontPreference,
    pub placeholder: String,
    pub body: Body,
}

impl Screen {
    pub fn font_family(&self) -> &'static str {
        self.font.family()
    }

    pub fn theme_toggle_label(&self) -> &'static str {
        self.theme.toggle_label()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Loading { text: String },
    Entries(Vec<EntryView>),
    NotFound(Notice),
    Failed(Notice),
}

impl Body {
    pub fn kind(&self) -> &'static str {
        match self {
            Body::Loading { .. } => "loading",
            Body::Entries(_) => "entries",
            Body::NotFound(_) => "not-found",
            Body::Failed(_) => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub word: String,
    pub phonetic: Option<String>,
    pub audio: Option<AudioControl>,
    pub meanings: Vec<MeaningView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeaningView {
    pub part_of_speech: String,
    pub definitions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioControl {
    pub source: String,
    pub icon: PlaybackIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackIcon {
    Play,
    Pause,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub glyph: String,
    pub heading: String,
    pub message: String,
}
