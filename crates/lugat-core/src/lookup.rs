use lugat_types::{Entry, LookupOutcome};

/// Current lookup outcome as seen by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    Loading,
    NotFound { reason: String },
    Found(Vec<Entry>),
    Failed(String),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }

    pub fn entries(&self) -> &[Entry] {
        match self {
            LookupState::Found(entries) => entries,
            _ => &[],
        }
    }

    /// Pronunciation clip of the first entry, if any
    pub fn audio_clip(&self) -> Option<&str> {
        self.entries().first().and_then(Entry::audio_clip)
    }
}

impl From<Result<LookupOutcome, String>> for LookupState {
    fn from(result: Result<LookupOutcome, String>) -> Self {
        match result {
            Ok(LookupOutcome::Found(entries)) => LookupState::Found(entries),
            Ok(LookupOutcome::NotFound(notice)) => LookupState::NotFound {
                reason: notice.title,
            },
            Err(message) => LookupState::Failed(message),
        }
    }
}
