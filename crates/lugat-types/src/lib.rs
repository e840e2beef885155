pub mod entry;
pub mod prefs;
pub mod types;
pub mod view;

pub use entry::{
    Definition, Entry, LookupOutcome, Meaning, NOT_FOUND_TITLE, NotFoundNotice, Phonetic,
};
pub use prefs::{FontPreference, Theme};
pub use types::{AppEvent, AudioCommand, ClipId, Generation, UiEvent};
pub use view::{AudioControl, Body, EntryView, MeaningView, Notice, PlaybackIcon, Screen};
