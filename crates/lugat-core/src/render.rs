use lugat_types::{AudioControl, Body, Entry, EntryView, MeaningView, Notice, Screen};

use crate::audio::AudioPlayer;
use crate::lookup::LookupState;
use crate::prefs::Preferences;

pub const LOADING_TEXT: &str = "Loading...";
pub const NOT_FOUND_GLYPH: &str = "☹";
pub const NOT_FOUND_MESSAGE: &str = "Sorry pal, we couldn't find definitions for the word you \
    were looking for. You can try the search again at later time or head to the web instead.";
pub const FAILED_GLYPH: &str = "⚠";
pub const FAILED_HEADING: &str = "Something went wrong";

/// Build the screen for the current state. Entries, meanings and
/// definitions keep the order the service returned them in.
pub fn render(
    lookup: &LookupState,
    prefs: &Preferences,
    audio: &AudioPlayer,
    placeholder: &str,
) -> Screen {
    let body = match lookup {
        LookupState::Loading => Body::Loading {
            text: LOADING_TEXT.to_string(),
        },
        LookupState::Found(entries) => Body::Entries(render_entries(entries, audio)),
        LookupState::NotFound { reason } => Body::NotFound(Notice {
            glyph: NOT_FOUND_GLYPH.to_string(),
            heading: reason.clone(),
            message: NOT_FOUND_MESSAGE.to_string(),
        }),
        LookupState::Failed(message) => Body::Failed(Notice {
            glyph: FAILED_GLYPH.to_string(),
            heading: FAILED_HEADING.to_string(),
            message: message.clone(),
        }),
    };

    Screen {
        theme: prefs.theme,
        font: prefs.font,
        placeholder: placeholder.to_string(),
        body,
    }
}

fn render_entries(entries: &[Entry], audio: &AudioPlayer) -> Vec<EntryView> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| EntryView {
            word: entry.word.clone(),
            phonetic: entry.phonetic.clone(),
            // The clip is derived from the first entry, so only it gets the control
            audio: (i == 0)
                .then(|| audio.source())
                .flatten()
                .map(|source| AudioControl {
                    source: source.to_string(),
                    icon: audio.icon(),
                }),
            meanings: entry
                .meanings
                .iter()
                .map(|meaning| MeaningView {
                    part_of_speech: meaning.part_of_speech.clone(),
                    definitions: meaning
                        .definitions
                        .iter()
                        .map(|d| d.definition.clone())
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
