use lugat_types::{AppEvent, Body, EntryView, PlaybackIcon, Screen, UiEvent};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel, Weak};

use crate::{EntryRow, LookupWindow, MeaningRow};

/// Apply one backend event. Returns false once the window should stop
/// listening.
pub fn handle_events(event: AppEvent, window_weak: &Weak<LookupWindow>) -> bool {
    let Some(window) = window_weak.upgrade() else {
        return false;
    };

    match event {
        AppEvent::Render(screen) => {
            tracing::debug!("[SLINT] Render {}", screen.body.kind());
            apply_screen(&window, screen);
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            window.hide().ok();
            slint::quit_event_loop().ok();
            return false;
        }
        _ => {}
    }

    true
}

pub fn apply_screen(window: &LookupWindow, screen: Screen) {
    window.set_dark(screen.theme.is_dark());
    window.set_font(screen.font_family().into());
    window.set_font_index(screen.font.index() as i32);
    window.set_theme_label(screen.theme_toggle_label().into());
    window.set_placeholder(screen.placeholder.as_str().into());
    window.set_body_kind(screen.body.kind().into());

    let mut rows = Vec::new();
    match screen.body {
        Body::Loading { text } => window.set_loading_text(text.into()),
        Body::Entries(entries) => rows = entries.into_iter().map(entry_row).collect(),
        Body::NotFound(notice) | Body::Failed(notice) => {
            window.set_notice_glyph(notice.glyph.into());
            window.set_notice_heading(notice.heading.into());
            window.set_notice_message(notice.message.into());
        }
    }
    window.set_entries(ModelRc::new(VecModel::from(rows)));
}

fn entry_row(entry: EntryView) -> EntryRow {
    let meanings: Vec<MeaningRow> = entry
        .meanings
        .into_iter()
        .map(|m| MeaningRow {
            part_of_speech: m.part_of_speech.into(),
            definitions: ModelRc::new(VecModel::from(
                m.definitions
                    .into_iter()
                    .map(SharedString::from)
                    .collect::<Vec<_>>(),
            )),
        })
        .collect();

    EntryRow {
        word: entry.word.into(),
        phonetic: entry.phonetic.unwrap_or_default().into(),
        has_audio: entry.audio.is_some(),
        playing: entry.audio.is_some_and(|a| a.icon == PlaybackIcon::Pause),
        meanings: ModelRc::new(VecModel::from(meanings)),
    }
}
