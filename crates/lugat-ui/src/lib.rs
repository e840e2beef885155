use kanal::{AsyncReceiver, AsyncSender};
use lugat_config::ui::UiConfig;
use lugat_types::{AppEvent, FontPreference, UiEvent};
use slint::{CloseRequestResponse, ComponentHandle, ModelRc, SharedString, VecModel};

mod events;

pub use events::apply_screen;

slint::include_modules!();

/// Run the lookup window on the current thread until it closes
pub fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: &UiConfig,
) -> anyhow::Result<()> {
    let window = LookupWindow::new()?;
    let window_weak = window.as_weak();

    let fonts: Vec<SharedString> = FontPreference::ALL
        .iter()
        .map(|f| SharedString::from(f.label()))
        .collect();
    window.set_fonts(ModelRc::new(VecModel::from(fonts)));
    window.set_font_index(config.font.index() as i32);
    window.set_font(config.font.family().into());
    window.set_dark(config.dark);
    window.set_placeholder(config.placeholder.as_str().into());

    // Set up callbacks
    {
        let tx = ui_to_app_tx.clone();
        window.on_search_edited(move |text| forward(&tx, UiEvent::SearchEdited(text.into())));
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_search_submitted(move |text| {
            tracing::debug!("[SLINT] Search submitted: '{}'", text);
            forward(&tx, UiEvent::SearchSubmitted(text.into()));
        });
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_theme_toggled(move || forward(&tx, UiEvent::ToggleTheme));
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_font_selected(move |idx| {
            match usize::try_from(idx).ok().and_then(FontPreference::from_index) {
                Some(font) => forward(&tx, UiEvent::SelectFont(font)),
                None => tracing::warn!("[SLINT] Unknown font index {}", idx),
            }
        });
    }
    {
        let tx = ui_to_app_tx.clone();
        window.on_playback_toggled(move || forward(&tx, UiEvent::TogglePlayback));
    }
    {
        let tx = ui_to_app_tx.clone();
        window.window().on_close_requested(move || {
            forward(&tx, UiEvent::Close);
            CloseRequestResponse::HideWindow
        });
    }

    // Spawn a task to receive events from the app
    slint::spawn_local(async move {
        while let Ok(event) = app_to_ui_rx.recv().await {
            if !events::handle_events(event, &window_weak) {
                break;
            }
        }
        tracing::debug!("[SLINT] App channel closed");
    })?;

    window.run()?;

    Ok(())
}

fn forward(tx: &AsyncSender<AppEvent>, event: UiEvent) {
    let tx = tx.clone();
    let spawned = slint::spawn_local(async move {
        if let Err(e) = tx.send(AppEvent::UiEvent(event)).await {
            tracing::error!("[SLINT] Failed to send UI event: {}", e);
        }
    });
    if let Err(e) = spawned {
        tracing::error!("[SLINT] Failed to spawn UI task: {}", e);
    }
}
