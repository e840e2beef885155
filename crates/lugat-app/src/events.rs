use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lugat_client::DictionaryService;
use lugat_config::Config;
use lugat_core::{Effect, WordLookupView, run_lookup};
use lugat_io::AudioOutput;
use lugat_types::{AppEvent, AudioCommand, UiEvent};
use tokio_util::sync::CancellationToken;

/// App's main loop. Owns the view-model; everything else talks to it
/// through `ui_to_app_rx`.
pub async fn event_loop(
    config: Config,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    service: Arc<dyn DictionaryService>,
    audio: Option<AudioOutput>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut view = WordLookupView::new(&config.ui, &config.audio, cancel.child_token());

    let effects = view.mount();
    run_effects(effects, &mut view, &service, audio.as_ref(), &ui_to_app_tx);
    app_to_ui_tx.send(AppEvent::Render(view.screen())).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        let keep_running = handle_events(
            &mut view,
            &service,
            audio.as_ref(),
            &ui_to_app_tx,
            &app_to_ui_tx,
            event,
        )
        .await?;

        if !keep_running {
            break;
        }
    }

    if let Some(audio) = &audio {
        let _ = audio.execute(AudioCommand::Stop);
    }
    tracing::info!("[EVENT_LOOP] Exited");
    Ok(())
}

pub(crate) async fn handle_events(
    view: &mut WordLookupView,
    service: &Arc<dyn DictionaryService>,
    audio: Option<&AudioOutput>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    let effects = match event {
        AppEvent::UiEvent(UiEvent::Close) => {
            tracing::info!("Window closed");
            return Ok(false);
        }
        AppEvent::UiEvent(event @ UiEvent::SearchEdited(_)) => {
            // Draft only, nothing to redraw
            view.handle_ui(event);
            return Ok(true);
        }
        AppEvent::UiEvent(event) => view.handle_ui(event),
        AppEvent::LookupFinished { generation, result } => {
            view.lookup_finished(generation, result)
        }
        AppEvent::PlaybackEnded { clip } => {
            view.playback_ended(clip);
            vec![]
        }
        AppEvent::PlaybackFailed { clip, message } => {
            tracing::warn!("Playback of clip {} failed: {}", clip, message);
            view.playback_failed(clip);
            vec![]
        }
        AppEvent::Render(_) => {
            // UI-only events, ignore in backend
            return Ok(true);
        }
    };

    run_effects(effects, view, service, audio, ui_to_app_tx);
    app_to_ui_tx.send(AppEvent::Render(view.screen())).await?;
    Ok(true)
}

fn run_effects(
    effects: Vec<Effect>,
    view: &mut WordLookupView,
    service: &Arc<dyn DictionaryService>,
    audio: Option<&AudioOutput>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
) {
    for effect in effects {
        match effect {
            Effect::Lookup(ticket) => {
                let service = Arc::clone(service);
                let tx = ui_to_app_tx.clone();
                tokio::spawn(async move {
                    if let Some(event) = run_lookup(service.as_ref(), ticket).await {
                        if let Err(e) = tx.send(event).await {
                            tracing::error!("Failed to deliver lookup result: {}", e);
                        }
                    }
                });
            }
            Effect::Audio(command) => match audio {
                Some(audio) => {
                    tracing::debug!("Audio command: {:?}", command);
                    if let Err(e) = audio.execute(command) {
                        tracing::error!("Audio command failed: {}", e);
                        view.playback_failed(view.audio().clip());
                    }
                }
                None => {
                    tracing::debug!("No audio output, ignoring {:?}", command);
                    view.playback_failed(view.audio().clip());
                }
            },
        }
    }
}
