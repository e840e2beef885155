//! Pronunciation clip output.
//!
//! Clips are downloaded on the tokio runtime and handed to a dedicated thread
//! that owns the rodio output stream (the stream is not `Send`). The thread
//! reports natural ends and failures back as [`AppEvent`]s.

use std::io::Cursor;
use std::thread;
use std::time::Duration;

use kanal::{AsyncSender, ReceiveErrorTimeout, Receiver, Sender};
use lugat_types::{AppEvent, AudioCommand, ClipId};
use reqwest::StatusCode;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Failed to download clip: {0}")]
    Download(#[from] reqwest::Error),

    #[error("Clip server answered HTTP {0}")]
    Status(StatusCode),

    #[error("No audio output: {0}")]
    Output(#[from] rodio::StreamError),

    #[error("Failed to create audio sink: {0}")]
    Sink(#[from] rodio::PlayError),

    #[error("Failed to decode clip: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("Audio thread is gone")]
    Closed,
}

enum PlayerCommand {
    Select { clip: ClipId },
    Load { clip: ClipId, bytes: Vec<u8> },
    Pause,
    Resume,
    Stop,
}

/// Handle to the playback thread
pub struct AudioOutput {
    commands: Sender<PlayerCommand>,
    client: reqwest::Client,
    events: AsyncSender<AppEvent>,
}

impl AudioOutput {
    pub fn spawn(volume: f32, events: AsyncSender<AppEvent>) -> std::io::Result<Self> {
        let (commands, rx) = kanal::unbounded();
        let thread_events = events.clone_sync();

        thread::Builder::new()
            .name("lugat-audio".into())
            .spawn(move || playback_thread(rx, thread_events, volume))?;

        Ok(Self {
            commands,
            client: reqwest::Client::new(),
            events,
        })
    }

    /// Carry out one command. Downloads run in the background; a failed
    /// download is reported as [`AppEvent::PlaybackFailed`].
    pub fn execute(&self, command: AudioCommand) -> Result<(), AudioError> {
        match command {
            AudioCommand::Play { clip, url } => {
                self.send(PlayerCommand::Select { clip })?;

                let client = self.client.clone();
                let commands = self.commands.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    match download(&client, &url).await {
                        Ok(bytes) => {
                            tracing::debug!("Clip {} downloaded ({} bytes)", clip, bytes.len());
                            if commands.send(PlayerCommand::Load { clip, bytes }).is_err() {
                                tracing::error!("Audio thread is gone, dropping clip {}", clip);
                            }
                        }
                        Err(e) => {
                            tracing::error!("Failed to fetch clip {}: {}", url, e);
                            let _ = events
                                .send(AppEvent::PlaybackFailed {
                                    clip,
                                    message: e.to_string(),
                                })
                                .await;
                        }
                    }
                });
                Ok(())
            }
            AudioCommand::Pause => self.send(PlayerCommand::Pause),
            AudioCommand::Resume => self.send(PlayerCommand::Resume),
            AudioCommand::Stop => self.send(PlayerCommand::Stop),
        }
    }

    fn send(&self, command: PlayerCommand) -> Result<(), AudioError> {
        self.commands.send(command).map_err(|_| AudioError::Closed)
    }
}

async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, AudioError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(AudioError::Status(response.status()));
    }
    Ok(response.bytes().await?.to_vec())
}

/// Something that can be paused, resumed and asked whether it ran out
trait Voice {
    fn pause(&self);
    fn play(&self);
    fn stop(&self);
    fn finished(&self) -> bool;
}

impl Voice for Sink {
    fn pause(&self) {
        Sink::pause(self)
    }

    fn play(&self) {
        Sink::play(self)
    }

    fn stop(&self) {
        Sink::stop(self)
    }

    fn finished(&self) -> bool {
        self.empty()
    }
}

/// Bookkeeping of the playback thread, independent of the output device
struct Deck<V> {
    selected: Option<ClipId>,
    paused: bool,
    voice: Option<V>,
}

impl<V: Voice> Deck<V> {
    fn new() -> Self {
        Self {
            selected: None,
            paused: false,
            voice: None,
        }
    }

    fn select(&mut self, clip: ClipId) {
        self.stop();
        self.selected = Some(clip);
        self.paused = false;
    }

    /// Whether a downloaded clip is still wanted
    fn wants(&self, clip: ClipId) -> bool {
        self.selected == Some(clip) && self.voice.is_none()
    }

    fn load(&mut self, voice: V) {
        if self.paused {
            voice.pause();
        } else {
            voice.play();
        }
        self.voice = Some(voice);
    }

    fn pause(&mut self) {
        self.paused = true;
        if let Some(voice) = &self.voice {
            voice.pause();
        }
    }

    fn resume(&mut self) {
        self.paused = false;
        if let Some(voice) = &self.voice {
            voice.play();
        }
    }

    fn stop(&mut self) {
        if let Some(voice) = self.voice.take() {
            voice.stop();
        }
        self.selected = None;
    }

    /// Clip that just ran out, clearing it
    fn take_finished(&mut self) -> Option<ClipId> {
        let finished = !self.paused && self.voice.as_ref().is_some_and(Voice::finished);
        if !finished {
            return None;
        }
        self.voice = None;
        self.selected.take()
    }
}

fn playback_thread(rx: Receiver<PlayerCommand>, events: Sender<AppEvent>, volume: f32) {
    let mut output: Option<(OutputStream, OutputStreamHandle)> = None;
    let mut deck: Deck<Sink> = Deck::new();

    tracing::info!("Audio thread started");
    loop {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(PlayerCommand::Select { clip }) => deck.select(clip),
            Ok(PlayerCommand::Load { clip, bytes }) => {
                if !deck.wants(clip) {
                    tracing::debug!("Dropping clip {} that is no longer wanted", clip);
                    continue;
                }
                match open_sink(&mut output, bytes, volume) {
                    Ok(sink) => deck.load(sink),
                    Err(e) => {
                        tracing::error!("Failed to play clip {}: {}", clip, e);
                        deck.stop();
                        let _ = events.send(AppEvent::PlaybackFailed {
                            clip,
                            message: e.to_string(),
                        });
                    }
                }
            }
            Ok(PlayerCommand::Pause) => deck.pause(),
            Ok(PlayerCommand::Resume) => deck.resume(),
            Ok(PlayerCommand::Stop) => deck.stop(),
            Err(ReceiveErrorTimeout::Timeout) => {}
            Err(_) => break,
        }

        if let Some(clip) = deck.take_finished() {
            tracing::debug!("Clip {} finished", clip);
            if events.send(AppEvent::PlaybackEnded { clip }).is_err() {
                break;
            }
        }
    }

    deck.stop();
    tracing::info!("Audio thread stopping");
}

fn open_sink(
    output: &mut Option<(OutputStream, OutputStreamHandle)>,
    bytes: Vec<u8>,
    volume: f32,
) -> Result<Sink, AudioError> {
    let handle = match output {
        Some((_, handle)) => handle.clone(),
        None => {
            let (stream, handle) = OutputStream::try_default()?;
            tracing::info!("Opened default audio output");
            *output = Some((stream, handle.clone()));
            handle
        }
    };

    let source = Decoder::new(Cursor::new(bytes))?;
    let sink = Sink::try_new(&handle)?;
    sink.set_volume(volume);
    sink.append(source);
    Ok(sink)
}
