//! Audio subsystem
//!
//! Plays pre-rendered wav assets in reaction to game events. This layer is
//! a pure consumer: the engine never calls into it, the front-end maps
//! [`MoveOutcome`](crate::MoveOutcome) / [`MoveError`](crate::MoveError)
//! to a [`SoundEvent`] and asks the manager to play it.
//!
//! All failures (no output device, missing asset, decode error) degrade to
//! silence with a warning; they are never surfaced to the game.

pub mod synth;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Game events with an associated sound effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Place,
    Win,
    Invalid,
    Undo,
}

impl SoundEvent {
    pub const ALL: [SoundEvent; 4] = [
        SoundEvent::Place,
        SoundEvent::Win,
        SoundEvent::Invalid,
        SoundEvent::Undo,
    ];

    /// Asset file name under the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEvent::Place => "stone_place.wav",
            SoundEvent::Win => "game_win.wav",
            SoundEvent::Invalid => "invalid_move.wav",
            SoundEvent::Undo => "undo.wav",
        }
    }
}

/// Background music styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicStyle {
    Peaceful,
    Energetic,
    Mysterious,
    Meditative,
    Epic,
    Jazz,
}

impl MusicStyle {
    pub const ALL: [MusicStyle; 6] = [
        MusicStyle::Peaceful,
        MusicStyle::Energetic,
        MusicStyle::Mysterious,
        MusicStyle::Meditative,
        MusicStyle::Epic,
        MusicStyle::Jazz,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MusicStyle::Peaceful => "peaceful",
            MusicStyle::Energetic => "energetic",
            MusicStyle::Mysterious => "mysterious",
            MusicStyle::Meditative => "meditative",
            MusicStyle::Epic => "epic",
            MusicStyle::Jazz => "jazz",
        }
    }

    pub fn file_name(self) -> String {
        format!("background_{}.wav", self.name())
    }
}

/// Default location of the generated wav assets (see the `make-sounds` bin)
pub const DEFAULT_ASSET_DIR: &str = "assets/sounds";

/// Sound effect and background music playback.
///
/// Holds one rodio output stream for the lifetime of the app. Effect wavs
/// are kept in memory and decoded per play; background music loops on a
/// dedicated sink.
pub struct SoundManager {
    // The stream must stay alive for the handle to keep working
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    sounds: HashMap<SoundEvent, Vec<u8>>,
    asset_dir: PathBuf,
    enabled: bool,
    sfx_volume: f32,
    music_sink: Option<Sink>,
    music_enabled: bool,
    music_volume: f32,
    current_style: MusicStyle,
}

impl SoundManager {
    /// Open the default output device and load all effect assets.
    ///
    /// Never fails: a missing device or missing assets just disable the
    /// affected sounds.
    pub fn new() -> Self {
        Self::with_asset_dir(DEFAULT_ASSET_DIR)
    }

    pub fn with_asset_dir(dir: impl Into<PathBuf>) -> Self {
        let asset_dir = dir.into();
        let (stream, handle) = match OutputStream::try_default() {
            Ok((stream, handle)) => (Some(stream), Some(handle)),
            Err(err) => {
                eprintln!("warning: no audio output device, sound disabled: {err}");
                (None, None)
            }
        };

        let mut manager = Self {
            _stream: stream,
            handle,
            sounds: HashMap::new(),
            asset_dir,
            enabled: true,
            sfx_volume: 0.5,
            music_sink: None,
            music_enabled: true,
            music_volume: 0.5,
            current_style: MusicStyle::Peaceful,
        };
        manager.load_sounds();
        manager.start_background_music();
        manager
    }

    fn load_sounds(&mut self) {
        if self.handle.is_none() {
            return;
        }
        for event in SoundEvent::ALL {
            let path = self.asset_dir.join(event.file_name());
            match std::fs::read(&path) {
                Ok(bytes) => {
                    self.sounds.insert(event, bytes);
                }
                Err(_) => {
                    eprintln!(
                        "warning: missing sound asset {} (run make-sounds to generate it)",
                        path.display()
                    );
                }
            }
        }
    }

    /// Play the effect for a game event
    pub fn play(&self, event: SoundEvent) {
        if !self.enabled {
            return;
        }
        let (Some(handle), Some(bytes)) = (&self.handle, self.sounds.get(&event)) else {
            return;
        };
        match Decoder::new(Cursor::new(bytes.clone())) {
            Ok(source) => {
                let source = source.convert_samples::<f32>().amplify(self.sfx_volume);
                if let Err(err) = handle.play_raw(source) {
                    eprintln!("warning: failed to play sound: {err}");
                }
            }
            Err(err) => eprintln!("warning: failed to decode sound asset: {err}"),
        }
    }

    /// Start (or restart) the looping background track for the current style
    fn start_background_music(&mut self) {
        self.stop_background_music();
        if !self.music_enabled {
            return;
        }
        let Some(handle) = &self.handle else {
            return;
        };

        let path = self.asset_dir.join(self.current_style.file_name());
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => {
                eprintln!(
                    "warning: missing music asset {} (run make-sounds to generate it)",
                    path.display()
                );
                return;
            }
        };

        let source = match Decoder::new(Cursor::new(bytes)) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("warning: failed to decode music asset: {err}");
                return;
            }
        };

        match Sink::try_new(handle) {
            Ok(sink) => {
                sink.set_volume(self.music_volume);
                sink.append(source.repeat_infinite());
                self.music_sink = Some(sink);
            }
            Err(err) => eprintln!("warning: failed to start background music: {err}"),
        }
    }

    fn stop_background_music(&mut self) {
        if let Some(sink) = self.music_sink.take() {
            sink.stop();
        }
    }

    /// Toggle sound effects; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle background music; returns the new state
    pub fn toggle_background_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        if self.music_enabled {
            self.start_background_music();
        } else {
            self.stop_background_music();
        }
        self.music_enabled
    }

    pub fn is_music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn current_style(&self) -> MusicStyle {
        self.current_style
    }

    /// Switch the background track. `None` picks a random style other than
    /// the current one.
    pub fn switch_background_music(&mut self, style: Option<MusicStyle>) -> MusicStyle {
        use rand::seq::SliceRandom;

        let next = style.unwrap_or_else(|| {
            let others: Vec<MusicStyle> = MusicStyle::ALL
                .into_iter()
                .filter(|&s| s != self.current_style)
                .collect();
            *others.choose(&mut rand::thread_rng()).unwrap_or(&self.current_style)
        });

        if next != self.current_style {
            self.current_style = next;
            if self.music_enabled {
                self.start_background_music();
            }
        }
        self.current_style
    }

    /// Sound effect volume, 0.0 to 1.0
    pub fn set_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.sfx_volume
    }

    /// Background music volume, 0.0 to 1.0
    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.music_sink {
            sink.set_volume(self.music_volume);
        }
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }
}

impl Default for SoundManager {
    fn default() -> Self {
        Self::new()
    }
}
