//! Audio player controls.
//!
//! [`PlayerControls`] wires the play/pause button, progress bar and volume
//! slider to a [`MediaElement`]. The progress bar works in percent (0..100),
//! the volume slider in 0..1.

use tracing::{debug, info};

use crate::models::Song;

/// Button label while paused.
pub const PLAY_LABEL: &str = "▶️";

/// Button label while playing.
pub const PAUSE_LABEL: &str = "⏸️";

/// A media element the controls drive.
pub trait MediaElement {
    fn is_paused(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);

    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);

    /// Length in seconds, `None` until the media is known.
    fn duration(&self) -> Option<f64>;

    /// Volume in 0..1.
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);

    fn source(&self) -> Option<&str>;
    /// Replace the source. Playback stops and the position resets.
    fn set_source(&mut self, url: &str);
}

/// In-memory media element. Tracks state without producing sound.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessMedia {
    paused: bool,
    current_time: f64,
    duration: Option<f64>,
    volume: f64,
    source: Option<String>,
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self {
            paused: true,
            current_time: 0.0,
            duration: None,
            volume: 1.0,
            source: None,
        }
    }
}

impl HeadlessMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the known length, as a decoder would after reading metadata.
    pub fn set_duration(&mut self, duration: Option<f64>) {
        self.duration = duration;
    }
}

impl MediaElement for HeadlessMedia {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let upper = self
            .duration
            .filter(|d| *d >= 0.0)
            .unwrap_or(f64::INFINITY);
        self.current_time = seconds.clamp(0.0, upper);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.paused = true;
        self.current_time = 0.0;
        self.duration = None;
    }
}

/// Play/pause, seek and volume controls bound to a media element.
#[derive(Debug)]
pub struct PlayerControls<M> {
    media: M,
    button_label: &'static str,
}

impl<M: MediaElement> PlayerControls<M> {
    pub fn new(media: M) -> Self {
        let button_label = if media.is_paused() {
            PLAY_LABEL
        } else {
            PAUSE_LABEL
        };
        Self {
            media,
            button_label,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Current play/pause button label.
    pub fn button_label(&self) -> &'static str {
        self.button_label
    }

    /// Play/pause button click. Returns the new button label.
    pub fn toggle_play_pause(&mut self) -> &'static str {
        if self.media.is_paused() {
            self.media.play();
            self.button_label = PAUSE_LABEL;
        } else {
            self.media.pause();
            self.button_label = PLAY_LABEL;
        }
        self.button_label
    }

    /// Progress bar value for the current position, in percent. Zero while
    /// the duration is unknown.
    pub fn progress(&self) -> f64 {
        match self.media.duration() {
            Some(duration) if duration > 0.0 && duration.is_finite() => {
                (self.media.current_time() / duration * 100.0).clamp(0.0, 100.0)
            }
            _ => 0.0,
        }
    }

    /// Progress bar input. Moves playback to `progress` percent of the
    /// duration; ignored while the duration is unknown.
    pub fn seek(&mut self, progress: f64) {
        let Some(duration) = self.media.duration().filter(|d| d.is_finite()) else {
            debug!("Seek ignored: duration unknown");
            return;
        };
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 100.0)
        };
        self.media.set_current_time(progress / 100.0 * duration);
    }

    /// Volume slider input, clamped to 0..1.
    pub fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        self.media.set_volume(volume);
    }

    /// Point the player at a song's audio stream and start playback.
    ///
    /// Returns `false` and leaves the player untouched when the song has no
    /// playable audio format.
    pub fn load_song(&mut self, song: &Song) -> bool {
        let Some(url) = song.audio_source().and_then(|f| f.url.as_deref()) else {
            debug!(
                "No audio stream for {}, player unchanged",
                song.video_details.video_id
            );
            return false;
        };

        info!("Playing {} from {}", song.video_details.title, url);
        self.media.set_source(url);
        self.media.play();
        self.button_label = PAUSE_LABEL;
        true
    }
}
