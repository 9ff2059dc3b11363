//! The seam between the engine and whatever actually draws, plays and
//! animates.
//!
//! Hosts implement [`PresentationSink`] for their UI. Every callback is
//! fallible; the engine logs a failure and carries on, so a blocked audio
//! context or a missing canvas never stalls state, timeline or rotation
//! bookkeeping.

use crate::timeline::TimelineSample;
use spectrum_core::{ImagePosition, MoodState, StateDurations, StateProfile};
use std::sync::Mutex;
use tokio::time::Instant;

/// Sent to collaborators whenever a mood becomes current.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodChange {
    /// Previous mood, `None` on start-up
    pub from: Option<MoodState>,
    pub to: MoodState,
    /// Audio track and particle settings for `to`
    pub profile: StateProfile,
}

impl MoodChange {
    pub fn new(from: Option<MoodState>, to: MoodState) -> Self {
        Self {
            from,
            to,
            profile: StateProfile::for_state(to),
        }
    }
}

/// Sent when ambient audio should start or stop.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioCue {
    /// `true` to fade the profile's track in, `false` to fade everything out
    pub playing: bool,
    /// Profile of the mood current when the cue was raised
    pub profile: StateProfile,
}

impl AudioCue {
    pub fn new(playing: bool, state: MoodState) -> Self {
        Self {
            playing,
            profile: StateProfile::for_state(state),
        }
    }
}

/// Output side of the presentation engine.
///
/// All methods default to doing nothing so a host only wires what it renders.
pub trait PresentationSink: Send + Sync {
    /// Make `position` the only visible image.
    fn show_image(&self, _position: ImagePosition) -> anyhow::Result<()> {
        Ok(())
    }

    /// Replace the displayed thought line.
    fn show_thought(&self, _state: MoodState, _line: &str) -> anyhow::Result<()> {
        Ok(())
    }

    /// Reconfigure audio and particles for a new mood.
    fn mood_changed(&self, _change: &MoodChange) -> anyhow::Result<()> {
        Ok(())
    }

    /// Start, stop or crossfade ambient audio.
    fn audio_changed(&self, _cue: &AudioCue) -> anyhow::Result<()> {
        Ok(())
    }

    /// Live statistics refresh.
    fn durations_updated(&self, _durations: &StateDurations) -> anyhow::Result<()> {
        Ok(())
    }

    /// Timeline buffer changed (new sample or cleared).
    fn timeline_updated(&self, _samples: &[TimelineSample]) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PresentationSink for NullSink {}

/// Log a collaborator failure without propagating it.
pub(crate) fn deliver(what: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        tracing::warn!("Presentation sink failed during {}: {:#}", what, e);
    }
}

// ============================================================================
// RecordingSink
// ============================================================================

/// One notification captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Image(ImagePosition),
    Thought(MoodState, String),
    Mood(MoodChange),
    Audio(AudioCue),
    Durations(StateDurations),
    Timeline(usize),
}

/// Sink that keeps every notification with the instant it arrived.
///
/// Used by headless hosts and by tests to assert on ordering and timing.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(Instant, SinkEvent)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: SinkEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((Instant::now(), event));
    }

    pub fn events(&self) -> Vec<(Instant, SinkEvent)> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Image positions in the order they were shown
    pub fn images(&self) -> Vec<i8> {
        self.image_visits().into_iter().map(|(_, p)| p.value()).collect()
    }

    pub fn image_visits(&self) -> Vec<(Instant, ImagePosition)> {
        self.events()
            .into_iter()
            .filter_map(|(at, e)| match e {
                SinkEvent::Image(p) => Some((at, p)),
                _ => None,
            })
            .collect()
    }

    pub fn thoughts(&self) -> Vec<(MoodState, String)> {
        self.events()
            .into_iter()
            .filter_map(|(_, e)| match e {
                SinkEvent::Thought(s, line) => Some((s, line)),
                _ => None,
            })
            .collect()
    }

    pub fn mood_changes(&self) -> Vec<MoodChange> {
        self.events()
            .into_iter()
            .filter_map(|(_, e)| match e {
                SinkEvent::Mood(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn audio_cues(&self) -> Vec<AudioCue> {
        self.events()
            .into_iter()
            .filter_map(|(_, e)| match e {
                SinkEvent::Audio(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl PresentationSink for RecordingSink {
    fn show_image(&self, position: ImagePosition) -> anyhow::Result<()> {
        self.push(SinkEvent::Image(position));
        Ok(())
    }

    fn show_thought(&self, state: MoodState, line: &str) -> anyhow::Result<()> {
        self.push(SinkEvent::Thought(state, line.to_string()));
        Ok(())
    }

    fn mood_changed(&self, change: &MoodChange) -> anyhow::Result<()> {
        self.push(SinkEvent::Mood(change.clone()));
        Ok(())
    }

    fn audio_changed(&self, cue: &AudioCue) -> anyhow::Result<()> {
        self.push(SinkEvent::Audio(cue.clone()));
        Ok(())
    }

    fn durations_updated(&self, durations: &StateDurations) -> anyhow::Result<()> {
        self.push(SinkEvent::Durations(*durations));
        Ok(())
    }

    fn timeline_updated(&self, samples: &[TimelineSample]) -> anyhow::Result<()> {
        self.push(SinkEvent::Timeline(samples.len()));
        Ok(())
    }
}
