//! Presentation orchestrator: the one entry point for mood switches.
//!
//! A switch updates the register, records the timeline, starts the image walk,
//! restarts thought rotation and tells the audio/particle collaborators, in
//! that order. The register lock is held for the whole sequence so two
//! concurrent switches never interleave, and relative inputs such as swipes
//! resolve against the mood under that same lock.
//!
//! Ambient audio plays only while the user has it enabled and the host page
//! is visible. Locks are always taken register first, then audio.

use crate::input::{AudioAction, InputEvent};
use crate::register::MoodRegister;
use crate::rotator::ThoughtRotator;
use crate::sequencer::ImageSequencer;
use crate::sink::{deliver, AudioCue, MoodChange, PresentationSink};
use crate::timeline::{TimelineRecorder, TimelineSample};
use spectrum_core::{
    share_summary, ImagePosition, MoodState, Result, SpectrumConfig, StateDurations, ThoughtBook,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Image position each mood settles on.
pub fn target_position(state: MoodState) -> ImagePosition {
    match state {
        MoodState::Manic => ImagePosition::MANIC_EXTREME,
        MoodState::Mixed => ImagePosition::NEUTRAL,
        MoodState::Depressive => ImagePosition::DEPRESSIVE_EXTREME,
    }
}

#[derive(Debug, Clone, Copy)]
struct AudioState {
    enabled: bool,
    hidden: bool,
}

impl AudioState {
    fn playing(&self) -> bool {
        self.enabled && !self.hidden
    }
}

pub struct PresentationOrchestrator {
    config: SpectrumConfig,
    register: Mutex<MoodRegister>,
    audio: Mutex<AudioState>,
    timeline: Mutex<TimelineRecorder>,
    sequencer: ImageSequencer,
    rotator: ThoughtRotator,
    sink: Arc<dyn PresentationSink>,
}

impl PresentationOrchestrator {
    /// Create an orchestrator with the built-in thought lines
    pub fn new(config: SpectrumConfig, sink: Arc<dyn PresentationSink>) -> Self {
        Self::with_thoughts(config, ThoughtBook::default(), sink)
    }

    pub fn with_thoughts(
        config: SpectrumConfig,
        book: ThoughtBook,
        sink: Arc<dyn PresentationSink>,
    ) -> Self {
        let initial = config.initial_state;
        Self {
            register: Mutex::new(MoodRegister::new(initial, Instant::now())),
            audio: Mutex::new(AudioState {
                enabled: config.audio.enabled,
                hidden: false,
            }),
            timeline: Mutex::new(TimelineRecorder::new(config.timeline.capacity)),
            sequencer: ImageSequencer::new(
                target_position(initial),
                config.transition.step_delay(),
                Arc::clone(&sink),
            ),
            rotator: ThoughtRotator::new(book, config.thoughts.clone(), Arc::clone(&sink)),
            sink,
            config,
        }
    }

    /// Bring the initial mood on screen: image, first timeline sample,
    /// thought rotation and ambient profile.
    pub async fn start(&self) -> Result<()> {
        let register = self.register.lock().await;
        let state = register.current();
        tracing::info!("Presentation starting in {} state", state);

        self.sequencer
            .transition_to(target_position(state).value())
            .await?;
        self.record(state, Instant::now()).await;
        self.rotator.start(state).await;
        deliver(
            "mood change",
            self.sink.mood_changed(&MoodChange::new(None, state)),
        );
        if self.audio.lock().await.playing() {
            deliver("audio cue", self.sink.audio_changed(&AudioCue::new(true, state)));
        }
        Ok(())
    }

    /// Switch to `new_state`. Returns `false` when it is already current, in
    /// which case nothing at all happens.
    pub async fn switch_state(&self, new_state: MoodState) -> Result<bool> {
        let mut register = self.register.lock().await;
        self.switch_locked(&mut register, new_state).await
    }

    /// Resolve a front-end event and act on it. Returns `true` only when the
    /// mood changed; audio events always return `false`.
    pub async fn handle_input(&self, event: InputEvent) -> Result<bool> {
        let mut register = self.register.lock().await;
        let current = register.current();

        if let Some(action) = event.audio_action() {
            self.apply_audio(action, current).await;
            return Ok(false);
        }
        match event.resolve(current, &self.config.input) {
            Some(state) => self.switch_locked(&mut register, state).await,
            None => Ok(false),
        }
    }

    async fn switch_locked(
        &self,
        register: &mut MoodRegister,
        new_state: MoodState,
    ) -> Result<bool> {
        let now = Instant::now();
        let previous = register.current();

        if !register.set_current(new_state, now) {
            tracing::trace!("Ignoring switch to current state {}", new_state);
            return Ok(false);
        }
        tracing::info!("Mood switch {} -> {}", previous, new_state);
        deliver(
            "statistics refresh",
            self.sink.durations_updated(&register.durations()),
        );

        self.record(new_state, now).await;
        self.sequencer
            .transition_to(target_position(new_state).value())
            .await?;
        self.rotator.start(new_state).await;
        deliver(
            "mood change",
            self.sink
                .mood_changed(&MoodChange::new(Some(previous), new_state)),
        );
        if self.audio.lock().await.playing() {
            deliver(
                "audio cue",
                self.sink.audio_changed(&AudioCue::new(true, new_state)),
            );
        }
        Ok(true)
    }

    /// Flip the audio preference. Returns whether audio is now playing.
    pub async fn toggle_audio(&self) -> bool {
        let register = self.register.lock().await;
        self.apply_audio(AudioAction::Toggle, register.current()).await
    }

    /// Pause audio while the host is hidden and resume when it returns.
    pub async fn set_hidden(&self, hidden: bool) -> bool {
        let register = self.register.lock().await;
        let action = if hidden {
            AudioAction::Pause
        } else {
            AudioAction::Resume
        };
        self.apply_audio(action, register.current()).await
    }

    pub async fn audio_enabled(&self) -> bool {
        self.audio.lock().await.enabled
    }

    pub async fn audio_playing(&self) -> bool {
        self.audio.lock().await.playing()
    }

    /// Caller holds the register lock.
    async fn apply_audio(&self, action: AudioAction, mood: MoodState) -> bool {
        let mut audio = self.audio.lock().await;
        let was_playing = audio.playing();
        match action {
            AudioAction::Toggle => audio.enabled = !audio.enabled,
            AudioAction::Pause => audio.hidden = true,
            AudioAction::Resume => audio.hidden = false,
        }
        let playing = audio.playing();
        if playing != was_playing {
            tracing::info!(
                "Audio {} ({:?})",
                if playing { "on" } else { "off" },
                action
            );
            deliver("audio cue", self.sink.audio_changed(&AudioCue::new(playing, mood)));
        }
        playing
    }

    /// Fold elapsed time into the current mood's bucket.
    pub async fn tick(&self) {
        let mut register = self.register.lock().await;
        register.tick(Instant::now());
        tracing::trace!("Stats tick in {}", register.current());
        deliver(
            "statistics refresh",
            self.sink.durations_updated(&register.durations()),
        );
    }

    /// Run [`tick`](Self::tick) on the configured period until the
    /// orchestrator is dropped or the handle is aborted.
    pub fn spawn_stats_ticker(self: &Arc<Self>) -> JoinHandle<()> {
        let weak = Arc::downgrade(self);
        let period = self.config.stats.tick_interval();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(orchestrator) = weak.upgrade() else {
                    return;
                };
                orchestrator.tick().await;
            }
        })
    }

    pub async fn current(&self) -> MoodState {
        self.register.lock().await.current()
    }

    pub async fn durations(&self) -> StateDurations {
        self.register.lock().await.durations()
    }

    pub async fn timeline_samples(&self) -> Vec<TimelineSample> {
        self.timeline.lock().await.samples()
    }

    pub async fn clear_timeline(&self) {
        let mut timeline = self.timeline.lock().await;
        timeline.clear();
        deliver("timeline refresh", self.sink.timeline_updated(&[]));
    }

    pub async fn reset_durations(&self) {
        let mut register = self.register.lock().await;
        register.reset(Instant::now());
        deliver(
            "statistics refresh",
            self.sink.durations_updated(&register.durations()),
        );
    }

    /// Last image position shown
    pub async fn image_position(&self) -> ImagePosition {
        self.sequencer.position().await
    }

    pub async fn current_thought(&self) -> Option<String> {
        self.rotator.current_line().await
    }

    /// Up-to-date share text.
    pub async fn share_summary(&self) -> String {
        self.tick().await;
        share_summary(&self.durations().await)
    }

    /// Cancel pending image steps and thought rotation.
    pub async fn shutdown(&self) {
        self.sequencer.cancel().await;
        self.rotator.stop().await;
        tracing::info!("Presentation stopped");
    }

    async fn record(&self, state: MoodState, now: Instant) {
        let mut timeline = self.timeline.lock().await;
        timeline.record(state, now);
        deliver(
            "timeline refresh",
            self.sink.timeline_updated(&timeline.samples()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_positions() {
        assert_eq!(target_position(MoodState::Manic).value(), 3);
        assert_eq!(target_position(MoodState::Mixed).value(), 0);
        assert_eq!(target_position(MoodState::Depressive).value(), -3);
    }
}
