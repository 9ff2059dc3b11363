//! Stepped image transitions across the seven-point intensity scale.
//!
//! Moving from -3 to +3 shows every image in between, one per step delay,
//! instead of jump-cutting. Only the most recent request is ever live: a new
//! request bumps the generation counter and aborts the pending step task, and
//! a step task that wakes with a stale generation exits without drawing.

use crate::sink::{deliver, PresentationSink};
use spectrum_core::{ImagePosition, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// In-flight walk from one position to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSession {
    pub from: ImagePosition,
    pub target: ImagePosition,
    /// Index of the visit currently shown; 0 is `from`
    pub step_index: u8,
}

impl TransitionSession {
    pub fn new(from: ImagePosition, target: ImagePosition) -> Self {
        Self {
            from,
            target,
            step_index: 0,
        }
    }

    pub fn steps(&self) -> u8 {
        self.from.distance(self.target)
    }

    /// Position of the current visit
    pub fn position(&self) -> ImagePosition {
        let mut pos = self.from;
        for _ in 0..self.step_index {
            pos = pos.step_toward(self.target);
        }
        pos
    }

    pub fn is_complete(&self) -> bool {
        self.step_index >= self.steps()
    }

    /// Move to the next visit and return it. A complete session stays put.
    pub fn advance(&mut self) -> ImagePosition {
        if !self.is_complete() {
            self.step_index += 1;
        }
        self.position()
    }
}

#[derive(Debug)]
struct SequencerState {
    position: ImagePosition,
    generation: u64,
    session: Option<TransitionSession>,
}

pub struct ImageSequencer {
    state: Arc<Mutex<SequencerState>>,
    /// Pending step task. Kept out of `state` so `Drop` can always reach it.
    task: std::sync::Mutex<Option<JoinHandle<()>>>,
    sink: Arc<dyn PresentationSink>,
    step_delay: Duration,
}

impl ImageSequencer {
    pub fn new(initial: ImagePosition, step_delay: Duration, sink: Arc<dyn PresentationSink>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SequencerState {
                position: initial,
                generation: 0,
                session: None,
            })),
            task: std::sync::Mutex::new(None),
            sink,
            step_delay,
        }
    }

    /// Last position shown.
    pub async fn position(&self) -> ImagePosition {
        self.state.lock().await.position
    }

    /// Snapshot of the live session, if a walk is still under way.
    pub async fn session(&self) -> Option<TransitionSession> {
        self.state.lock().await.session
    }

    pub async fn is_transitioning(&self) -> bool {
        self.state.lock().await.session.is_some()
    }

    /// Walk to `target`, superseding any walk in progress.
    ///
    /// The first visit (the current position) is shown before this returns;
    /// every later visit follows one step delay after the previous one. When
    /// already at `target` the image is shown once and no timer is armed.
    pub async fn transition_to(&self, target: i8) -> Result<()> {
        let target = ImagePosition::new(target)?;
        let mut state = self.state.lock().await;

        state.generation += 1;
        self.abort_task();
        state.session = None;

        if state.position == target {
            deliver("image display", self.sink.show_image(target));
            return Ok(());
        }

        let session = TransitionSession::new(state.position, target);
        tracing::debug!(
            "Image transition {} -> {} ({} steps)",
            session.from,
            session.target,
            session.steps()
        );
        deliver("image display", self.sink.show_image(session.position()));
        state.session = Some(session);

        let generation = state.generation;
        let handle = tokio::spawn(Self::run_session(
            Arc::clone(&self.state),
            Arc::clone(&self.sink),
            self.step_delay,
            generation,
        ));
        *self.task.lock().unwrap_or_else(|e| e.into_inner()) = Some(handle);
        Ok(())
    }

    /// Drop any pending walk, leaving the last shown position in place.
    pub async fn cancel(&self) {
        let mut state = self.state.lock().await;
        state.generation += 1;
        self.abort_task();
        state.session = None;
    }

    fn abort_task(&self) {
        if let Some(task) = self.task.lock().unwrap_or_else(|e| e.into_inner()).take() {
            task.abort();
        }
    }

    async fn run_session(
        state: Arc<Mutex<SequencerState>>,
        sink: Arc<dyn PresentationSink>,
        step_delay: Duration,
        generation: u64,
    ) {
        loop {
            tokio::time::sleep(step_delay).await;

            let mut guard = state.lock().await;
            if guard.generation != generation {
                return;
            }
            let Some(session) = guard.session.as_mut() else {
                return;
            };
            let next = session.advance();
            let done = session.is_complete();

            guard.position = next;
            tracing::trace!("Image step -> {}", next);
            deliver("image display", sink.show_image(next));

            if done {
                guard.session = None;
                return;
            }
        }
    }
}

impl Drop for ImageSequencer {
    fn drop(&mut self) {
        let task = self.task.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(task) = task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    const STEP: Duration = Duration::from_millis(250);

    fn sequencer(initial: i8) -> (ImageSequencer, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let seq = ImageSequencer::new(ImagePosition::new(initial).unwrap(), STEP, sink.clone());
        (seq, sink)
    }

    #[test]
    fn test_session_walk() {
        let mut s = TransitionSession::new(
            ImagePosition::new(1).unwrap(),
            ImagePosition::new(-2).unwrap(),
        );
        assert_eq!(s.steps(), 3);
        assert_eq!(s.position().value(), 1);
        assert_eq!(s.advance().value(), 0);
        assert_eq!(s.advance().value(), -1);
        assert!(!s.is_complete());
        assert_eq!(s.advance().value(), -2);
        assert!(s.is_complete());
        assert_eq!(s.advance().value(), -2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_sweep_visits_every_position() {
        let (seq, sink) = sequencer(-3);
        let start = tokio::time::Instant::now();

        seq.transition_to(3).await.unwrap();
        // First visit is immediate
        assert_eq!(sink.images(), vec![-3]);
        assert!(seq.is_transitioning().await);

        tokio::time::sleep(STEP * 6 + Duration::from_millis(10)).await;

        assert_eq!(sink.images(), vec![-3, -2, -1, 0, 1, 2, 3]);
        assert_eq!(seq.position().await.value(), 3);
        assert!(!seq.is_transitioning().await);

        let visits = sink.image_visits();
        assert_eq!(visits[0].0, start);
        for (i, pair) in visits.windows(2).enumerate() {
            let gap = pair[1].0 - pair[0].0;
            assert!(
                gap >= STEP && gap <= STEP + Duration::from_millis(1),
                "gap before visit {} was {:?}",
                i + 1,
                gap
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_target_shows_once_without_timer() {
        let (seq, sink) = sequencer(0);
        seq.transition_to(0).await.unwrap();
        assert_eq!(sink.images(), vec![0]);
        assert!(seq.session().await.is_none());

        tokio::time::sleep(STEP * 4).await;
        assert_eq!(sink.images(), vec![0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_target_rejected() {
        let (seq, sink) = sequencer(0);
        let err = seq.transition_to(4).await.unwrap_err();
        assert_eq!(err, spectrum_core::SpectrumError::InvalidPosition(4));
        assert!(sink.images().is_empty());
        assert_eq!(seq.position().await.value(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_walk_never_finishes() {
        let (seq, sink) = sequencer(-3);
        seq.transition_to(3).await.unwrap();

        // Let two steps land (-2, -1), then reverse
        tokio::time::sleep(STEP * 2 + Duration::from_millis(10)).await;
        assert_eq!(seq.position().await.value(), -1);
        seq.transition_to(-3).await.unwrap();

        tokio::time::sleep(STEP * 10).await;

        assert_eq!(sink.images(), vec![-3, -2, -1, -1, -2, -3]);
        assert_eq!(seq.position().await.value(), -3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmitting_target_mid_walk_converges() {
        let (seq, sink) = sequencer(0);
        seq.transition_to(3).await.unwrap();
        tokio::time::sleep(STEP + Duration::from_millis(10)).await;
        seq.transition_to(3).await.unwrap();
        tokio::time::sleep(STEP * 10).await;

        assert_eq!(seq.position().await.value(), 3);
        assert_eq!(*sink.images().last().unwrap(), 3);
        assert!(!sink.images().windows(2).any(|w| w[1] < w[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_walk_even_while_state_is_locked() {
        let (seq, sink) = sequencer(-3);
        seq.transition_to(3).await.unwrap();

        // Someone else holds the state while the sequencer goes away
        let shared = Arc::clone(&seq.state);
        let guard = shared.lock().await;
        drop(seq);
        drop(guard);

        tokio::time::sleep(STEP * 10).await;
        assert_eq!(sink.images(), vec![-3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_freezes_position() {
        let (seq, sink) = sequencer(3);
        seq.transition_to(-3).await.unwrap();
        tokio::time::sleep(STEP + Duration::from_millis(10)).await;
        seq.cancel().await;
        tokio::time::sleep(STEP * 10).await;

        assert_eq!(sink.images(), vec![3, 2]);
        assert_eq!(seq.position().await.value(), 2);
        assert!(!seq.is_transitioning().await);
    }
}
