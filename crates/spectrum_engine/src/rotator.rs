//! Rotating inner-monologue line.
//!
//! Each mood has its own rhythm: manic thoughts turn over fastest and
//! depressive ones slowest. Entering a mood picks a random line and waits a
//! full interval of the new mood before the first rotation.

use crate::sink::{deliver, PresentationSink};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spectrum_core::config::ThoughtConfig;
use spectrum_core::{MoodState, ThoughtBook};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

struct RotatorState {
    generation: u64,
    mood: Option<MoodState>,
    index: usize,
    rng: StdRng,
}

pub struct ThoughtRotator {
    state: Arc<Mutex<RotatorState>>,
    /// Pending rotation task. Kept out of `state` so `Drop` can always reach it.
    task: std::sync::Mutex<Option<JoinHandle<()>>>,
    book: Arc<ThoughtBook>,
    intervals: ThoughtConfig,
    sink: Arc<dyn PresentationSink>,
}

impl ThoughtRotator {
    pub fn new(book: ThoughtBook, intervals: ThoughtConfig, sink: Arc<dyn PresentationSink>) -> Self {
        let rng = match intervals.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: Arc::new(Mutex::new(RotatorState {
                generation: 0,
                mood: None,
                index: 0,
                rng,
            })),
            task: std::sync::Mutex::new(None),
            book: Arc::new(book),
            intervals,
            sink,
        }
    }

    /// Show a random line for `mood` and restart the rotation schedule.
    pub async fn start(&self, mood: MoodState) {
        let mut state = self.state.lock().await;
        state.generation += 1;
        self.abort_task();

        let index = state.rng.gen_range(0..self.book.len(mood));
        state.index = index;
        state.mood = Some(mood);
        deliver(
            "thought display",
            self.sink.show_thought(mood, self.book.line(mood, index)),
        );

        let generation = state.generation;
        let interval = self.intervals.interval(mood);
        tracing::debug!("Thought rotation for {} every {:?}", mood, interval);

        let shared = Arc::clone(&self.state);
        let book = Arc::clone(&self.book);
        let sink = Arc::clone(&self.sink);
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;

                let mut guard = shared.lock().await;
                if guard.generation != generation {
                    return;
                }
                guard.index = (guard.index + 1) % book.len(mood);
                deliver(
                    "thought display",
                    sink.show_thought(mood, book.line(mood, guard.index)),
                );
            }
        });
        *self.task.lock().unwrap_or_else(|e| e.into_inner()) = Some(handle);
    }

    /// Cancel the rotation timer. Safe to call when already stopped.
    pub async fn stop(&self) {
        let mut state = self.state.lock().await;
        state.generation += 1;
        self.abort_task();
        state.mood = None;
    }

    fn abort_task(&self) {
        if let Some(task) = self.task.lock().unwrap_or_else(|e| e.into_inner()).take() {
            task.abort();
        }
    }

    /// Line currently on display, if rotating.
    pub async fn current_line(&self) -> Option<String> {
        let state = self.state.lock().await;
        state
            .mood
            .map(|mood| self.book.line(mood, state.index).to_string())
    }

    pub async fn mood(&self) -> Option<MoodState> {
        self.state.lock().await.mood
    }
}

impl Drop for ThoughtRotator {
    fn drop(&mut self) {
        let task = self.task.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(task) = task.take() {
            task.abort();
        }
    }
}
