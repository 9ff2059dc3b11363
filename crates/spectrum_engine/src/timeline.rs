//! Bounded history of mood switches for the timeline chart.

use chrono::{DateTime, Utc};
use serde::Serialize;
use spectrum_core::MoodState;
use std::collections::VecDeque;
use tokio::time::Instant;

/// One recorded mood entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSample {
    pub state: MoodState,
    /// Monotonic instant, used for chart spacing
    #[serde(skip)]
    pub at: Instant,
    /// Wall-clock time, used for export
    pub recorded_at: DateTime<Utc>,
}

/// FIFO ring of samples, oldest first.
#[derive(Debug, Clone)]
pub struct TimelineRecorder {
    samples: VecDeque<TimelineSample>,
    capacity: usize,
}

impl TimelineRecorder {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, state: MoodState, now: Instant) {
        self.samples.push_back(TimelineSample {
            state,
            at: now,
            recorded_at: Utc::now(),
        });
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn samples(&self) -> Vec<TimelineSample> {
        self.samples.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TimelineRecorder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
