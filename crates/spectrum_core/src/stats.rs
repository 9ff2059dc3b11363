//! Accumulated time per mood and the text built from it.

use crate::mood::MoodState;
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Elapsed time spent in each mood. Buckets only grow until reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateDurations {
    #[serde(serialize_with = "as_secs_f64")]
    pub manic: Duration,
    #[serde(serialize_with = "as_secs_f64")]
    pub mixed: Duration,
    #[serde(serialize_with = "as_secs_f64")]
    pub depressive: Duration,
}

fn as_secs_f64<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl StateDurations {
    pub fn get(&self, state: MoodState) -> Duration {
        match state {
            MoodState::Manic => self.manic,
            MoodState::Mixed => self.mixed,
            MoodState::Depressive => self.depressive,
        }
    }

    pub fn add(&mut self, state: MoodState, elapsed: Duration) {
        let bucket = match state {
            MoodState::Manic => &mut self.manic,
            MoodState::Mixed => &mut self.mixed,
            MoodState::Depressive => &mut self.depressive,
        };
        *bucket = bucket.saturating_add(elapsed);
    }

    pub fn total(&self) -> Duration {
        self.manic + self.mixed + self.depressive
    }

    /// Percentage of the total spent in `state`; 0 before any time accrued.
    pub fn share_of(&self, state: MoodState) -> f64 {
        let total = self.total().as_secs_f64();
        if total > 0.0 {
            self.get(state).as_secs_f64() / total * 100.0
        } else {
            0.0
        }
    }
}

/// Format a duration as `m:ss`, truncating fractional seconds.
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Text offered to share targets (clipboard, share sheets).
pub fn share_summary(durations: &StateDurations) -> String {
    let mut text = String::from("An Interactive Expression of Bipolar I Disorder\n\nTime Spent:");
    for state in MoodState::ALL {
        text.push_str(&format!(
            "\n{}: {} ({:.1}%)",
            state.label(),
            format_clock(durations.get(state)),
            durations.share_of(state)
        ));
    }
    text
}
