//! Per-mood presentation profile handed to audio and particle collaborators.

use crate::mood::MoodState;
use serde::{Deserialize, Serialize};

/// What the ambient layers should switch to when a mood becomes current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateProfile {
    /// Name of the ambient audio track to crossfade to
    pub audio_track: String,
    /// Volume the track fades in to (0.0 - 1.0)
    pub target_volume: f32,
    /// Number of particles on screen
    pub particle_count: u32,
    /// Maximum particle velocity per frame
    pub particle_speed: f32,
}

impl StateProfile {
    pub fn for_state(state: MoodState) -> Self {
        let (target_volume, particle_count, particle_speed) = match state {
            MoodState::Manic => (0.4, 50, 2.0),
            MoodState::Mixed => (0.3, 35, 1.2),
            MoodState::Depressive => (0.25, 20, 0.6),
        };
        Self {
            audio_track: state.as_str().to_string(),
            target_volume,
            particle_count,
            particle_speed,
        }
    }
}
