//! Projection of timeline samples onto a 2D chart.
//!
//! Time runs left to right across the sampled range; each mood has its own
//! horizontal lane (manic on top, depressive at the bottom).

use crate::timeline::TimelineSample;
use serde::Serialize;
use spectrum_core::MoodState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f32,
    pub y: f32,
    pub state: MoodState,
}

/// Vertical lane of `state` inside a chart of the given height.
pub fn lane_y(state: MoodState, height: f32, padding: f32) -> f32 {
    let graph_height = height - padding * 2.0;
    match state {
        MoodState::Manic => padding,
        MoodState::Mixed => padding + graph_height / 2.0,
        MoodState::Depressive => padding + graph_height,
    }
}

/// Map samples to chart coordinates. Fewer than two samples draw nothing.
pub fn project_timeline(
    samples: &[TimelineSample],
    width: f32,
    height: f32,
    padding: f32,
) -> Vec<ChartPoint> {
    if samples.len() < 2 {
        return Vec::new();
    }
    let graph_width = width - padding * 2.0;

    let Some(min) = samples.iter().map(|s| s.at).min() else {
        return Vec::new();
    };
    let max = samples.iter().map(|s| s.at).max().unwrap_or(min);
    let range_ms = match (max - min).as_secs_f32() * 1000.0 {
        r if r > 0.0 => r,
        _ => 1.0,
    };

    samples
        .iter()
        .map(|s| {
            let offset_ms = (s.at - min).as_secs_f32() * 1000.0;
            ChartPoint {
                x: padding + offset_ms / range_ms * graph_width,
                y: lane_y(s.state, height, padding),
                state: s.state,
            }
        })
        .collect()
}
