//! Presentation sink that renders to the terminal.

use spectrum_core::{format_clock, ImagePosition, MoodState, StateDurations};
use spectrum_engine::{project_timeline, AudioCue, MoodChange, PresentationSink, TimelineSample};
use std::io::Write;

/// Prints images, thoughts and mood changes as they happen. Statistics
/// ticks are left to the `stats` command so the prompt stays readable.
pub struct TerminalSink;

impl TerminalSink {
    fn emit(&self, line: String) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

impl PresentationSink for TerminalSink {
    fn show_image(&self, position: ImagePosition) -> anyhow::Result<()> {
        self.emit(format!("[image] {}  {}", scale_bar(position), position))
    }

    fn show_thought(&self, state: MoodState, line: &str) -> anyhow::Result<()> {
        self.emit(format!("[{}] \"{}\"", state, line))
    }

    fn mood_changed(&self, change: &MoodChange) -> anyhow::Result<()> {
        let p = &change.profile;
        self.emit(format!(
            "[mood] {} (audio: {} @ {:.2}, particles: {} @ {:.1})",
            change.to.label(),
            p.audio_track,
            p.target_volume,
            p.particle_count,
            p.particle_speed
        ))
    }

    fn audio_changed(&self, cue: &AudioCue) -> anyhow::Result<()> {
        if cue.playing {
            self.emit(format!(
                "[audio] playing {} @ {:.2}",
                cue.profile.audio_track, cue.profile.target_volume
            ))
        } else {
            self.emit("[audio] off".to_string())
        }
    }
}

/// Seven-slot bar with the active position filled.
fn scale_bar(position: ImagePosition) -> String {
    ImagePosition::all()
        .map(|p| if p == position { '●' } else { '·' })
        .collect()
}

pub fn render_stats(durations: &StateDurations) -> String {
    MoodState::ALL
        .iter()
        .map(|s| {
            format!(
                "{:<11} {:>6}  {:>5.1}%",
                s.label(),
                format_clock(durations.get(*s)),
                durations.share_of(*s)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text rendering of the timeline chart: one row per mood lane.
pub fn render_timeline(samples: &[TimelineSample]) -> String {
    const WIDTH: usize = 60;
    if samples.len() < 2 {
        return format!("({} sample(s), need at least 2 to chart)", samples.len());
    }
    let points = project_timeline(samples, WIDTH as f32, 3.0, 0.0);
    let mut rows = vec![vec![' '; WIDTH + 1]; 3];
    for p in points {
        let col = (p.x.round() as usize).min(WIDTH);
        let row = match p.state {
            MoodState::Manic => 0,
            MoodState::Mixed => 1,
            MoodState::Depressive => 2,
        };
        rows[row][col] = '●';
    }
    MoodState::ALL
        .iter()
        .zip(rows)
        .map(|(s, row)| format!("{:<11}|{}", s.label(), row.into_iter().collect::<String>()))
        .collect::<Vec<_>>()
        .join("\n")
}
