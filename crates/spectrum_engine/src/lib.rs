//! # Dual Spectrum presentation engine
//!
//! Turns a discrete mood switch into a coordinated bundle of presentation
//! effects:
//!
//! - **Register**: current mood and time accumulated per mood
//! - **Sequencer**: stepped walk across the seven intensity images
//! - **Rotator**: inner-monologue line on a mood-dependent rhythm
//! - **Timeline**: bounded history of switches for the chart
//! - **Orchestrator**: the single entry point that drives all of the above
//!
//! ## Scheduling
//!
//! Everything runs on tokio. Image steps and thought rotations are spawned
//! sleep loops tagged with a generation number; a newer request invalidates
//! the older loop before arming its own, so two walks never draw at once.
//! Rendering, audio and particles live behind [`PresentationSink`].

pub mod chart;
mod input;
mod orchestrator;
mod register;
mod rotator;
mod sequencer;
pub mod sink;
mod timeline;

pub use chart::{project_timeline, ChartPoint};
pub use input::{AudioAction, InputEvent};
pub use orchestrator::{target_position, PresentationOrchestrator};
pub use register::MoodRegister;
pub use rotator::ThoughtRotator;
pub use sequencer::{ImageSequencer, TransitionSession};
pub use sink::{AudioCue, MoodChange, NullSink, PresentationSink, RecordingSink, SinkEvent};
pub use timeline::{TimelineRecorder, TimelineSample};
