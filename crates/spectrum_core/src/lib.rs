//! # Dual Spectrum core
//!
//! Data model shared by the presentation engine and its hosts: the three mood
//! states, the seven-point image intensity scale, per-mood presentation
//! profiles, thought lines, accumulated statistics and configuration.

pub mod config;
mod error;
pub mod mood;
pub mod profile;
pub mod stats;
pub mod thoughts;

pub use config::SpectrumConfig;
pub use error::{Result, SpectrumError};
pub use mood::{ImagePosition, MoodState};
pub use profile::StateProfile;
pub use stats::{format_clock, share_summary, StateDurations};
pub use thoughts::ThoughtBook;
