use crate::mood::MoodState;
use thiserror::Error;

/// Contract violations raised by the presentation core.
///
/// Every input the engine accepts comes from a closed set (three moods, seven
/// positions), so these only surface from caller bugs or unparsed user text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpectrumError {
    /// Image position outside the [-3, 3] intensity scale
    #[error("invalid image position {0}: expected a value in [-3, 3]")]
    InvalidPosition(i8),

    /// Mood name that is not one of manic / mixed / depressive
    #[error("invalid mood state: {0:?}")]
    InvalidState(String),

    /// A thought book was built with no lines for a mood
    #[error("no thought lines configured for {0}")]
    EmptyThoughtList(MoodState),
}

/// Result alias used across the spectrum crates
pub type Result<T> = std::result::Result<T, SpectrumError>;
