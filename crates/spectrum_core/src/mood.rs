//! Mood states and the seven-point image intensity scale.

use crate::error::{Result, SpectrumError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three discrete mood states of the artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodState {
    Manic,
    Mixed,
    Depressive,
}

impl MoodState {
    /// Cycle order used by swipe gestures: depressive → mixed → manic.
    pub const CYCLE: [MoodState; 3] = [MoodState::Depressive, MoodState::Mixed, MoodState::Manic];

    /// Display order used by statistics and the share text.
    pub const ALL: [MoodState; 3] = [MoodState::Manic, MoodState::Mixed, MoodState::Depressive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manic => "manic",
            Self::Mixed => "mixed",
            Self::Depressive => "depressive",
        }
    }

    /// Capitalized label for badges and stats
    pub fn label(self) -> &'static str {
        match self {
            Self::Manic => "Manic",
            Self::Mixed => "Mixed",
            Self::Depressive => "Depressive",
        }
    }

    fn cycle_index(self) -> usize {
        match self {
            Self::Depressive => 0,
            Self::Mixed => 1,
            Self::Manic => 2,
        }
    }

    /// Next state in the cycle, wrapping manic back to depressive.
    pub fn next(self) -> Self {
        Self::CYCLE[(self.cycle_index() + 1) % Self::CYCLE.len()]
    }

    /// Previous state in the cycle, wrapping depressive back to manic.
    pub fn previous(self) -> Self {
        let len = Self::CYCLE.len();
        Self::CYCLE[(self.cycle_index() + len - 1) % len]
    }
}

impl fmt::Display for MoodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodState {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manic" => Ok(Self::Manic),
            "mixed" => Ok(Self::Mixed),
            "depressive" => Ok(Self::Depressive),
            _ => Err(SpectrumError::InvalidState(s.to_string())),
        }
    }
}

/// A point on the seven-step intensity scale.
///
/// -3 is the depressive extreme, +3 the manic extreme and 0 is neutral.
/// Values outside that range cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ImagePosition(i8);

impl ImagePosition {
    pub const MIN: i8 = -3;
    pub const MAX: i8 = 3;

    pub const DEPRESSIVE_EXTREME: ImagePosition = ImagePosition(Self::MIN);
    pub const NEUTRAL: ImagePosition = ImagePosition(0);
    pub const MANIC_EXTREME: ImagePosition = ImagePosition(Self::MAX);

    pub fn new(value: i8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SpectrumError::InvalidPosition(value))
        }
    }

    pub fn value(self) -> i8 {
        self.0
    }

    /// Move one step toward `target`; stays put when already there.
    pub fn step_toward(self, target: ImagePosition) -> ImagePosition {
        Self(self.0 + (target.0 - self.0).signum())
    }

    /// Number of single steps between two positions
    pub fn distance(self, other: ImagePosition) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// Every position on the scale, depressive extreme first
    pub fn all() -> impl Iterator<Item = ImagePosition> {
        (Self::MIN..=Self::MAX).map(ImagePosition)
    }
}

impl TryFrom<i8> for ImagePosition {
    type Error = SpectrumError;

    fn try_from(value: i8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for ImagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mood_case_insensitive() {
        assert_eq!("Manic".parse::<MoodState>().unwrap(), MoodState::Manic);
        assert_eq!(" mixed ".parse::<MoodState>().unwrap(), MoodState::Mixed);
        assert_eq!(
            "DEPRESSIVE".parse::<MoodState>().unwrap(),
            MoodState::Depressive
        );
    }

    #[test]
    fn test_parse_unknown_mood_is_invalid_state() {
        let err = "euphoric".parse::<MoodState>().unwrap_err();
        assert_eq!(err, SpectrumError::InvalidState("euphoric".to_string()));
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(MoodState::Depressive.next(), MoodState::Mixed);
        assert_eq!(MoodState::Manic.next(), MoodState::Depressive);
        assert_eq!(MoodState::Depressive.previous(), MoodState::Manic);
        assert_eq!(MoodState::Mixed.previous(), MoodState::Depressive);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MoodState::Depressive).unwrap();
        assert_eq!(json, "\"depressive\"");
        let back: MoodState = serde_json::from_str("\"manic\"").unwrap();
        assert_eq!(back, MoodState::Manic);
    }

    #[test]
    fn test_position_bounds() {
        assert!(ImagePosition::new(-3).is_ok());
        assert!(ImagePosition::new(3).is_ok());
        assert_eq!(
            ImagePosition::new(4).unwrap_err(),
            SpectrumError::InvalidPosition(4)
        );
        assert_eq!(
            ImagePosition::try_from(-4).unwrap_err(),
            SpectrumError::InvalidPosition(-4)
        );
    }

    #[test]
    fn test_step_toward() {
        let start = ImagePosition::DEPRESSIVE_EXTREME;
        assert_eq!(start.step_toward(ImagePosition::MANIC_EXTREME).value(), -2);
        assert_eq!(start.step_toward(start), start);
        assert_eq!(
            ImagePosition::MANIC_EXTREME.step_toward(ImagePosition::NEUTRAL).value(),
            2
        );
        assert_eq!(start.distance(ImagePosition::MANIC_EXTREME), 6);
        assert_eq!(ImagePosition::all().count(), 7);
    }

    #[test]
    fn test_position_display_is_signed() {
        assert_eq!(ImagePosition::MANIC_EXTREME.to_string(), "+3");
        assert_eq!(ImagePosition::DEPRESSIVE_EXTREME.to_string(), "-3");
        assert_eq!(ImagePosition::NEUTRAL.to_string(), "+0");
    }
}
