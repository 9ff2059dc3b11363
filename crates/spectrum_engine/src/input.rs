//! Input events from any host front-end, resolved to a mood request.
//!
//! Buttons, radio toggles, keyboard shortcuts and swipe gestures all reduce to
//! the same question: which mood, if any, does this event ask for? The audio
//! toggle and page visibility changes ask for no mood; they map to an
//! [`AudioAction`] instead.

use spectrum_core::config::InputConfig;
use spectrum_core::MoodState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button naming a mood was pressed
    Select(MoodState),
    /// A radio/toggle input for a mood changed
    Toggle { state: MoodState, checked: bool },
    /// Keyboard shortcut
    Key(char),
    /// Touch gesture, in pixels from touch start to touch end
    Swipe { dx: f32, dy: f32 },
    /// The audio on/off control was pressed
    ToggleAudio,
    /// The host page or window was hidden or shown again
    Visibility { hidden: bool },
}

/// Effect of an input event on ambient audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioAction {
    /// Flip the user's audio preference
    Toggle,
    /// Silence while the page is hidden, keeping the preference
    Pause,
    /// Page visible again; play if the preference says so
    Resume,
}

impl InputEvent {
    /// The mood this event requests, given the current one.
    pub fn resolve(&self, current: MoodState, config: &InputConfig) -> Option<MoodState> {
        match *self {
            InputEvent::Select(state) => Some(state),
            InputEvent::Toggle { state, checked } => checked.then_some(state),
            InputEvent::Key(c) => match c.to_ascii_lowercase() {
                'm' => Some(MoodState::Manic),
                'x' => Some(MoodState::Mixed),
                'd' => Some(MoodState::Depressive),
                _ => None,
            },
            InputEvent::ToggleAudio | InputEvent::Visibility { .. } => None,
            InputEvent::Swipe { dx, dy } => {
                let horizontal = dx.abs() > dy.abs() && dx.abs() > config.min_swipe_distance;
                if !horizontal {
                    None
                } else if dx > 0.0 {
                    Some(current.previous())
                } else {
                    Some(current.next())
                }
            }
        }
    }

    /// The audio change this event asks for, if any.
    pub fn audio_action(&self) -> Option<AudioAction> {
        match *self {
            InputEvent::ToggleAudio => Some(AudioAction::Toggle),
            InputEvent::Key(c) if c.eq_ignore_ascii_case(&'a') => Some(AudioAction::Toggle),
            InputEvent::Visibility { hidden: true } => Some(AudioAction::Pause),
            InputEvent::Visibility { hidden: false } => Some(AudioAction::Resume),
            _ => None,
        }
    }
}
