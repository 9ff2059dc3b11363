//! Terminal command parsing.

use spectrum_core::MoodState;
use spectrum_engine::InputEvent;

/// Horizontal travel used to synthesize swipe gestures from `<` and `>`.
const SWIPE_TRAVEL: f32 = 120.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Input(InputEvent),
    Stats,
    Timeline,
    Export,
    Clear,
    Reset,
    Share,
    Help,
    Quit,
}

impl Command {
    /// Parse one line of user input. `None` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let cmd = match trimmed.to_ascii_lowercase().as_str() {
            "quit" | "exit" => Command::Quit,
            "stats" => Command::Stats,
            "timeline" => Command::Timeline,
            "export" => Command::Export,
            "clear" => Command::Clear,
            "reset" => Command::Reset,
            "share" => Command::Share,
            "help" | "?" => Command::Help,
            "audio" => Command::Input(InputEvent::ToggleAudio),
            "hide" => Command::Input(InputEvent::Visibility { hidden: true }),
            "show" => Command::Input(InputEvent::Visibility { hidden: false }),
            // Swipe right goes back, swipe left goes forward
            "<" => Command::Input(InputEvent::Swipe {
                dx: SWIPE_TRAVEL,
                dy: 0.0,
            }),
            ">" => Command::Input(InputEvent::Swipe {
                dx: -SWIPE_TRAVEL,
                dy: 0.0,
            }),
            word if word.chars().count() == 1 => {
                let c = word.chars().next().unwrap_or_default();
                Command::Input(InputEvent::Key(c))
            }
            word => match word.parse::<MoodState>() {
                Ok(state) => Command::Input(InputEvent::Select(state)),
                Err(e) => return Err(e.to_string()),
            },
        };
        Ok(Some(cmd))
    }
}

pub const HELP: &str = "\
Commands:
  m | x | d            switch to manic / mixed / depressive
  manic | mixed | depressive
  < | >                swipe back / forward through the cycle
  a | audio            turn ambient audio on / off
  hide | show          pause / resume audio as if the window were hidden
  stats                time spent per mood
  timeline             recorded mood history
  export               timeline as JSON
  clear                clear the timeline
  reset                reset time statistics
  share                print the share text
  help                 this message
  quit                 leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_mood_names_and_keys() {
        assert_eq!(
            Command::parse("Manic").unwrap(),
            Some(Command::Input(InputEvent::Select(MoodState::Manic)))
        );
        assert_eq!(
            Command::parse("x").unwrap(),
            Some(Command::Input(InputEvent::Key('x')))
        );
    }

    #[test]
    fn test_swipes() {
        match Command::parse(">").unwrap() {
            Some(Command::Input(InputEvent::Swipe { dx, .. })) => assert!(dx < 0.0),
            other => panic!("unexpected {:?}", other),
        }
        match Command::parse("<").unwrap() {
            Some(Command::Input(InputEvent::Swipe { dx, .. })) => assert!(dx > 0.0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unknown_word_is_error() {
        let err = Command::parse("euphoric").unwrap_err();
        assert!(err.contains("euphoric"));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Command::parse("QUIT").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("stats").unwrap(), Some(Command::Stats));
        assert_eq!(Command::parse("?").unwrap(), Some(Command::Help));
    }

    #[test]
    fn test_audio_commands() {
        assert_eq!(
            Command::parse("audio").unwrap(),
            Some(Command::Input(InputEvent::ToggleAudio))
        );
        assert_eq!(
            Command::parse("a").unwrap(),
            Some(Command::Input(InputEvent::Key('a')))
        );
        assert_eq!(
            Command::parse("Hide").unwrap(),
            Some(Command::Input(InputEvent::Visibility { hidden: true }))
        );
        assert_eq!(
            Command::parse("show").unwrap(),
            Some(Command::Input(InputEvent::Visibility { hidden: false }))
        );
    }
}
