//! Fixed inner-monologue lines shown for each mood.

use crate::error::{Result, SpectrumError};
use crate::mood::MoodState;

const MANIC: [&str; 7] = [
    "I can do anything! Everything is possible!",
    "My mind races with brilliant ideas and endless energy.",
    "Sleep is optional. The world is mine to conquer.",
    "I feel invincible, unstoppable, infinitely alive!",
    "Time bends to my will. I move faster than reality.",
    "Every connection sparks genius. I see what others miss.",
    "The universe conspires in my favor. Nothing can stop me.",
];

const MIXED: [&str; 7] = [
    "I'm energized but empty. Restless but exhausted.",
    "My mind races with thoughts I don't want to have.",
    "I want to do everything and nothing all at once.",
    "I feel everything and nothing simultaneously.",
    "Agitation and numbness fight for dominance.",
    "I can't find peace in either direction.",
    "My body moves but my soul stays still.",
];

const DEPRESSIVE: [&str; 7] = [
    "Everything feels heavy. Time moves slowly.",
    "I can't find the energy to move forward.",
    "Nothing matters. Nothing will ever matter again.",
    "Exhaustion without rest. Emptiness without end.",
    "The world feels gray, distant, and unreachable.",
    "I'm a burden. Everyone would be better without me.",
    "Why does everything require so much effort?",
];

/// Ordered thought lines keyed by mood. Every list is non-empty.
#[derive(Debug, Clone)]
pub struct ThoughtBook {
    manic: Vec<String>,
    mixed: Vec<String>,
    depressive: Vec<String>,
}

impl ThoughtBook {
    /// Build a book from custom lists, rejecting any empty list.
    pub fn new(manic: Vec<String>, mixed: Vec<String>, depressive: Vec<String>) -> Result<Self> {
        let book = Self {
            manic,
            mixed,
            depressive,
        };
        for state in MoodState::ALL {
            if book.lines(state).is_empty() {
                return Err(SpectrumError::EmptyThoughtList(state));
            }
        }
        Ok(book)
    }

    pub fn lines(&self, state: MoodState) -> &[String] {
        match state {
            MoodState::Manic => &self.manic,
            MoodState::Mixed => &self.mixed,
            MoodState::Depressive => &self.depressive,
        }
    }

    /// Line at `index`, wrapping around the state's list
    pub fn line(&self, state: MoodState, index: usize) -> &str {
        let lines = self.lines(state);
        &lines[index % lines.len()]
    }

    pub fn len(&self, state: MoodState) -> usize {
        self.lines(state).len()
    }
}

impl Default for ThoughtBook {
    fn default() -> Self {
        let owned = |lines: &[&str]| lines.iter().map(|s| s.to_string()).collect();
        Self {
            manic: owned(&MANIC),
            mixed: owned(&MIXED),
            depressive: owned(&DEPRESSIVE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_book_has_seven_lines_per_mood() {
        let book = ThoughtBook::default();
        for state in MoodState::ALL {
            assert_eq!(book.len(state), 7);
        }
        assert_eq!(
            book.line(MoodState::Depressive, 0),
            "Everything feels heavy. Time moves slowly."
        );
    }

    #[test]
    fn test_line_index_wraps() {
        let book = ThoughtBook::default();
        assert_eq!(book.line(MoodState::Manic, 7), book.line(MoodState::Manic, 0));
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = ThoughtBook::new(vec!["a".into()], vec![], vec!["c".into()]).unwrap_err();
        assert_eq!(err, SpectrumError::EmptyThoughtList(MoodState::Mixed));
    }
}
