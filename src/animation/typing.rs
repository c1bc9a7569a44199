use std::time::Duration;

pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);
pub const DELETE_INTERVAL: Duration = Duration::from_millis(50);
pub const DWELL: Duration = Duration::from_millis(2000);

/// Types a phrase out one character at a time, holds it, deletes it twice as fast, then moves
/// on to the next phrase. Loops forever.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    text: String,
}

impl TypingAnimator {
    /// Returns `None` when there is nothing to type.
    pub fn new(phrases: &[String]) -> Option<Self> {
        let phrases: Vec<Vec<char>> = phrases
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.chars().collect())
            .collect();

        if phrases.is_empty() {
            return None;
        }

        Some(Self { phrases, phrase_index: 0, char_index: 0, deleting: false, text: String::new() })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advances one character and returns how long to wait before the next step.
    pub fn step(&mut self) -> Duration {
        let phrase = &self.phrases[self.phrase_index];

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.text = phrase[..self.char_index].iter().collect();

            if self.char_index == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            }
        } else {
            self.char_index = (self.char_index + 1).min(phrase.len());
            self.text = phrase[..self.char_index].iter().collect();

            if self.char_index == phrase.len() {
                self.deleting = true;
                return DWELL;
            }
        }

        if self.deleting {
            DELETE_INTERVAL
        } else {
            TYPE_INTERVAL
        }
    }
}
