use std::time::Duration;

/// How long a form-level message stays up.
pub const FEEDBACK_VISIBLE: Duration = Duration::from_millis(5000);
/// Fade-out time between hiding a message and clearing its text.
pub const FEEDBACK_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Form-level message under the submit button. Every `show` bumps the generation, so
/// dismiss timers scheduled for an older message do nothing.
#[derive(Debug, Clone, Default)]
pub struct FormFeedback {
    message: String,
    kind: Option<FeedbackKind>,
    visible: bool,
    generation: u64,
}

impl FormFeedback {
    pub fn show(&mut self, message: impl Into<String>, kind: FeedbackKind) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.kind = Some(kind);
        self.visible = true;
        self.generation
    }

    pub fn hide(&mut self, generation: u64) {
        if generation == self.generation {
            self.visible = false;
        }
    }

    pub fn clear(&mut self, generation: u64) {
        if generation == self.generation {
            self.visible = false;
            self.message.clear();
            self.kind = None;
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> Option<FeedbackKind> {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_then_clear() {
        let mut feedback = FormFeedback::default();
        let generation = feedback.show("Sent", FeedbackKind::Success);
        assert!(feedback.is_visible());

        feedback.hide(generation);
        assert!(!feedback.is_visible());
        assert_eq!(feedback.message(), "Sent");

        feedback.clear(generation);
        assert_eq!(feedback.message(), "");
        assert_eq!(feedback.kind(), None);
    }

    #[test]
    fn test_stale_dismissal_is_ignored() {
        let mut feedback = FormFeedback::default();
        let first = feedback.show("Please fix the errors in the form", FeedbackKind::Error);
        let second = feedback.show("Sent", FeedbackKind::Success);
        assert_ne!(first, second);

        feedback.hide(first);
        feedback.clear(first);
        assert!(feedback.is_visible());
        assert_eq!(feedback.message(), "Sent");
        assert_eq!(feedback.kind(), Some(FeedbackKind::Success));
    }
}
