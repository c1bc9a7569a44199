use super::rules::ValidationRule;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Error(String),
    Success,
}

#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub status: FieldStatus,
}

impl FieldState {
    pub fn is_error(&self) -> bool {
        matches!(self.status, FieldStatus::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FieldStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Runs the rule against the current value and records the outcome.
    pub fn validate(&mut self, rule: &ValidationRule) -> bool {
        match rule.check(&self.value) {
            Ok(()) => {
                self.status = FieldStatus::Success;
                true
            }
            Err(message) => {
                self.status = FieldStatus::Error(message.to_string());
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.status = FieldStatus::Neutral;
    }
}
