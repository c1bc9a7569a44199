use std::time::Duration;

use tracing::{
    info,
    warn,
};

use super::{
    feedback::{
        FeedbackKind,
        FormFeedback,
    },
    field::FieldState,
    mailto::{
        MailHandoff,
        OutgoingMessage,
    },
    rules::{
        FieldName,
        RuleSet,
    },
};

/// Pause between entering the submitting state and handing the message off.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const HANDOFF_FAILED_MESSAGE: &str = "An error occurred. Please try again or email me directly.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub loading: bool,
}

impl SubmitButton {
    fn begin(&mut self) {
        self.disabled = true;
        self.loading = true;
    }

    fn finish(&mut self) {
        self.disabled = false;
        self.loading = false;
    }
}

/// Restores the submit button when dropped, whichever way the hand-off went.
struct SubmittingGuard<'a>(&'a mut SubmitButton);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.finish();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field failed validation; the error banner has this generation.
    Blocked { feedback: u64 },
    /// Everything passed; call [`ContactForm::complete`] after [`SUBMIT_DELAY`].
    Pending,
    /// A submission is already in flight.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Sent { feedback: u64 },
    Failed { feedback: u64 },
}

impl Completion {
    pub fn feedback(&self) -> u64 {
        match self {
            Completion::Sent { feedback } | Completion::Failed { feedback } => *feedback,
        }
    }
}

pub struct ContactForm {
    recipient: String,
    rules: RuleSet,
    fields: [FieldState; 4],
    button: SubmitButton,
    pending: Option<OutgoingMessage>,
    feedback: FormFeedback,
}

impl ContactForm {
    pub fn new(recipient: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            recipient: recipient.into(),
            rules,
            fields: Default::default(),
            button: SubmitButton::default(),
            pending: None,
            feedback: FormFeedback::default(),
        }
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        &self.fields[name.index()]
    }

    pub fn button(&self) -> SubmitButton {
        self.button
    }

    pub fn feedback(&self) -> &FormFeedback {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut FormFeedback {
        &mut self.feedback
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn on_blur(&mut self, name: FieldName) -> bool {
        self.fields[name.index()].validate(self.rules.rule(name))
    }

    /// Stores the new value. Only a field already showing an error is re-checked, so a
    /// first-time entry is not flagged mid-typing but a fix is confirmed right away.
    pub fn on_input(&mut self, name: FieldName, value: &str) {
        let field = &mut self.fields[name.index()];
        field.value = value.to_string();
        if field.is_error() {
            field.validate(self.rules.rule(name));
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.pending.is_some() {
            return SubmitOutcome::Ignored;
        }

        // Every field is checked so that all errors show at once.
        let mut valid = true;
        for name in FieldName::ALL {
            if !self.fields[name.index()].validate(self.rules.rule(name)) {
                valid = false;
            }
        }

        if !valid {
            info!("Contact form submission blocked by validation errors");
            let feedback = self.feedback.show(INVALID_FORM_MESSAGE, FeedbackKind::Error);
            return SubmitOutcome::Blocked { feedback };
        }

        self.pending = Some(OutgoingMessage {
            name: self.field(FieldName::Name).value.clone(),
            email: self.field(FieldName::Email).value.clone(),
            subject: self.field(FieldName::Subject).value.clone(),
            message: self.field(FieldName::Message).value.clone(),
        });
        self.button.begin();
        SubmitOutcome::Pending
    }

    /// Hands the pending message off and reports the result. Does nothing without a
    /// pending submission.
    pub fn complete(&mut self, handoff: &mut dyn MailHandoff) -> Option<Completion> {
        let message = self.pending.take()?;
        let _guard = SubmittingGuard(&mut self.button);

        let completion = match handoff.open(&message.mailto(&self.recipient)) {
            Ok(()) => {
                info!("Contact message handed off to mail client");
                for field in &mut self.fields {
                    field.reset();
                }
                Completion::Sent { feedback: self.feedback.show(SENT_MESSAGE, FeedbackKind::Success) }
            }
            Err(e) => {
                warn!("Mail hand-off failed: {}", e);
                Completion::Failed {
                    feedback: self.feedback.show(HANDOFF_FAILED_MESSAGE, FeedbackKind::Error),
                }
            }
        };

        Some(completion)
    }
}
