pub mod feedback;
pub mod field;
pub mod form;
pub mod mailto;
pub mod rules;

pub use feedback::{
    FeedbackKind,
    FormFeedback,
};
pub use field::{
    FieldState,
    FieldStatus,
};
pub use form::{
    Completion,
    ContactForm,
    SubmitOutcome,
};
pub use mailto::{
    MailHandoff,
    SystemMailHandoff,
};
pub use rules::{
    FieldName,
    RuleSet,
};
