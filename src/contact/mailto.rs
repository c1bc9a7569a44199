use tracing::info;

use crate::core::{
    utils::encode_uri_component,
    FolioError,
};

/// Hands a composed `mailto:` link to whatever writes the mail.
pub trait MailHandoff {
    fn open(&mut self, mailto: &str) -> Result<(), FolioError>;
}

/// Opens the link with the platform's default mail client.
pub struct SystemMailHandoff;

impl MailHandoff for SystemMailHandoff {
    fn open(&mut self, mailto: &str) -> Result<(), FolioError> {
        open::that_detached(mailto).map_err(|e| FolioError::MailHandoff(e.to_string()))?;
        info!("Opened mail client");
        Ok(())
    }
}

/// Form values captured at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl OutgoingMessage {
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body())
        )
    }
}
