use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HJson error: {0}")]
    HJson(#[from] serde_hjson::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Failed to open mail client: {0}")]
    MailHandoff(String),

    #[error("Required page content missing: {0}")]
    MissingContent(&'static str),

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),

    #[error("FolioError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FolioError {
    fn from(error: std::io::Error) -> Self {
        FolioError::Io(Box::new(error))
    }
}
