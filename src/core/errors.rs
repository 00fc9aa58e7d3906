use thiserror::Error;

#[derive(Error, Debug)]
pub enum TangoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Duplicate word id: {0}")]
    DuplicateWordId(String),

    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown card direction: {0}")]
    UnknownDirection(String),

    #[error("TangoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for TangoError {
    fn from(error: std::io::Error) -> Self {
        TangoError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for TangoError {
    fn from(error: reqwest::Error) -> Self {
        TangoError::Reqwest(Box::new(error))
    }
}
