use thiserror::Error;

#[derive(Error, Debug)]
pub enum TangoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },

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
        TangoError::Http(Box::new(error))
    }
}
