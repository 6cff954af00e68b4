use thiserror::Error;

/// Rejections raised by form validation.
///
/// The display text is what the user sees on the message surface.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid phone number (at least 10 digits).")]
    InvalidPhone,
}

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Index {index} is out of range ({len} contacts)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;
