use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InvalidId(String),
    InvalidName(String),
    InvalidRating(f64),
    InvalidRuntime(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(msg) => write!(f, "invalid id: {msg}"),
            ModelError::InvalidName(msg) => write!(f, "invalid name: {msg}"),
            ModelError::InvalidRating(value) => {
                write!(f, "rating {value} is outside of 0..=10")
            }
            ModelError::InvalidRuntime(raw) => {
                write!(f, "unrecognised runtime '{raw}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
