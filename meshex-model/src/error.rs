use std::fmt::{self, Display};

/// Errors produced by model parsing helpers.
#[derive(Debug)]
pub enum ModelError {
    InvalidColor(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidColor(msg) => {
                write!(f, "invalid color: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
