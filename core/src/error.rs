use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidArgument,
    Unavailable,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::Unavailable => "UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

pub trait CodedError: std::error::Error {
    fn error_code(&self) -> ErrorCode;
}

/// Failures while finalizing an entity builder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("{kind} is missing an id")]
    MissingId { kind: &'static str },
    #[error("{kind} {id} is missing properties")]
    MissingProperties { kind: &'static str, id: i64 },
    #[error("{kind} {id} was given both typed and mapping properties")]
    ConflictingPropertySources { kind: &'static str, id: i64 },
    #[error("relationship {id} is missing a type label")]
    MissingType { id: i64 },
}

impl CodedError for EntityError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}
