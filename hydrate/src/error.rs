use crate::source::SourceError;
use graphmap_core::error::{CodedError, EntityError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HydrateError {
    #[error("row is missing field '{field}'")]
    MissingField { field: String },
    #[error("row field '{field}' is invalid: expected {expected}, got {actual}")]
    InvalidField {
        field: String,
        expected: &'static str,
        actual: String,
    },
    #[error("cannot adapt properties of entity {id} into {target}: {source}")]
    TypedAdapter {
        id: i64,
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("row source error: {0}")]
    Source(#[from] SourceError),
    #[error(transparent)]
    Entity(#[from] EntityError),
}

impl CodedError for HydrateError {
    fn error_code(&self) -> ErrorCode {
        match self {
            HydrateError::MissingField { .. }
            | HydrateError::InvalidField { .. }
            | HydrateError::TypedAdapter { .. } => ErrorCode::InvalidArgument,
            HydrateError::Source(SourceError::Decode(_)) => ErrorCode::InvalidArgument,
            HydrateError::Source(SourceError::Transport(_)) => ErrorCode::Unavailable,
            HydrateError::Entity(err) => err.error_code(),
        }
    }
}
