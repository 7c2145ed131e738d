use thiserror::Error;

use crate::ident::ID_PATTERN;
use crate::model::ItemKind;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to load policy: {0}")]
    Decode(#[from] serde_yaml::Error),

    #[error("invalid item in policy: expected exactly one key, found {found}")]
    MalformedItem { found: usize },

    #[error("invalid policy item '{0}'")]
    UnknownItemKind(String),

    #[error("invalid {kind} definition: {source}")]
    FieldMapping {
        kind: ItemKind,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{kind} has no name")]
    MissingId { kind: ItemKind },

    #[error("{kind} ID does not match pattern {}", ID_PATTERN)]
    InvalidIdFormat { kind: ItemKind },

    #[error("{kind} has no expression")]
    MissingExpression { kind: ItemKind },

    #[error("duplicate {kind} ID '{id}'")]
    DuplicateId { kind: ItemKind, id: String },
}

pub type Result<T> = std::result::Result<T, PolicyError>;
