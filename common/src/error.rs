//! Validation errors raised while building pets.

use thiserror::Error;

use crate::model::PetType;

/// Errors produced when a model value fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A pet type string is not one of the supported types.
    #[error("invalid pet type '{0}', must be one of [{list}]", list = PetType::joined())]
    UnknownPetType(String),
}
