//! Errors returned by kennel operations.

use kennel_common::ModelError;
use kennel_common::model::{OwnerId, PetId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KennelError>;

/// Errors that can occur while creating or linking owners and pets.
///
/// Every variant is raised before the kennel is modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KennelError {
    /// A name or pet type failed validation.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The owner handle was not issued by this kennel.
    #[error("{0} is not an owner of this kennel")]
    UnknownOwner(OwnerId),

    /// The pet handle was not issued by this kennel.
    #[error("{0} is not a pet of this kennel")]
    UnknownPet(PetId),

    /// Reassignment is disabled and the pet belongs to someone else.
    #[error("{pet} already has an owner ({owner})")]
    AlreadyOwned {
        /// The pet that was being added.
        pet: PetId,
        /// Its current owner.
        owner: OwnerId,
    },
}
