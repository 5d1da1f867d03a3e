//! Applies roster entries to a kennel.
//!
//! Entries run in order against a single [`Kennel`]. Owners are registered the
//! first time they are named. The first entry that fails stops the run and is
//! reported with its 1-based position; entries before it stay applied.

use kennel_common::model::{OwnerId, PetId};
use kennel_common::roster::Entry;
use thiserror::Error;
use tracing::debug;

use crate::error::KennelError;
use crate::kennel::{Kennel, Link};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("no pet named '{0}' has been registered")]
    NoPetNamed(String),

    #[error(transparent)]
    Kennel(#[from] KennelError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entry {position} ('{entry}'): {source}")]
pub struct RosterFailure {
    pub position: usize,
    pub entry: Entry,
    pub source: ApplyError,
}

/// Summary of a successful run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub pets_created: usize,
    pub reassignments: usize,
}

pub fn apply(kennel: &mut Kennel, entries: &[Entry]) -> Result<Applied, RosterFailure> {
    let mut applied = Applied::default();

    for (idx, entry) in entries.iter().enumerate() {
        apply_entry(kennel, entry, &mut applied).map_err(|source| RosterFailure {
            position: idx + 1,
            entry: entry.clone(),
            source,
        })?;
    }

    debug!(
        entries = entries.len(),
        pets_created = applied.pets_created,
        reassignments = applied.reassignments,
        "roster applied"
    );
    Ok(applied)
}

fn apply_entry(kennel: &mut Kennel, entry: &Entry, applied: &mut Applied) -> Result<(), ApplyError> {
    match entry {
        Entry::Create {
            name,
            pet_type,
            owner,
        } => {
            let owner: Option<OwnerId> = owner.as_deref().map(|owner| owner_by_name(kennel, owner));
            kennel.create_typed_pet(name, *pet_type, owner)?;
            applied.pets_created += 1;
        }
        Entry::Assign { name, owner } => {
            let pet: PetId = kennel
                .find_pet(name)
                .ok_or_else(|| ApplyError::NoPetNamed(name.clone()))?;
            let owner: OwnerId = match kennel.find_owner(owner) {
                Some(id) => id,
                None => {
                    ensure_transferable(kennel, pet)?;
                    kennel.add_owner(owner)
                }
            };
            if let Link::Reassigned { .. } = kennel.add_pet(owner, pet)? {
                applied.reassignments += 1;
            }
        }
    }
    Ok(())
}

fn owner_by_name(kennel: &mut Kennel, name: &str) -> OwnerId {
    match kennel.find_owner(name) {
        Some(id) => id,
        None => kennel.add_owner(name),
    }
}

/// Refuses up front a move that `add_pet` would reject, so a failing entry
/// does not leave a freshly registered owner behind.
fn ensure_transferable(kennel: &Kennel, pet: PetId) -> Result<(), KennelError> {
    match kennel.pet(pet)?.owner() {
        Some(owner) if !kennel.config().allow_reassign => {
            Err(KennelError::AlreadyOwned { pet, owner })
        }
        _ => Ok(()),
    }
}
