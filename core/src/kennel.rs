//! The registry of owners and pets.
//!
//! A [`Kennel`] is an explicit, caller-owned replacement for a process-wide
//! pet list. It stores every owner and every pet it has created and hands out
//! [`OwnerId`] / [`PetId`] handles. Pets remember their owner as a handle, and
//! owners keep an ordered list of pet handles. The only way to change either
//! side is [`Kennel::add_pet`], which keeps the two in step:
//!
//! * a pet is listed by at most one owner;
//! * `pet.owner() == Some(o)` exactly when `o` lists the pet, and lists it once.
//!
//! Callers only ever see shared references to the stored models, so these
//! invariants cannot be broken from outside. Each kennel stamps its handles
//! with its own tag, so a handle issued by another kennel is rejected even when
//! its index happens to be in range.

use std::sync::atomic::{AtomicU32, Ordering};

use kennel_common::config::Config;
use kennel_common::model::{Owner, OwnerId, Pet, PetId, PetType};
use tracing::{debug, info, warn};

use crate::error::{KennelError, Result};

/// What [`Kennel::add_pet`] did to the relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// The pet had no owner and now belongs to the target owner.
    Added,
    /// The pet was moved away from its previous owner.
    Reassigned { from: OwnerId },
    /// The pet already belonged to the target owner; nothing changed.
    Unchanged,
}

static NEXT_KENNEL_TAG: AtomicU32 = AtomicU32::new(0);

/// A clone keeps its tag, so handles stay valid for both copies.
#[derive(Debug, Clone)]
pub struct Kennel {
    tag: u32,
    config: Config,
    owners: Vec<Owner>,
    pets: Vec<Pet>,
}

impl Kennel {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            tag: NEXT_KENNEL_TAG.fetch_add(1, Ordering::Relaxed),
            config,
            owners: Vec::new(),
            pets: Vec::new(),
        }
    }

    /// Tag stamped into every handle this kennel issues.
    pub fn tag(&self) -> u32 {
        self.tag
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers a new owner with no pets.
    pub fn add_owner(&mut self, name: &str) -> OwnerId {
        let id = OwnerId::new(self.tag, self.owners.len());
        debug!(%id, owner_name = name, "registered owner");
        self.owners.push(Owner::new(id, name));
        id
    }

    pub fn owner(&self, id: OwnerId) -> Result<&Owner> {
        if id.kennel() != self.tag {
            return Err(KennelError::UnknownOwner(id));
        }
        self.owners
            .get(id.index())
            .ok_or(KennelError::UnknownOwner(id))
    }

    pub fn pet(&self, id: PetId) -> Result<&Pet> {
        if id.kennel() != self.tag {
            return Err(KennelError::UnknownPet(id));
        }
        self.pets.get(id.index()).ok_or(KennelError::UnknownPet(id))
    }

    /// Owners in registration order.
    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    /// Every pet ever created by this kennel, in creation order.
    ///
    /// The list is append-only: pets are never removed, whatever happens to
    /// their owners.
    pub fn all_pets(&self) -> &[Pet] {
        &self.pets
    }

    /// First owner registered under `name`.
    pub fn find_owner(&self, name: &str) -> Option<OwnerId> {
        self.owners
            .iter()
            .find(|owner| owner.name() == name)
            .map(Owner::id)
    }

    /// Most recently created pet called `name`.
    pub fn find_pet(&self, name: &str) -> Option<PetId> {
        self.pets
            .iter()
            .rev()
            .find(|pet| pet.name() == name)
            .map(Pet::id)
    }

    /// Resolves a pet's back-reference.
    pub fn owner_of(&self, pet: PetId) -> Result<Option<&Owner>> {
        match self.pet(pet)?.owner() {
            Some(owner) => self.owner(owner).map(Some),
            None => Ok(None),
        }
    }

    /// Creates a pet from a type spelling such as `"dog"`.
    ///
    /// See [`Kennel::create_typed_pet`] for the rest of the contract.
    pub fn create_pet(
        &mut self,
        name: &str,
        pet_type: &str,
        owner: Option<OwnerId>,
    ) -> Result<PetId> {
        let pet_type: PetType = pet_type.parse()?;
        self.create_typed_pet(name, pet_type, owner)
    }

    /// Creates a pet, records it in the registry and, when `owner` is given,
    /// links it to that owner.
    ///
    /// The owner handle is checked first; a failed call leaves the kennel
    /// untouched. Any name is accepted, including an empty one.
    pub fn create_typed_pet(
        &mut self,
        name: &str,
        pet_type: PetType,
        owner: Option<OwnerId>,
    ) -> Result<PetId> {
        if let Some(owner) = owner {
            self.owner(owner)?;
        }

        let id = PetId::new(self.tag, self.pets.len());
        self.pets.push(Pet::new(id, name, pet_type));
        debug!(%id, pet_name = name, %pet_type, "registered pet");

        if let Some(owner) = owner {
            self.add_pet(owner, id)?;
        }
        Ok(id)
    }

    /// Gives `pet` to `owner`, keeping both sides of the relationship in step.
    ///
    /// * An unowned pet is appended to the owner's list.
    /// * A pet owned by someone else is removed from the old owner's list and
    ///   appended to the new one, unless [`Config::allow_reassign`] is off, in
    ///   which case [`KennelError::AlreadyOwned`] is returned.
    /// * A pet that already belongs to `owner` is left where it is.
    pub fn add_pet(&mut self, owner: OwnerId, pet: PetId) -> Result<Link> {
        self.owner(owner)?;
        let current: Option<OwnerId> = self.pet(pet)?.owner();

        let link = match current {
            Some(current) if current == owner => {
                debug!(%pet, %owner, "pet already belongs to owner");
                return Ok(Link::Unchanged);
            }
            Some(previous) if !self.config.allow_reassign => {
                warn!(%pet, %previous, %owner, "reassignment disabled, pet keeps its owner");
                return Err(KennelError::AlreadyOwned {
                    pet,
                    owner: previous,
                });
            }
            Some(previous) => {
                self.owners[previous.index()].remove_pet(pet);
                info!(%pet, from = %previous, to = %owner, "reassigned pet");
                Link::Reassigned { from: previous }
            }
            None => {
                debug!(%pet, %owner, "linked pet");
                Link::Added
            }
        };

        self.owners[owner.index()].push_pet(pet);
        self.pets[pet.index()].set_owner(owner);
        Ok(link)
    }

    /// The owner's pets in the order they were assigned.
    pub fn pets(&self, owner: OwnerId) -> Result<Vec<&Pet>> {
        Ok(self
            .owner(owner)?
            .pets()
            .iter()
            .map(|id| &self.pets[id.index()])
            .collect())
    }

    /// The owner's pets ordered by name.
    ///
    /// Names compare byte-wise, so uppercase sorts before lowercase. Pets with
    /// equal names keep their assignment order.
    pub fn sorted_pets(&self, owner: OwnerId) -> Result<Vec<&Pet>> {
        let mut pets: Vec<&Pet> = self.pets(owner)?;
        pets.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(pets)
    }
}
