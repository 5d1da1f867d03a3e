use std::fmt;

use crate::model::{OwnerId, PetId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    id: OwnerId,
    name: String,
    pets: Vec<PetId>,
}

impl Owner {
    pub fn new(id: OwnerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            pets: Vec::new(),
        }
    }

    pub fn id(&self) -> OwnerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pets in the order they were assigned to this owner.
    pub fn pets(&self) -> &[PetId] {
        &self.pets
    }

    pub fn has_pet(&self, pet: PetId) -> bool {
        self.pets.contains(&pet)
    }

    /// Appends `pet` unless it is already listed. Returns whether the list changed.
    pub fn push_pet(&mut self, pet: PetId) -> bool {
        if self.has_pet(pet) {
            return false;
        }
        self.pets.push(pet);
        true
    }

    /// Drops `pet` from the list. Returns whether it was present.
    pub fn remove_pet(&mut self, pet: PetId) -> bool {
        let before: usize = self.pets.len();
        self.pets.retain(|listed| *listed != pet);
        before != self.pets.len()
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
